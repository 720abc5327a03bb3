//! Mirrors of `include/uapi/linux/nvme_ioctl.h`.
//!
//! Field order and widths follow the kernel header so that `size_of` on these
//! types is the size the kernel expects. The request numbers below are built
//! from those sizes with nix's `request_code_*!` macros, the Rust side of the
//! `_IO`/`_IOW`/`_IOWR` macros.
use std::mem::size_of;
use libc::c_ulong;
use nix::sys::ioctl::ioctl_num_type;
use nix::{request_code_none, request_code_readwrite, request_code_write};

/// `struct nvme_user_io`, the payload of `NVME_IOCTL_SUBMIT_IO`.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct NvmeUserIo {
    pub opcode: u8,
    pub flags: u8,
    pub control: u16,
    /// Number of logical blocks, zero based.
    pub nblocks: u16,
    pub rsvd: u16,
    pub metadata: u64,
    pub addr: u64,
    /// Starting logical block address.
    pub slba: u64,
    pub dsmgmt: u32,
    pub reftag: u32,
    pub apptag: u16,
    pub appmask: u16,
}

/// `struct nvme_passthru_cmd`
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct NvmePassthruCmd {
    pub opcode: u8,
    pub flags: u8,
    pub rsvd1: u16,
    pub nsid: u32,
    pub cdw2: u32,
    pub cdw3: u32,
    pub metadata: u64,
    pub addr: u64,
    pub metadata_len: u32,
    pub data_len: u32,
    pub cdw10: u32,
    pub cdw11: u32,
    pub cdw12: u32,
    pub cdw13: u32,
    pub cdw14: u32,
    pub cdw15: u32,
    pub timeout_ms: u32,
    /// Dword 0 of the completion queue entry.
    pub result: u32,
}

/// `struct nvme_passthru_cmd64`, same as [`NvmePassthruCmd`] with a 64 bit
/// result.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct NvmePassthruCmd64 {
    pub opcode: u8,
    pub flags: u8,
    pub rsvd1: u16,
    pub nsid: u32,
    pub cdw2: u32,
    pub cdw3: u32,
    pub metadata: u64,
    pub addr: u64,
    pub metadata_len: u32,
    pub data_len: u32,
    pub cdw10: u32,
    pub cdw11: u32,
    pub cdw12: u32,
    pub cdw13: u32,
    pub cdw14: u32,
    pub cdw15: u32,
    pub timeout_ms: u32,
    pub rsvd2: u32,
    pub result: u64,
}

/// `struct nvme_admin_cmd` is a define for the passthru command.
pub type NvmeAdminCmd = NvmePassthruCmd;

const NVME_IOCTL_TYPE: u8 = b'N';

/// Widens a request number to `unsigned long`, the type the C headers give
/// it. Request numbers are 32 bits wide and musl types them as a signed int.
pub(crate) const fn request_number(request: ioctl_num_type) -> c_ulong {
    request as u32 as c_ulong
}

pub const NVME_IOCTL_ID: c_ulong = request_number(request_code_none!(NVME_IOCTL_TYPE, 0x40));
pub const NVME_IOCTL_ADMIN_CMD: c_ulong = request_number(request_code_readwrite!(
    NVME_IOCTL_TYPE,
    0x41,
    size_of::<NvmeAdminCmd>()
));
pub const NVME_IOCTL_SUBMIT_IO: c_ulong = request_number(request_code_write!(
    NVME_IOCTL_TYPE,
    0x42,
    size_of::<NvmeUserIo>()
));
pub const NVME_IOCTL_IO_CMD: c_ulong = request_number(request_code_readwrite!(
    NVME_IOCTL_TYPE,
    0x43,
    size_of::<NvmePassthruCmd>()
));
pub const NVME_IOCTL_RESET: c_ulong = request_number(request_code_none!(NVME_IOCTL_TYPE, 0x44));
pub const NVME_IOCTL_SUBSYS_RESET: c_ulong =
    request_number(request_code_none!(NVME_IOCTL_TYPE, 0x45));
pub const NVME_IOCTL_RESCAN: c_ulong = request_number(request_code_none!(NVME_IOCTL_TYPE, 0x46));
pub const NVME_IOCTL_ADMIN64_CMD: c_ulong = request_number(request_code_readwrite!(
    NVME_IOCTL_TYPE,
    0x47,
    size_of::<NvmePassthruCmd64>()
));
pub const NVME_IOCTL_IO64_CMD: c_ulong = request_number(request_code_readwrite!(
    NVME_IOCTL_TYPE,
    0x48,
    size_of::<NvmePassthruCmd64>()
));
