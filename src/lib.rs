//! Layouts and request numbers of the Linux NVMe ioctl interface.
//!
//! [`uapi`] mirrors `linux/nvme_ioctl.h`, [`ioctl`] takes request numbers
//! apart, and [`report`] renders the sizes and codes the way the
//! `nvme-ioctl` binary prints them.
mod error;
pub mod ioctl;
pub mod report;
pub mod uapi;

pub use error::Error;
pub use ioctl::{Direction, IoctlFields};
pub use report::{ControlCodeDescriptor, Report, StructureDescriptor};
