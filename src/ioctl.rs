//! Taking Linux ioctl request numbers apart.
//!
//! A request number packs four fields into one integer, from low to high
//! bits: command number, type (the "magic" byte), payload size and data
//! transfer direction. The widths and the direction encoding differ between
//! architectures; they come from `nix::sys::ioctl`, the same definitions its
//! `request_code_*!` macros pack with.
use crate::error::Error;
use libc::c_ulong;
use nix::sys::ioctl::{
    DIRMASK, DIRSHIFT, NONE, NRMASK, NRSHIFT, READ, SIZEMASK, SIZESHIFT, TYPEMASK, TYPESHIFT,
    WRITE,
};

const NUMBER_SHIFT: c_ulong = NRSHIFT as c_ulong;
const KIND_SHIFT: c_ulong = TYPESHIFT as c_ulong;
const SIZE_SHIFT: c_ulong = SIZESHIFT as c_ulong;
const DIRECTION_SHIFT: c_ulong = DIRSHIFT as c_ulong;

const NUMBER_MASK: c_ulong = NRMASK as c_ulong;
const KIND_MASK: c_ulong = TYPEMASK as c_ulong;
const SIZE_MASK: c_ulong = SIZEMASK as c_ulong;
const DIRECTION_MASK: c_ulong = DIRMASK as c_ulong;

/// Data transfer direction, seen from user space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    None,
    /// User space writes, the driver reads.
    Write,
    /// The driver writes, user space reads.
    Read,
    ReadWrite,
}

impl Direction {
    /// Bit pattern of the direction field on the current target.
    pub const fn bits(self) -> c_ulong {
        match self {
            Direction::None => NONE as c_ulong,
            Direction::Write => WRITE as c_ulong,
            Direction::Read => READ as c_ulong,
            Direction::ReadWrite => (READ | WRITE) as c_ulong,
        }
    }

    fn from_bits(bits: c_ulong) -> Option<Self> {
        [
            Direction::None,
            Direction::Write,
            Direction::Read,
            Direction::ReadWrite,
        ]
        .into_iter()
        .find(|direction| direction.bits() == bits)
    }
}

/// The fields of a request number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IoctlFields {
    pub direction: Direction,
    pub kind: u8,
    pub number: u8,
    pub size: usize,
}

impl IoctlFields {
    pub fn encode(&self) -> Result<c_ulong, Error> {
        if self.size as u64 > SIZE_MASK as u64 {
            return Err(Error::SizeTooLarge(self.size));
        }
        Ok((self.direction.bits() << DIRECTION_SHIFT)
            | ((self.kind as c_ulong) << KIND_SHIFT)
            | ((self.number as c_ulong) << NUMBER_SHIFT)
            | ((self.size as c_ulong) << SIZE_SHIFT))
    }

    pub fn decode(code: c_ulong) -> Result<Self, Error> {
        let bits = (code >> DIRECTION_SHIFT) & DIRECTION_MASK;
        let direction = Direction::from_bits(bits).ok_or(Error::UnknownDirection(bits))?;
        Ok(Self {
            direction,
            kind: ((code >> KIND_SHIFT) & KIND_MASK) as u8,
            number: ((code >> NUMBER_SHIFT) & NUMBER_MASK) as u8,
            size: ((code >> SIZE_SHIFT) & SIZE_MASK) as usize,
        })
    }
}
