use libc::c_ulong;
use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    SizeTooLarge(usize),
    UnknownDirection(c_ulong),
    Format(fmt::Error),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeTooLarge(size) => write!(
                f,
                "The payload size ({size:#x}) does not fit into the size field of an ioctl number."
            ),
            Error::UnknownDirection(bits) => write!(
                f,
                "The direction bits ({bits:#x}) of the ioctl number are not valid on this target."
            ),
            Error::Format(error) => write!(f, "Formatting error: {error}."),
            Error::Io(error) => write!(f, "I/O error: {error}."),
        }
    }
}

impl std::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(error: fmt::Error) -> Self {
        Error::Format(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}
