use nvme_ioctl::{report, Error};
use std::io;

// Arguments are ignored.
pub fn main() -> Result<(), Error> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&mut out)
}
