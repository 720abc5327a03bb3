use crate::error::Error;
use crate::uapi::*;
use libc::c_ulong;
use log::debug;
use std::fmt::{self, Write};
use std::io;
use std::mem::size_of;

const STRUCTURE_COLUMN: usize = 28;
const CONTROL_CODE_COLUMN: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureDescriptor {
    pub name: &'static str,
    pub size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlCodeDescriptor {
    pub name: &'static str,
    pub value: c_ulong,
}

// The passthru labels reproduce the C diagnostic's "passthur" text.
pub const STRUCTURES: [StructureDescriptor; 5] = [
    StructureDescriptor {
        name: "unsigned long int",
        size: size_of::<c_ulong>(),
    },
    StructureDescriptor {
        name: "nvme_user_io",
        size: size_of::<NvmeUserIo>(),
    },
    StructureDescriptor {
        name: "nvme_passthur_cmd",
        size: size_of::<NvmePassthruCmd>(),
    },
    StructureDescriptor {
        name: "nvme_passthur_cmd64",
        size: size_of::<NvmePassthruCmd64>(),
    },
    StructureDescriptor {
        name: "nvme_admin_cmd",
        size: size_of::<NvmeAdminCmd>(),
    },
];

pub const CONTROL_CODES: [ControlCodeDescriptor; 9] = [
    ControlCodeDescriptor {
        name: "NVME_IOCTL_ID",
        value: NVME_IOCTL_ID,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_ADMIN_CMD",
        value: NVME_IOCTL_ADMIN_CMD,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_SUBMIT_IO",
        value: NVME_IOCTL_SUBMIT_IO,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_IO_CMD",
        value: NVME_IOCTL_IO_CMD,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_RESET",
        value: NVME_IOCTL_RESET,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_SUBSYS_RESET",
        value: NVME_IOCTL_SUBSYS_RESET,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_RESCAN",
        value: NVME_IOCTL_RESCAN,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_ADMIN64_CMD",
        value: NVME_IOCTL_ADMIN64_CMD,
    },
    ControlCodeDescriptor {
        name: "NVME_IOCTL_IO64_CMD",
        value: NVME_IOCTL_IO64_CMD,
    },
];

/// Structure sizes followed by control codes, one line each.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    structures: &'a [StructureDescriptor],
    control_codes: &'a [ControlCodeDescriptor],
}

impl<'a> Report<'a> {
    pub fn new(
        structures: &'a [StructureDescriptor],
        control_codes: &'a [ControlCodeDescriptor],
    ) -> Self {
        Self {
            structures,
            control_codes,
        }
    }

    pub fn structures(&self) -> &'a [StructureDescriptor] {
        self.structures
    }

    pub fn control_codes(&self) -> &'a [ControlCodeDescriptor] {
        self.control_codes
    }
}

impl Default for Report<'static> {
    fn default() -> Self {
        Report::new(&STRUCTURES, &CONTROL_CODES)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for structure in self.structures {
            let label = format!("sizeof({}):", structure.name);
            writeln!(f, "{label:<STRUCTURE_COLUMN$} {}", structure.size)?;
        }
        for code in self.control_codes {
            let label = format!("{}:", code.name);
            writeln!(f, "{label:<CONTROL_CODE_COLUMN$} {:#x}", code.value)?;
        }
        Ok(())
    }
}

fn default_report() -> Report<'static> {
    let report = Report::default();
    debug!(
        "Reporting {} structure sizes and {} control codes",
        report.structures().len(),
        report.control_codes().len()
    );
    report
}

/// Renders the default report into `out`.
pub fn render<W: Write>(out: &mut W) -> Result<(), Error> {
    write!(out, "{}", default_report())?;
    Ok(())
}

/// Prints the default report to `out` and flushes it.
pub fn run<W: io::Write>(out: &mut W) -> Result<(), Error> {
    write!(out, "{}", default_report())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_lines_in_declaration_order() {
        let text = Report::default().to_string();
        let labels: Vec<&str> = text
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(
            labels,
            [
                "sizeof(unsigned",
                "sizeof(nvme_user_io):",
                "sizeof(nvme_passthur_cmd):",
                "sizeof(nvme_passthur_cmd64):",
                "sizeof(nvme_admin_cmd):",
                "NVME_IOCTL_ID:",
                "NVME_IOCTL_ADMIN_CMD:",
                "NVME_IOCTL_SUBMIT_IO:",
                "NVME_IOCTL_IO_CMD:",
                "NVME_IOCTL_RESET:",
                "NVME_IOCTL_SUBSYS_RESET:",
                "NVME_IOCTL_RESCAN:",
                "NVME_IOCTL_ADMIN64_CMD:",
                "NVME_IOCTL_IO64_CMD:",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn id_line_is_hex_without_padding() {
        let text = Report::default().to_string();
        assert_eq!(text.lines().nth(5), Some("NVME_IOCTL_ID:           0x4e40"));
    }

    #[test]
    fn columns_line_up_with_the_longest_label() {
        let report = Report::new(
            &[StructureDescriptor {
                name: "nvme_passthur_cmd64",
                size: 80,
            }],
            &[ControlCodeDescriptor {
                name: "NVME_IOCTL_SUBSYS_RESET",
                value: 0x4e45,
            }],
        );
        assert_eq!(
            report.to_string(),
            "sizeof(nvme_passthur_cmd64): 80\nNVME_IOCTL_SUBSYS_RESET: 0x4e45\n"
        );
    }

    #[test]
    fn short_labels_are_padded() {
        let report = Report::new(
            &[StructureDescriptor {
                name: "nvme_admin_cmd",
                size: 72,
            }],
            &[ControlCodeDescriptor {
                name: "NVME_IOCTL_ADMIN_CMD",
                value: 0xc048_4e41,
            }],
        );
        assert_eq!(
            report.to_string(),
            "sizeof(nvme_admin_cmd):      72\nNVME_IOCTL_ADMIN_CMD:    0xc0484e41\n"
        );
    }

    #[test]
    fn sizes_come_from_the_bindings() {
        let sizes: Vec<usize> = STRUCTURES.iter().map(|s| s.size).collect();
        assert_eq!(
            sizes,
            [
                size_of::<c_ulong>(),
                size_of::<NvmeUserIo>(),
                size_of::<NvmePassthruCmd>(),
                size_of::<NvmePassthruCmd64>(),
                size_of::<NvmeAdminCmd>(),
            ]
        );
    }

    #[test]
    fn render_matches_display() {
        let mut rendered = String::new();
        render(&mut rendered).unwrap();
        assert_eq!(rendered, Report::default().to_string());
    }

    #[test]
    fn run_writes_the_same_bytes_twice() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first).unwrap();
        run(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Report::default().to_string().into_bytes());
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_reports_a_closed_output_as_io_error() {
        let result = run(&mut ClosedPipe);
        assert!(matches!(
            result,
            Err(Error::Io(error)) if error.kind() == io::ErrorKind::BrokenPipe
        ));
    }
}
