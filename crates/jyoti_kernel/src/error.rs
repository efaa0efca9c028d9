use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading or evaluating an SPK kernel.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KernelError {
    /// File could not be read.
    Io(String),
    /// File record is not a DAF/SPK header this reader understands.
    InvalidHeader(&'static str),
    /// Structural inconsistency inside the file.
    Corrupt(&'static str),
    /// Segment data type other than 2.
    UnsupportedType { target: i32, data_type: i32 },
    /// No segment links the requested pair.
    SegmentNotFound { target: i32, center: i32 },
    /// Segments exist for the pair but none covers the epoch.
    EpochOutOfRange {
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    },
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "kernel I/O error: {msg}"),
            Self::InvalidHeader(msg) => write!(f, "invalid DAF header: {msg}"),
            Self::Corrupt(msg) => write!(f, "corrupt kernel: {msg}"),
            Self::UnsupportedType { target, data_type } => {
                write!(f, "segment for body {target} has unsupported type {data_type}")
            }
            Self::SegmentNotFound { target, center } => {
                write!(f, "no segment for target {target} relative to {center}")
            }
            Self::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            } => write!(
                f,
                "epoch {epoch_tdb_s} s outside coverage of {target} wrt {center}"
            ),
        }
    }
}

impl Error for KernelError {}

impl From<std::io::Error> for KernelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
