//! Error types.

use thiserror::Error;

use crate::arch::ArchToken;

/// `EDOM` from `errno.h`.
const EDOM: i32 = 33;

/// The requested (architecture, argument) combination has no defined offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("no argument offsets are defined for {0}")]
    UnsupportedArch(ArchToken),
    #[error("argument {arg} is out of range for {token} (valid: 0..={max})")]
    ArgOutOfRange { token: ArchToken, arg: u32, max: u32 },
    #[error("high-half argument offsets are not defined for {0}")]
    NoHighHalf(ArchToken),
}

impl DomainError {
    /// The negative errno for callers that expect `-EDOM` on failure.
    pub fn errno(&self) -> i32 {
        -EDOM
    }
}

impl From<DomainError> for i32 {
    fn from(err: DomainError) -> Self {
        err.errno()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownArch {
    #[error("unknown architecture name: {0}")]
    Name(String),
    #[error("unknown audit architecture: 0x{0:08x}")]
    AuditArch(u32),
}
