//! Argument offset resolution.
//!
//! Given a descriptor and an argument index, these functions return the byte offset of the
//! argument within the architecture's raw syscall context. Dispatch is a closed `match` over
//! [`ArchToken`]; a token without a backend is a [`DomainError`], never a default offset.

use crate::arch::i386::I386;
use crate::arch::x86_64::X86_64;
use crate::arch::{ArchDef, ArchToken, Architecture};
use crate::error::DomainError;

/// Offset of the low 32 bits of argument `arg`.
pub fn arg_offset_lo(arch: &ArchDef, arg: u32) -> Result<u32, DomainError> {
    match arch.token {
        ArchToken::I386 => I386.arg_offset_lo(arg),
        ArchToken::X86_64 => X86_64.arg_offset_lo(arg),
        token => Err(DomainError::UnsupportedArch(token)),
    }
}

/// Offset of the high 32 bits of argument `arg`.
///
/// Only meaningful where a wide argument is split across two slots. No backend defines
/// the split yet, so this fails for every architecture.
pub fn arg_offset_hi(arch: &ArchDef, arg: u32) -> Result<u32, DomainError> {
    match arch.token {
        ArchToken::I386 => I386.arg_offset_hi(arg),
        ArchToken::X86_64 => X86_64.arg_offset_hi(arg),
        token => Err(DomainError::UnsupportedArch(token)),
    }
}

/// Offset of argument `arg` when it fits a single slot.
pub fn arg_offset(arch: &ArchDef, arg: u32) -> Result<u32, DomainError> {
    match arch.token {
        ArchToken::I386 => I386.arg_offset(arg),
        ArchToken::X86_64 => X86_64.arg_offset(arg),
        token => Err(DomainError::UnsupportedArch(token)),
    }
}
