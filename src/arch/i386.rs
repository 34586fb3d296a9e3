//! i386 Architecture backend.
//!
//! Offsets here index the legacy raw 32-bit argument frame: the syscall number followed by
//! one 32-bit word per argument. They are not `seccomp_data` offsets, even though the
//! kernel fills `seccomp_data` for i386 tasks too (see the x86_64 backend for that layout).

use std::mem::{offset_of, size_of};

use super::{ArchDef, Architecture, SYSCALL_ARG_COUNT};
use crate::error::DomainError;

#[allow(dead_code)]
#[repr(C)]
struct SyscallFrame {
    nr: u32,
    args: [u32; SYSCALL_ARG_COUNT as usize],
}

/// The i386 architecture backend.
pub struct I386;

impl Architecture for I386 {
    fn def(&self) -> &'static ArchDef {
        &ArchDef::I386
    }

    fn arg_count(&self) -> u32 {
        SYSCALL_ARG_COUNT
    }

    fn arg_offset(&self, arg: u32) -> Result<u32, DomainError> {
        self.check_arg(arg)?;
        let offset = offset_of!(SyscallFrame, args) + arg as usize * size_of::<u32>();
        Ok(offset as u32)
    }

    fn arg_offset_lo(&self, arg: u32) -> Result<u32, DomainError> {
        // A slot is one word, so the low half is the slot itself.
        self.arg_offset(arg)
    }
}
