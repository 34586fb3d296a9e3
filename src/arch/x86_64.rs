//! x86_64 Architecture backend.
//!
//! Arguments are read from the kernel's `seccomp_data`, where every argument occupies a
//! full 64-bit slot regardless of the syscall's declared parameter width.

use std::mem::{offset_of, size_of};

use super::{ArchDef, Architecture, SYSCALL_ARG_COUNT};
use crate::error::DomainError;

/// The context handed to seccomp filters (`struct seccomp_data`).
#[allow(dead_code)]
#[repr(C)]
struct SeccompData {
    nr: i32,
    arch: u32,
    instruction_pointer: u64,
    args: [u64; SYSCALL_ARG_COUNT as usize],
}

/// The x86_64 architecture backend.
pub struct X86_64;

impl X86_64 {
    fn slot(&self, arg: u32) -> Result<u32, DomainError> {
        self.check_arg(arg)?;
        let offset = offset_of!(SeccompData, args) + arg as usize * size_of::<u64>();
        Ok(offset as u32)
    }
}

impl Architecture for X86_64 {
    fn def(&self) -> &'static ArchDef {
        &ArchDef::X86_64
    }

    fn arg_count(&self) -> u32 {
        SYSCALL_ARG_COUNT
    }

    fn arg_offset(&self, arg: u32) -> Result<u32, DomainError> {
        self.slot(arg)
    }

    fn arg_offset_lo(&self, arg: u32) -> Result<u32, DomainError> {
        // Little-endian: the low word leads the slot.
        self.slot(arg)
    }
}
