//! Configuration module.
//!
//! This module defines the command-line interface (CLI) using `clap`.
//! It selects the architecture (by name, from an object file, or the native one),
//! the arguments to resolve, and which half of each argument to locate.

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::arch::{ArchDef, ArchToken, SYSCALL_ARG_COUNT};
use crate::error::DomainError;
use crate::offset;

/// Print where syscall arguments live in an architecture's seccomp context.
///
/// Offsets are byte displacements a filter program can load from. Without `--arch`
/// or `--elf` the architecture this tool was built for is used.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Architecture name (x86, x86_64, aarch64, arm)
    #[arg(short, long, conflicts_with = "elf")]
    pub arch: Option<ArchToken>,

    /// Take the architecture from this object file
    #[arg(short, long)]
    pub elf: Option<PathBuf>,

    /// Argument index to resolve; all six when omitted
    #[arg(short = 'n', long)]
    pub arg: Option<u32>,

    /// Which part of the argument to locate
    #[arg(long, value_enum, default_value_t = Half::Full)]
    pub half: Half,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,
}

impl Config {
    /// The argument indices to resolve.
    pub fn args(&self) -> Vec<u32> {
        match self.arg {
            Some(arg) => vec![arg],
            None => (0..SYSCALL_ARG_COUNT).collect(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// The whole argument slot
    Full,
    /// The low 32 bits
    Lo,
    /// The high 32 bits
    Hi,
}

impl Half {
    pub fn resolve(self, arch: &ArchDef, arg: u32) -> Result<u32, DomainError> {
        match self {
            Half::Full => offset::arg_offset(arch, arg),
            Half::Lo => offset::arg_offset_lo(arch, arg),
            Half::Hi => offset::arg_offset_hi(arch, arg),
        }
    }
}

/// Writes one `arg N: ...` line per argument and returns how many lookups failed.
pub fn report<W: Write>(
    half: Half,
    arch: &ArchDef,
    args: &[u32],
    out: &mut W,
) -> io::Result<usize> {
    let mut failed = 0;
    for &arg in args {
        match half.resolve(arch, arg) {
            Ok(offset) => writeln!(out, "arg {}: offset {}", arg, offset)?,
            Err(err) => {
                writeln!(out, "arg {}: {}", arg, err)?;
                tracing::debug!("arg {} failed with errno {}", arg, i32::from(err));
                failed += 1;
            }
        }
    }
    Ok(failed)
}
