//! Syscall argument offsets for seccomp filter generation.
//!
//! This library answers where a syscall argument's bytes live for a given architecture.
//! It is organized into several modules:
//! - `arch`: Architecture descriptors and per-architecture layout backends.
//! - `offset`: Resolution of argument offsets, dispatched on the architecture token.
//! - `error`: The domain error returned when no offset is defined.
//! - `detect`: Architecture detection from object files.
//! - `config`: CLI configuration.

pub mod arch;
pub mod config;
pub mod detect;
pub mod error;
pub mod offset;

pub use arch::{ArchDef, ArchToken, ByteOrder, WordSize};
pub use error::DomainError;
pub use offset::{arg_offset, arg_offset_hi, arg_offset_lo};
