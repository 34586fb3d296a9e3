//! Architecture abstraction.
//!
//! This module defines the architecture descriptor (`ArchDef`) and the `Architecture` trait,
//! which encapsulates the syscall-argument layout of one target. The resolver in
//! [`crate::offset`] stays generic while each backend knows where its arguments live.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use object::elf::{EM_386, EM_AARCH64, EM_ARM, EM_X86_64};
use object::Endianness;

use crate::error::{DomainError, UnknownArch};

pub mod i386;
pub mod x86_64;

const AUDIT_ARCH_64BIT: u32 = 0x8000_0000;
const AUDIT_ARCH_LE: u32 = 0x4000_0000;

/// Number of argument slots in the Linux syscall ABI.
pub const SYSCALL_ARG_COUNT: u32 = 6;

/// Identifies one instruction set; the discriminant is its audit architecture value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ArchToken {
    I386 = EM_386 as u32 | AUDIT_ARCH_LE,
    X86_64 = EM_X86_64 as u32 | AUDIT_ARCH_64BIT | AUDIT_ARCH_LE,
    Aarch64 = EM_AARCH64 as u32 | AUDIT_ARCH_64BIT | AUDIT_ARCH_LE,
    Arm = EM_ARM as u32 | AUDIT_ARCH_LE,
}

impl ArchToken {
    pub const ALL: [ArchToken; 4] = [
        ArchToken::I386,
        ArchToken::X86_64,
        ArchToken::Aarch64,
        ArchToken::Arm,
    ];

    /// The `AUDIT_ARCH_*` value reported in `seccomp_data.arch`.
    pub fn audit_arch(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ArchToken::I386 => "x86",
            ArchToken::X86_64 => "x86_64",
            ArchToken::Aarch64 => "aarch64",
            ArchToken::Arm => "arm",
        }
    }
}

impl fmt::Display for ArchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchToken {
    type Err = UnknownArch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "i386" | "i686" => Ok(ArchToken::I386),
            "x86_64" | "x86-64" | "amd64" => Ok(ArchToken::X86_64),
            "aarch64" | "arm64" => Ok(ArchToken::Aarch64),
            "arm" => Ok(ArchToken::Arm),
            _ => Err(UnknownArch::Name(s.to_string())),
        }
    }
}

impl TryFrom<u32> for ArchToken {
    type Error = UnknownArch;

    fn try_from(audit_arch: u32) -> Result<Self, Self::Error> {
        ArchToken::ALL
            .into_iter()
            .find(|token| token.audit_arch() == audit_arch)
            .ok_or(UnknownArch::AuditArch(audit_arch))
    }
}

/// Native integer width of an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    Bits32,
    Bits64,
    Unspecified,
}

impl WordSize {
    pub fn bits(self) -> Option<u32> {
        match self {
            WordSize::Bits32 => Some(32),
            WordSize::Bits64 => Some(64),
            WordSize::Unspecified => None,
        }
    }
}

/// Byte order of multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
    Unspecified,
}

impl ByteOrder {
    /// The object crate's endianness, if the order is known.
    pub fn endianness(self) -> Option<Endianness> {
        match self {
            ByteOrder::Little => Some(Endianness::Little),
            ByteOrder::Big => Some(Endianness::Big),
            ByteOrder::Unspecified => None,
        }
    }
}

impl From<Endianness> for ByteOrder {
    fn from(endian: Endianness) -> Self {
        match endian {
            Endianness::Little => ByteOrder::Little,
            Endianness::Big => ByteOrder::Big,
        }
    }
}

/// The addressing-relevant facts about one architecture.
///
/// Descriptors are plain immutable data. Two descriptors compare equal when they carry the
/// same token, since the token is what the resolver dispatches on (the x32 ABI shares the
/// x86_64 token despite its 32-bit words).
#[derive(Debug, Clone, Copy)]
pub struct ArchDef {
    pub token: ArchToken,
    pub word_size: WordSize,
    pub byte_order: ByteOrder,
}

impl ArchDef {
    pub const I386: ArchDef =
        ArchDef::new(ArchToken::I386, WordSize::Bits32, ByteOrder::Little);
    pub const X86_64: ArchDef =
        ArchDef::new(ArchToken::X86_64, WordSize::Bits64, ByteOrder::Little);
    pub const AARCH64: ArchDef =
        ArchDef::new(ArchToken::Aarch64, WordSize::Bits64, ByteOrder::Little);
    pub const ARM: ArchDef = ArchDef::new(ArchToken::Arm, WordSize::Bits32, ByteOrder::Little);

    pub const fn new(token: ArchToken, word_size: WordSize, byte_order: ByteOrder) -> Self {
        Self {
            token,
            word_size,
            byte_order,
        }
    }

    /// The built-in descriptor for `token`.
    pub fn from_token(token: ArchToken) -> Self {
        match token {
            ArchToken::I386 => Self::I386,
            ArchToken::X86_64 => Self::X86_64,
            ArchToken::Aarch64 => Self::AARCH64,
            ArchToken::Arm => Self::ARM,
        }
    }

    /// The descriptor of the architecture this crate was built for.
    pub fn native() -> &'static ArchDef {
        &NATIVE
    }
}

impl PartialEq for ArchDef {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for ArchDef {}

impl Hash for ArchDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for ArchDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)?;
        if let Some(bits) = self.word_size.bits() {
            write!(f, " ({bits}-bit")?;
        } else {
            write!(f, " (unspecified width")?;
        }
        match self.byte_order {
            ByteOrder::Little => write!(f, ", little-endian)"),
            ByteOrder::Big => write!(f, ", big-endian)"),
            ByteOrder::Unspecified => write!(f, ", unspecified byte order)"),
        }
    }
}

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
compile_error!("scarg needs to know about this machine type");

#[cfg(target_arch = "x86")]
const NATIVE_TOKEN: ArchToken = ArchToken::I386;
#[cfg(target_arch = "x86_64")]
const NATIVE_TOKEN: ArchToken = ArchToken::X86_64;
#[cfg(target_arch = "aarch64")]
const NATIVE_TOKEN: ArchToken = ArchToken::Aarch64;
#[cfg(target_arch = "arm")]
const NATIVE_TOKEN: ArchToken = ArchToken::Arm;

#[cfg(target_pointer_width = "32")]
const NATIVE_WORD_SIZE: WordSize = WordSize::Bits32;
#[cfg(target_pointer_width = "64")]
const NATIVE_WORD_SIZE: WordSize = WordSize::Bits64;
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
const NATIVE_WORD_SIZE: WordSize = WordSize::Unspecified;

#[cfg(target_endian = "little")]
const NATIVE_BYTE_ORDER: ByteOrder = ByteOrder::Little;
#[cfg(target_endian = "big")]
const NATIVE_BYTE_ORDER: ByteOrder = ByteOrder::Big;
#[cfg(not(any(target_endian = "little", target_endian = "big")))]
const NATIVE_BYTE_ORDER: ByteOrder = ByteOrder::Unspecified;

static NATIVE: ArchDef = ArchDef::new(NATIVE_TOKEN, NATIVE_WORD_SIZE, NATIVE_BYTE_ORDER);

/// A target whose syscall-argument layout is known.
pub trait Architecture {
    /// The descriptor this backend answers for.
    fn def(&self) -> &'static ArchDef;

    /// Number of valid argument indices; indices `0..arg_count()` resolve.
    fn arg_count(&self) -> u32;

    /// Offset of the whole argument slot.
    fn arg_offset(&self, arg: u32) -> Result<u32, DomainError>;

    /// Offset of the low 32 bits of the argument.
    fn arg_offset_lo(&self, arg: u32) -> Result<u32, DomainError>;

    /// Offset of the high 32 bits of the argument.
    ///
    /// No backend splits arguments yet, so the default refuses.
    fn arg_offset_hi(&self, _arg: u32) -> Result<u32, DomainError> {
        Err(DomainError::NoHighHalf(self.def().token))
    }

    /// Rejects indices outside the backend's argument range.
    fn check_arg(&self, arg: u32) -> Result<(), DomainError> {
        if arg < self.arg_count() {
            Ok(())
        } else {
            Err(DomainError::ArgOutOfRange {
                token: self.def().token,
                arg,
                max: self.arg_count() - 1,
            })
        }
    }
}
