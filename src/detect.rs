//! Architecture detection from object files.
//!
//! Maps an ELF file's machine, class and data encoding onto an [`ArchDef`] so offsets can be
//! resolved for binaries other than the one we were built as.

use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use object::{Architecture as ObjArch, Object};
use std::fs::File;
use std::path::Path;

use crate::arch::{ArchDef, ArchToken, ByteOrder, WordSize};

/// Detect the architecture of the object file at `path`.
pub fn arch_of_file(path: &Path) -> Result<ArchDef> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file)? };
    arch_of_data(&mmap)
        .with_context(|| format!("failed to detect architecture of {}", path.display()))
}

/// Detect the architecture of an in-memory object file.
pub fn arch_of_data(data: &[u8]) -> Result<ArchDef> {
    let obj = object::File::parse(data).context("failed to parse object file")?;
    let token = match obj.architecture() {
        ObjArch::I386 => ArchToken::I386,
        // x32 shares the x86_64 audit arch.
        ObjArch::X86_64 | ObjArch::X86_64_X32 => ArchToken::X86_64,
        ObjArch::Aarch64 => ArchToken::Aarch64,
        ObjArch::Arm => ArchToken::Arm,
        other => bail!("unsupported architecture: {:?}", other),
    };
    let word_size = if obj.is_64() { WordSize::Bits64 } else { WordSize::Bits32 };
    let byte_order = ByteOrder::from(obj.endianness());

    let arch = ArchDef::new(token, word_size, byte_order);
    tracing::debug!("Detected {}", arch);
    Ok(arch)
}
