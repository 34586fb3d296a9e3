//! Entry point for the scarg tool.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Pick the architecture: by name, from an object file, or the native one.
//! 3. Resolve the requested argument offsets and print one line per argument.
//!
//! Error handling is done via `anyhow`.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scarg::arch::ArchDef;
use scarg::config::{self, Config};
use scarg::detect;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let arch = match (&config.elf, config.arch) {
        (Some(path), _) => detect::arch_of_file(path)?,
        (None, Some(token)) => ArchDef::from_token(token),
        (None, None) => *ArchDef::native(),
    };
    tracing::info!("Resolving {:?} offsets for {}", config.half, arch);

    let mut stdout = std::io::stdout().lock();
    let failed = config::report(config.half, &arch, &config.args(), &mut stdout)?;
    if failed > 0 {
        bail!("{} argument offset(s) could not be resolved for {}", failed, arch.token);
    }
    Ok(())
}
