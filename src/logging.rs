//! Logger setup.
//!
//! The game owns the whole terminal, so log records never go to standard error. They are appended
//! to a file when one is configured and dropped otherwise.

use std::{fs::OpenOptions, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Installs the global logger, writing to `path` when given.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a logger has already been installed.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
