//! JSON report writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Configuration for writing JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indent the output.
    pretty: bool,
    /// Create missing parent directories.
    create_dirs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            create_dirs: true,
        }
    }
}

impl WriterConfig {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}

/// Write `value` as JSON to `path`, replacing any existing file.
///
/// Non-finite numbers are written as `null`.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created and
/// [`IoError::Json`] if serialization fails.
pub fn write_json<T>(path: &Path, value: &T, config: &WriterConfig) -> Result<(), IoError>
where
    T: Serialize + ?Sized,
{
    if config.create_dirs
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    if config.pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    info!(path = %path.display(), "json written");
    Ok(())
}
