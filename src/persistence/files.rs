use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the data directory (local or under the home directory)
pub const DATA_DIR_NAME: &str = ".tally";

/// Get the data directory - checks for a local .tally first, then falls back to global ~/.tally
pub fn get_data_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Find a local .tally directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let data_dir = current.join(DATA_DIR_NAME);
        if data_dir.exists() && data_dir.is_dir() {
            return Some(data_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the data directory exists
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tally directory in the current directory
pub fn init_local_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let data_dir = current_dir.join(DATA_DIR_NAME);

    if data_dir.exists() {
        anyhow::bail!("Data directory already exists: {}", data_dir.display());
    }

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create directory: {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Path of the file backing a store entry
pub fn entry_file(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let dir = path.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "file path has no parent directory")
    })?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
