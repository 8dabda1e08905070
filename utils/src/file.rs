use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    debug!("Read {}", path.display());
    Ok(value)
}

pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Creates `dir` if it does not exist yet. Parent directories are not
/// created, a missing parent is an error.
pub fn create_dir_if_missing(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        info!("Created output directory {}", dir.display());
    }
    Ok(())
}
