// src/export.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::ClientError;
use crate::model::ScrapeResult;

/// Pretty JSON, 2-space indent, no trailing newline.
pub fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ClientError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write the whole result to `<dir>/scrape_result.json`, overwriting any previous export.
/// Returns the final path written to.
pub fn write_result(result: &ScrapeResult, export: &ExportOptions) -> Result<PathBuf, ClientError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_pretty_json(result)?;
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ClientError> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
