// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Absolute URL of the backend's `/scrape` route.
    pub endpoint: String,
    pub export: ExportOptions,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(DEFAULT_ENDPOINT),
            export: ExportOptions::default(),
        }
    }
}

impl ClientOptions {
    /// Defaults, with the endpoint overridden by `SCRAPE_VIEWER_ENDPOINT` when set.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(v) = env::var(ENDPOINT_ENV) {
            options.set_endpoint(&v);
        }
        options
    }

    /// Blank input keeps the current endpoint.
    pub fn set_endpoint(&mut self, text: &str) {
        let t = text.trim();
        if !t.is_empty() {
            self.endpoint = s!(t);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final file path: `<dir>/scrape_result.json`. The file name is fixed.
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(EXPORT_FILE_NAME)
    }

    /// Parse GUI text into the output directory. Blank text means the working directory.
    pub fn set_dir(&mut self, text: &str) {
        let t = text.trim();
        self.dir = if t.is_empty() { PathBuf::from(".") } else { PathBuf::from(t) };
    }
}
