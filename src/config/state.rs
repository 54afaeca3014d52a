// src/config/state.rs
use super::consts::DEFAULT_OUT_DIR;

/// Text fields and the status line owned by the GUI. Everything the composer
/// needs besides the URL lives in `lifecycle::ClientState`.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL field; kept across failures so the user can retry without retyping.
    pub url_text: String,

    /// Output directory field (mapped to `ExportOptions` on export)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub status: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            out_dir_text: s!(DEFAULT_OUT_DIR),
            out_dir_dirty: false,
            status: s!("Idle"),
        }
    }
}
