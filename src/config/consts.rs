// src/config/consts.rs

// Backend
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/scrape";
pub const ENDPOINT_ENV: &str = "SCRAPE_VIEWER_ENDPOINT";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_NAME: &str = "scrape_result.json";

// Display
pub const PREVIEW_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";
pub const NO_TITLE: &str = "No Title Found";
pub const EMPTY_TEXT: &str = "Empty text content";

// User-facing failure messages
pub const CONNECT_FAILED: &str = "Failed to connect to the backend.";
pub const MALFORMED_RESPONSE: &str = "The backend returned an unexpected response.";

// Local log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
