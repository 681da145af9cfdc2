// src/constants.rs
//
// Application-wide constants.

/// Internal service address used when there is no interactive environment or in development.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_INTERNAL_URL: &str = "http://publisher-api:8080";

/// Relative path the public deployment routes to the notes API.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_PUBLIC_PATH: &str = "/api";

pub const CONFIG_DIR_NAME: &str = "noteview";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// CSS class of the container every rendered table is wrapped in.
///
/// Used in: `infrastructure/markdown.rs`, `ports/html.rs`
pub const TABLE_WRAPPER_CLASS: &str = "table-wrapper";

/// Delay in milliseconds after spawning the browser before returning.
///
/// The temp directory holding the page is removed when the process exits, so the browser
/// needs a moment to read the file first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
