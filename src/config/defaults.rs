//! Default configuration values

/// SDL3 release version fetched by default
pub const SDL_VERSION: &str = "3.2.26";

/// Request timeout for archive downloads (in seconds)
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Connect timeout for archive downloads (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
