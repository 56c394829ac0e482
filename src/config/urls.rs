//! Release host URLs

/// SDL release download base URL
pub const SDL_RELEASE_BASE: &str = "https://www.libsdl.org/release";
