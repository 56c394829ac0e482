//! Toolchain variant selection
//!
//! SDL ships separate prebuilt development packages for MinGW and MSVC
//! builds. The variant chosen once at startup determines the archive name,
//! the download URL, and the canonical destination directory.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unrecognized toolchain argument
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized toolchain '{input}'. Use 'mingw' or 'msvc'")]
pub struct ParseToolchainError {
    pub input: String,
}

/// Compiler toolchain the prebuilt SDL3 package is fetched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    /// MinGW (GNU) builds
    MinGw,
    /// Microsoft Visual C++ builds
    Msvc,
}

impl Toolchain {
    /// Tag embedded in the release archive name
    ///
    /// Upstream names the archives `SDL3-devel-<version>-mingw.zip` and
    /// `SDL3-devel-<version>-VC.zip`.
    pub fn archive_tag(self) -> &'static str {
        match self {
            Toolchain::MinGw => "mingw",
            Toolchain::Msvc => "VC",
        }
    }

    /// Canonical directory name the build system expects
    pub fn dest_dir_name(self) -> &'static str {
        match self {
            Toolchain::MinGw => "SDL3_MinGW",
            Toolchain::Msvc => "SDL3_MSVC",
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolchain::MinGw => write!(f, "MINGW"),
            Toolchain::Msvc => write!(f, "MSVC"),
        }
    }
}

impl FromStr for Toolchain {
    type Err = ParseToolchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mingw" => Ok(Toolchain::MinGw),
            "msvc" | "vc" => Ok(Toolchain::Msvc),
            _ => Err(ParseToolchainError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mingw() {
        assert_eq!("mingw".parse::<Toolchain>().unwrap(), Toolchain::MinGw);
    }

    #[test]
    fn test_parse_msvc_aliases() {
        assert_eq!("msvc".parse::<Toolchain>().unwrap(), Toolchain::Msvc);
        assert_eq!("vc".parse::<Toolchain>().unwrap(), Toolchain::Msvc);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("MinGW".parse::<Toolchain>().unwrap(), Toolchain::MinGw);
        assert_eq!("MSVC".parse::<Toolchain>().unwrap(), Toolchain::Msvc);
        assert_eq!("VC".parse::<Toolchain>().unwrap(), Toolchain::Msvc);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" mingw \n".parse::<Toolchain>().unwrap(), Toolchain::MinGw);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "foo".parse::<Toolchain>().unwrap_err();
        assert_eq!(err.input, "foo");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<Toolchain>().is_err());
    }

    #[test]
    fn test_archive_tags() {
        assert_eq!(Toolchain::MinGw.archive_tag(), "mingw");
        assert_eq!(Toolchain::Msvc.archive_tag(), "VC");
    }

    #[test]
    fn test_dest_dir_names() {
        assert_eq!(Toolchain::MinGw.dest_dir_name(), "SDL3_MinGW");
        assert_eq!(Toolchain::Msvc.dest_dir_name(), "SDL3_MSVC");
    }

    #[test]
    fn test_display() {
        assert_eq!(Toolchain::MinGw.to_string(), "MINGW");
        assert_eq!(Toolchain::Msvc.to_string(), "MSVC");
    }
}
