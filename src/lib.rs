//! sdl3fetch - SDL3 development library fetcher
//!
//! This library provides the logic for downloading a prebuilt SDL3 release
//! archive for a chosen compiler toolchain (MinGW or MSVC), unpacking it,
//! and placing it under its canonical directory name.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Workflow logic (no direct I/O operations)
//! - [`infra`] - Infrastructure layer (network, archives, filesystem)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
