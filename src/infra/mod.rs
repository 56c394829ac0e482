//! Infrastructure layer
//!
//! Handles all I/O operations: network, archive unpacking, and filesystem.
//! This module is the only place where side effects occur.

pub mod archive;
pub mod download;
pub mod filesystem;
