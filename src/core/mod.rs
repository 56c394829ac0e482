//! Core workflow logic module
//!
//! This module contains the installer workflow and its supporting types.
//! All I/O goes through the capability traits defined in [`install`], with
//! real implementations living in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`toolchain`] - Toolchain variant selection type
//! - [`prompt`] - Interactive toolchain menu
//! - [`locale`] - Localized message catalogs
//! - [`install`] - The five-step install workflow

pub mod install;
pub mod locale;
pub mod prompt;
pub mod toolchain;
