//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! The install logic itself lives in [`crate::core`].

pub mod output;

use std::cell::RefCell;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use crate::config::{defaults, urls};
use crate::core::install::{install, InstallConfig, InstallOutcome, StepEvent};
use crate::core::locale::{self, fill, Locale};
use crate::core::prompt;
use crate::core::toolchain::Toolchain;
use crate::infra::download::{HttpFetcher, ProgressCallback};
use crate::infra::filesystem::DiskWorkspace;
use output::status;

/// Version string including the build timestamp emitted by the build script
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    ")"
);

/// sdl3fetch - SDL3 development library fetcher
///
/// Ensures the prebuilt SDL3 package for the chosen toolchain exists in the
/// working directory, downloading and extracting it if absent.
#[derive(Parser, Debug)]
#[command(name = "sdl3fetch")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Toolchain to fetch SDL3 for: mingw or msvc (alias: vc)
    ///
    /// When omitted, an interactive menu is shown.
    pub toolchain: Option<String>,

    /// Prompt/status language (en or ru)
    #[arg(long, default_value = "en", value_parser = locale::parse_locale)]
    pub lang: Locale,

    /// SDL3 release version to fetch
    #[arg(long = "sdl-version", default_value = defaults::SDL_VERSION)]
    pub sdl_version: String,

    /// Release host base URL
    #[arg(long, default_value = urls::SDL_RELEASE_BASE)]
    pub base_url: String,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output a JSON summary for scripting
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Execute the fetch
    pub async fn run(self) -> Result<()> {
        let messages = self.lang.messages();

        // Resolve the toolchain before touching the network or the disk,
        // so a bad argument exits without side effects.
        let toolchain = match &self.toolchain {
            Some(raw) => raw
                .parse::<Toolchain>()
                .map_err(|_| anyhow::anyhow!("{}", messages.invalid_argument))?,
            None => {
                let stdin = io::stdin();
                prompt::select_toolchain(stdin.lock(), io::stdout(), messages)
                    .context("Failed to read toolchain choice")?
            }
        };

        let config = InstallConfig {
            root: std::env::current_dir().context("Failed to resolve working directory")?,
            version: self.sdl_version.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
        };

        let chatty = !self.quiet && !self.json;
        if chatty {
            println!("{}", fill(messages.selected, &toolchain.to_string()));
            println!(
                "{}",
                fill(
                    messages.install_target,
                    &config.dest_dir(toolchain).display().to_string()
                )
            );
            println!();
        }

        let download_bar = chatty.then(|| output::create_download_bar(0));
        let progress: Option<ProgressCallback> = download_bar.as_ref().map(|pb| {
            let pb = pb.clone();
            Box::new(move |done: u64, total: u64| {
                if total > 0 && pb.length() != Some(total) {
                    pb.set_length(total);
                }
                pb.set_position(done);
            }) as ProgressCallback
        });

        let spinner: RefCell<Option<ProgressBar>> = RefCell::new(None);
        let report = |event: StepEvent| {
            if !chatty {
                return;
            }
            if let Some(pb) = spinner.borrow_mut().take() {
                pb.finish_and_clear();
            }
            match event {
                StepEvent::Downloading { url } => {
                    println!("{}", fill(messages.downloading, &url));
                }
                StepEvent::ReusingArchive { path } => {
                    println!(
                        "{}",
                        fill(messages.archive_exists, &path.display().to_string())
                    );
                }
                StepEvent::Extracting { .. } => {
                    if let Some(pb) = &download_bar {
                        pb.finish_and_clear();
                    }
                    *spinner.borrow_mut() = Some(output::create_spinner(messages.extracting));
                }
                StepEvent::Renaming { from, .. } => {
                    println!("{}", fill(messages.renaming, &from.display().to_string()));
                }
                StepEvent::ArchiveRemoved { path } => {
                    println!(
                        "{}",
                        fill(messages.removed_archive, &path.display().to_string())
                    );
                }
            }
        };

        let fetcher = HttpFetcher::new();
        let result = install(&config, toolchain, &fetcher, &DiskWorkspace, progress, report).await;

        if let Some(pb) = spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = &download_bar {
            pb.finish_and_clear();
        }

        match result? {
            InstallOutcome::AlreadyInstalled { dest } => {
                if self.json {
                    print_summary(toolchain, &dest, "already-installed", false, None)?;
                } else if !self.quiet {
                    println!(
                        "{} {}",
                        status::SUCCESS,
                        fill(messages.already_installed, &dest.display().to_string())
                    );
                }
            }
            InstallOutcome::Installed {
                dest,
                archive_reused,
                cleanup_warning,
            } => {
                if let Some(warning) = &cleanup_warning {
                    eprintln!(
                        "{} {}",
                        status::WARNING,
                        fill(messages.remove_archive_failed, warning)
                    );
                }
                if self.json {
                    print_summary(
                        toolchain,
                        &dest,
                        "installed",
                        archive_reused,
                        cleanup_warning.as_deref(),
                    )?;
                } else if !self.quiet {
                    println!(
                        "{} {}",
                        status::SUCCESS,
                        fill(messages.success, &toolchain.to_string())
                    );
                }
            }
        }

        Ok(())
    }
}

/// Machine-readable run summary printed by `--json`
#[derive(Debug, serde::Serialize)]
struct RunSummary<'a> {
    toolchain: Toolchain,
    destination: &'a Path,
    action: &'a str,
    archive_reused: bool,
    cleanup_warning: Option<&'a str>,
}

fn print_summary(
    toolchain: Toolchain,
    dest: &Path,
    action: &str,
    archive_reused: bool,
    cleanup_warning: Option<&str>,
) -> Result<()> {
    let summary = RunSummary {
        toolchain,
        destination: dest,
        action,
        archive_reused,
        cleanup_warning,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
