//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - setup: Setup command arguments
//! - doctor: Doctor command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod doctor;
pub mod setup;

pub use completions::CompletionsArgs;
pub use doctor::DoctorArgs;
pub use setup::SetupArgs;

/// Flutterstrap - Flutter sandbox bootstrapper
///
/// Provision a Linux sandbox with a Flutter SDK restricted to the Web and
/// Linux-desktop targets.
#[derive(Parser, Debug)]
#[command(
    name = "flutterstrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bootstrap a Web/Linux-desktop-only Flutter SDK sandbox",
    long_about = "Flutterstrap installs OS-level build dependencies, acquires the Flutter SDK \
                  from its upstream repository, disables the mobile targets (Android, iOS), \
                  enables Web and Linux-desktop, and verifies the toolchain with precache and \
                  doctor. Only SDK acquisition failures abort the run; everything else is \
                  best-effort and reported.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  flutterstrap setup                         \x1b[90m# Latest stable into ~/flutter\x1b[0m\n   \
                  flutterstrap setup --channel beta          \x1b[90m# Track the beta channel\x1b[0m\n   \
                  flutterstrap setup --version 3.24.0        \x1b[90m# Pin a release tag\x1b[0m\n   \
                  flutterstrap setup --sdk-path /opt/flutter \x1b[90m# Custom install directory\x1b[0m\n   \
                  flutterstrap doctor                        \x1b[90m# Re-run the SDK diagnostics\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Print the external commands being run
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full bootstrap sequence
    Setup(SetupArgs),

    /// Run the SDK diagnostics against an existing install
    Doctor(DoctorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
