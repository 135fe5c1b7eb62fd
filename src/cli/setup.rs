//! Setup command arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Channel, DEFAULT_REPO_URL};

/// Arguments for the setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Bootstrap latest stable into ~/flutter:\n    flutterstrap setup\n\n\
                   Pin a release tag:\n    flutterstrap setup --version 3.24.0\n\n\
                   Install extra system packages:\n    flutterstrap setup --package ccache --package mold\n\n\
                   Write a machine-readable report:\n    flutterstrap setup --report-json setup-report.json")]
pub struct SetupArgs {
    /// SDK install directory (defaults to ~/flutter)
    #[arg(long, value_name = "DIR", env = "FLUTTERSTRAP_SDK_PATH")]
    pub sdk_path: Option<PathBuf>,

    /// Release channel to track
    #[arg(long, value_enum, default_value_t = Channel::Stable)]
    pub channel: Channel,

    /// Release tag to pin, or "latest" to stay on the channel tip
    #[arg(long, default_value = "latest", value_name = "TAG")]
    pub version: String,

    /// Upstream SDK repository to clone
    #[arg(long, value_name = "URL", env = "FLUTTERSTRAP_REPO_URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Extra system packages to install besides the built-in set
    #[arg(long = "package", value_name = "NAME")]
    pub packages: Vec<String>,

    /// Write the step outcomes as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub report_json: Option<PathBuf>,
}
