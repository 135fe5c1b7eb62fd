//! Doctor command arguments

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the doctor command
#[derive(Parser, Debug)]
pub struct DoctorArgs {
    /// SDK install directory (defaults to ~/flutter)
    #[arg(long, value_name = "DIR", env = "FLUTTERSTRAP_SDK_PATH")]
    pub sdk_path: Option<PathBuf>,
}
