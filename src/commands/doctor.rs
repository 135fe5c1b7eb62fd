//! Doctor command implementation
//!
//! Re-runs the SDK diagnostic against an existing install, with the same
//! toolchain exports a setup run would use. Keeps the lenient exit policy:
//! doctor findings never fail the process, only a missing SDK does.

use crate::cli::DoctorArgs;
use crate::config::{self, BootstrapConfig, Channel, TargetPlatform, VersionPin};
use crate::error::{FlutterstrapError, Result};
use crate::sandbox::Exports;
use crate::steps;

/// Run the SDK diagnostics
pub fn run(verbose: bool, args: DoctorArgs) -> Result<()> {
    let sdk_path = config::resolve_sdk_path(args.sdk_path)?;

    let config = BootstrapConfig {
        sdk_path,
        repo_url: String::new(),
        channel: Channel::Stable,
        version: VersionPin::Latest,
        packages: vec![],
        enable: vec![TargetPlatform::Web, TargetPlatform::LinuxDesktop],
        disable: vec![TargetPlatform::Android, TargetPlatform::Ios],
    };

    if !config.flutter_bin().exists() {
        return Err(FlutterstrapError::SdkNotFound {
            path: config.sdk_path.display().to_string(),
        });
    }

    let mut exports = Exports::new();
    steps::toolchain::export_toolchain(&config, &mut exports);
    steps::verify::doctor(verbose, &config, &exports);

    Ok(())
}
