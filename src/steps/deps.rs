//! OS-level build dependency installation
//!
//! Best-effort by design: a sandbox without a package manager or without a
//! way to elevate privileges is still serviceable when the dependencies were
//! pre-installed, and `flutter doctor` later surfaces whatever is missing
//! with more actionable detail than an install failure would.

use std::process::Command;

use crate::config::BootstrapConfig;
use crate::sandbox::{PackageManager, Snapshot};
use crate::step::StepOutcome;
use crate::ui;

const STEP_ID: &str = "system-deps";

/// Install the configured system packages through the detected package
/// manager, elevating via sudo when necessary and possible
pub fn run(verbose: bool, config: &BootstrapConfig, snapshot: &Snapshot) -> StepOutcome {
    ui::section("Installing system dependencies");

    let Some(pm) = snapshot.package_manager else {
        let message = format!(
            "no supported package manager found; ensure these packages are pre-installed: {}",
            config.packages.join(" ")
        );
        ui::warn(&message);
        return StepOutcome::failed(STEP_ID, message);
    };

    let elevate = if snapshot.running_as_root {
        false
    } else if snapshot.sudo.is_some() {
        true
    } else {
        let message = format!(
            "not running as root and sudo is unavailable; ensure these packages are pre-installed: {}",
            config.packages.join(" ")
        );
        ui::warn(&message);
        return StepOutcome::failed(STEP_ID, message);
    };

    // Refresh package metadata first; a stale index is the usual cause of
    // resolution failures on fresh sandboxes
    if let Err(message) = run_pm(verbose, pm, elevate, &pm.update_args()) {
        ui::warn(&format!("package index refresh failed: {message}"));
    }

    match run_pm(verbose, pm, elevate, &pm.install_args(&config.packages)) {
        Ok(()) => StepOutcome::succeeded(
            STEP_ID,
            format!("installed {} package(s) via {}", config.packages.len(), pm.program()),
        ),
        Err(message) => {
            let message = format!(
                "package install failed ({message}); flutter doctor will report what is missing"
            );
            ui::warn(&message);
            StepOutcome::failed(STEP_ID, message)
        }
    }
}

/// Run one package-manager invocation, under sudo when elevating
fn run_pm(verbose: bool, pm: PackageManager, elevate: bool, args: &[String]) -> Result<(), String> {
    let mut command = if elevate {
        let mut c = Command::new("sudo");
        c.arg(pm.program());
        c
    } else {
        Command::new(pm.program())
    };
    command.args(args);
    for (key, value) in pm.extra_env() {
        command.env(key, value);
    }

    let program = command.get_program().to_string_lossy().to_string();
    let shown: Vec<String> = command
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    ui::command_line(verbose, &program, &shown);

    match command.status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(format!("{} exited with {status}", pm.program())),
        Err(e) => Err(format!("failed to run {}: {e}", pm.program())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SetupArgs;
    use clap::Parser;

    fn test_config() -> BootstrapConfig {
        let args = SetupArgs::try_parse_from(["setup", "--sdk-path", "/tmp/sdk"]).unwrap();
        BootstrapConfig::from_args(&args).unwrap()
    }

    fn headless_snapshot(package_manager: Option<PackageManager>) -> Snapshot {
        Snapshot {
            display: None,
            inside_xvfb: true,
            running_as_root: false,
            sudo: None,
            package_manager,
            xvfb_run: None,
        }
    }

    #[test]
    fn test_missing_package_manager_warns_and_names_packages() {
        let config = test_config();
        let outcome = run(false, &config, &headless_snapshot(None));

        assert_eq!(outcome.status, crate::step::StepStatus::FailedNonFatal);
        assert!(outcome.message.contains("pre-installed"));
        assert!(outcome.message.contains("libgtk-3-dev"));
    }

    #[test]
    fn test_no_elevation_path_warns_and_names_packages() {
        let config = test_config();
        let outcome = run(
            false,
            &config,
            &headless_snapshot(Some(PackageManager::AptGet)),
        );

        assert_eq!(outcome.status, crate::step::StepStatus::FailedNonFatal);
        assert!(outcome.message.contains("sudo is unavailable"));
        assert!(outcome.message.contains("libgtk-3-dev"));
    }
}
