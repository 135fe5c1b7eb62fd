//! Toolchain configuration
//!
//! Produces the toolchain exports (home variable plus search-path prepends)
//! and steers `flutter config` towards the two supported targets. Each
//! config command is independent: one failing does not stop the others.

use crate::config::BootstrapConfig;
use crate::sandbox::Exports;
use crate::step::StepOutcome;
use crate::steps::{flutter_command, run_as_step};
use crate::ui;

/// Record the environment the toolchain needs for the rest of the run
pub fn export_toolchain(config: &BootstrapConfig, exports: &mut Exports) {
    exports.set("FLUTTER_HOME", config.sdk_path.display().to_string());
    exports.prepend_path(config.sdk_path.join("bin"));
    exports.prepend_path(
        config
            .sdk_path
            .join("bin")
            .join("cache")
            .join("dart-sdk")
            .join("bin"),
    );
}

/// Disable the mobile targets and enable web and linux-desktop
///
/// Best-effort steering of the toolchain, not an enforced guarantee: every
/// platform gets its own outcome and the sequence always continues.
pub fn run(verbose: bool, config: &BootstrapConfig, exports: &Exports) -> Vec<StepOutcome> {
    ui::section("Configuring target platforms");

    let flutter_bin = config.flutter_bin();
    let mut outcomes = Vec::new();

    for platform in &config.disable {
        let flag = platform.config_flag(false);
        let command = flutter_command(&flutter_bin, &["config", &flag], exports);
        outcomes.push(run_as_step(
            platform_step_id(platform.config_name(), false),
            verbose,
            command,
            format!("disabled {}", platform.config_name()),
        ));
    }

    for platform in &config.enable {
        let flag = platform.config_flag(true);
        let command = flutter_command(&flutter_bin, &["config", &flag], exports);
        outcomes.push(run_as_step(
            platform_step_id(platform.config_name(), true),
            verbose,
            command,
            format!("enabled {}", platform.config_name()),
        ));
    }

    for outcome in &outcomes {
        if outcome.status == crate::step::StepStatus::FailedNonFatal {
            ui::warn(&outcome.message);
        }
    }

    outcomes
}

/// Stable step id per platform config command
fn platform_step_id(config_name: &str, enable: bool) -> &'static str {
    match (config_name, enable) {
        ("web", true) => "config-web",
        ("linux-desktop", true) => "config-linux-desktop",
        ("android", false) => "config-no-android",
        ("ios", false) => "config-no-ios",
        ("web", false) => "config-no-web",
        ("linux-desktop", false) => "config-no-linux-desktop",
        ("android", true) => "config-android",
        _ => "config-ios",
    }
}
