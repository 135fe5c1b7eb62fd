//! Precache and diagnostic verification
//!
//! Both invocations are best-effort. A failing precache still runs doctor,
//! since the diagnostic output usually names the root cause; a failing
//! doctor does not change the process exit code. The run is "setup
//! attempted" either way, and the operator triages the textual report.

use crate::config::BootstrapConfig;
use crate::sandbox::Exports;
use crate::step::StepOutcome;
use crate::steps::{flutter_command, run_as_step};
use crate::ui;

/// Materialize the build tooling for the enabled targets
pub fn precache(verbose: bool, config: &BootstrapConfig, exports: &Exports) -> StepOutcome {
    ui::section("Precaching target build artifacts");

    let mut args = vec!["precache"];
    args.extend(
        config
            .enable
            .iter()
            .filter_map(|platform| platform.precache_flag()),
    );

    let command = flutter_command(&config.flutter_bin(), &args, exports);
    let outcome = run_as_step("precache", verbose, command, "target artifacts precached");
    if outcome.status == crate::step::StepStatus::FailedNonFatal {
        ui::warn(&format!("{}; running doctor anyway", outcome.message));
    }
    outcome
}

/// Run the verbose per-target readiness diagnostic
pub fn doctor(verbose: bool, config: &BootstrapConfig, exports: &Exports) -> StepOutcome {
    ui::section("Running flutter doctor");

    let command = flutter_command(&config.flutter_bin(), &["doctor", "-v"], exports);
    let outcome = run_as_step("doctor", verbose, command, "diagnostics reported");
    if outcome.status == crate::step::StepStatus::FailedNonFatal {
        ui::warn(&format!(
            "{}; inspect the doctor output above for actionable problems",
            outcome.message
        ));
    }
    outcome
}
