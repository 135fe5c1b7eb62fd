//! Setup command implementation
//!
//! The bootstrap sequence, strictly top to bottom:
//! 1. Probe the ambient environment
//! 2. Re-run under a virtual display if headless (supervisor spawns the
//!    child and exits with its status)
//! 3. Install OS-level build dependencies (best-effort)
//! 4. Resolve a browser for the web target (best-effort)
//! 5. Acquire the SDK source (fatal on failure)
//! 6. Configure target platforms (best-effort)
//! 7. Precache and run doctor (best-effort)
//!
//! The process exits 0 whenever the sequence completes, warnings included;
//! only acquisition failure produces a non-zero exit.

use crate::cli::SetupArgs;
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::launcher;
use crate::report::RunReport;
use crate::sandbox::{Exports, Snapshot};
use crate::step::StepOutcome;
use crate::steps;
use crate::ui;

/// Run the full bootstrap sequence
pub fn run(verbose: bool, args: SetupArgs) -> Result<()> {
    let config = BootstrapConfig::from_args(&args)?;
    let snapshot = Snapshot::probe();

    if let Some(code) = launcher::relaunch_under_xvfb(&snapshot) {
        std::process::exit(code);
    }

    let mut report = RunReport::new();
    let mut exports = Exports::new();

    report.push(steps::deps::run(verbose, &config, &snapshot));
    report.push(steps::browser::run(&mut exports));

    match steps::acquire::run(&config) {
        Ok(outcome) => report.push(outcome),
        Err(e) => {
            report.push(StepOutcome::fatal("sdk-acquire", e.to_string()));
            finish(&report, &args, &exports);
            return Err(e);
        }
    }

    steps::toolchain::export_toolchain(&config, &mut exports);
    report.extend(steps::toolchain::run(verbose, &config, &exports));
    report.push(steps::verify::precache(verbose, &config, &exports));
    report.push(steps::verify::doctor(verbose, &config, &exports));

    finish(&report, &args, &exports);
    ui::info("setup attempted; inspect the report above for actionable problems");
    Ok(())
}

/// Print the summary, announce the produced environment, and write the
/// optional JSON report
fn finish(report: &RunReport, args: &SetupArgs, exports: &Exports) {
    report.print_summary();
    exports.announce();

    if let Some(path) = &args.report_json {
        if let Err(e) = report.write_json(path) {
            ui::warn(&format!(
                "could not write JSON report to {}: {e}",
                path.display()
            ));
        }
    }
}
