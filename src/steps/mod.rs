//! The bootstrap steps, in run order
//!
//! - [`deps`]: OS-level build dependency installation (best-effort)
//! - [`browser`]: browser resolution for the web target (best-effort)
//! - [`acquire`]: SDK source acquisition (the only fatal step)
//! - [`toolchain`]: platform enable/disable configuration (best-effort)
//! - [`verify`]: precache and doctor verification (best-effort)

pub mod acquire;
pub mod browser;
pub mod deps;
pub mod toolchain;
pub mod verify;

use std::path::Path;
use std::process::Command;

use crate::sandbox::Exports;
use crate::step::StepOutcome;
use crate::ui;

/// Run the SDK's command-line tool with the produced exports applied
///
/// Output streams through to the operator; the exit status is folded into a
/// step outcome by the caller.
pub fn flutter_command(flutter_bin: &Path, args: &[&str], exports: &Exports) -> Command {
    let mut command = Command::new(flutter_bin);
    command.args(args);
    exports.apply_to(&mut command);
    command
}

/// Run a prepared external command to completion, reporting as one step
///
/// The child inherits stdout/stderr so its report is visible; a spawn error
/// or non-zero exit becomes a non-fatal outcome.
pub fn run_as_step(
    id: &'static str,
    verbose: bool,
    mut command: Command,
    success_message: impl Into<String>,
) -> StepOutcome {
    let program = command.get_program().to_string_lossy().to_string();
    let args: Vec<String> = command
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    ui::command_line(verbose, &program, &args);

    match command.status() {
        Ok(status) if status.success() => StepOutcome::succeeded(id, success_message),
        Ok(status) => StepOutcome::failed(id, format!("{program} exited with {status}")),
        Err(e) => StepOutcome::failed(id, format!("failed to run {program}: {e}")),
    }
}
