//! Display virtualization guard
//!
//! Desktop-target verification needs a display server even when no human is
//! present. When no display is configured, the bootstrap re-runs itself as a
//! child process under `xvfb-run` and exits with the child's status. The
//! sentinel variable marks the child so the guard fires at most once.

use std::process::Command;

use crate::sandbox::{Snapshot, XVFB_SENTINEL};
use crate::ui;

/// Whether the run needs to be wrapped in a virtual display
pub fn needs_virtual_display(snapshot: &Snapshot) -> bool {
    snapshot.display.is_none() && !snapshot.inside_xvfb
}

/// Re-run the bootstrap under the virtual framebuffer wrapper if needed
///
/// Returns the child's exit code when a wrapped run happened; `None` when the
/// current process should continue with the sequence itself (display already
/// configured, already inside the wrapper, or wrapper unavailable).
pub fn relaunch_under_xvfb(snapshot: &Snapshot) -> Option<i32> {
    if !needs_virtual_display(snapshot) {
        return None;
    }

    let Some(wrapper) = &snapshot.xvfb_run else {
        ui::warn(
            "no display configured and xvfb-run not found; desktop-target verification may fail",
        );
        return None;
    };

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            ui::warn(&format!(
                "no display configured but could not resolve own executable ({e}); continuing without virtual display"
            ));
            return None;
        }
    };

    ui::info("no display configured; re-running under xvfb-run");

    let status = Command::new(wrapper)
        .arg("-a")
        .arg(exe)
        .args(std::env::args_os().skip(1))
        .env(XVFB_SENTINEL, "1")
        .status();

    match status {
        // A signal-terminated child carries no code; report generic failure
        Ok(status) => Some(status.code().unwrap_or(1)),
        Err(e) => {
            ui::warn(&format!(
                "failed to start xvfb-run ({e}); continuing without virtual display"
            ));
            None
        }
    }
}
