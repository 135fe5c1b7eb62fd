//! Browser resolution for the web target
//!
//! The web toolchain locates its browser through CHROME_EXECUTABLE. Probe a
//! small ordered candidate list and export the first hit; a miss is only a
//! warning so the later doctor run fails visibly instead of being masked.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::sandbox::{self, Exports};
use crate::step::StepOutcome;
use crate::ui;

const STEP_ID: &str = "browser";

/// Candidate browser executables, most preferred first
pub const BROWSER_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
];

/// Probe for a usable browser and export it for the web toolchain
pub fn run(exports: &mut Exports) -> StepOutcome {
    ui::section("Resolving browser for the web target");

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    match resolve_on(&path_var) {
        Some(browser) => {
            ui::info(&format!("using {}", browser.display()));
            exports.set("CHROME_EXECUTABLE", browser.display().to_string());
            StepOutcome::succeeded(STEP_ID, format!("selected {}", browser.display()))
        }
        None => {
            let message = format!(
                "no browser found (tried {}); web-target verification will fail until one is installed",
                BROWSER_CANDIDATES.join(", ")
            );
            ui::warn(&message);
            StepOutcome::failed(STEP_ID, message)
        }
    }
}

/// First present candidate on the given search path
fn resolve_on(path_var: &OsStr) -> Option<PathBuf> {
    BROWSER_CANDIDATES
        .iter()
        .find_map(|name| sandbox::find_executable_on(path_var, name))
}
