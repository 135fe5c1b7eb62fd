//! Ambient environment introspection and explicit exports
//!
//! [`Snapshot`] is a read-only view of the sandbox consulted to make
//! decisions: which package manager exists, whether privileges can be
//! elevated, whether a graphical display is configured. It is re-probed on
//! every run and never cached.
//!
//! [`Exports`] is the explicit list of environment variables a run produces
//! (toolchain home, search-path prepends, selected browser). Instead of
//! mutating the process environment ambiently, the exports are threaded into
//! every child-process invocation and announced once on stdout so the caller
//! can persist them.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sentinel variable marking a process already running inside the
/// virtual-display wrapper; prevents the launcher from recursing.
pub const XVFB_SENTINEL: &str = "FLUTTERSTRAP_INSIDE_XVFB";

/// System package manager the dependency installer can drive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageManager {
    AptGet,
    Apt,
    Dnf,
}

impl PackageManager {
    /// Probe order: prefer apt-get (scriptable) over apt, then dnf
    const CANDIDATES: &'static [PackageManager] =
        &[PackageManager::AptGet, PackageManager::Apt, PackageManager::Dnf];

    pub fn program(self) -> &'static str {
        match self {
            PackageManager::AptGet => "apt-get",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
        }
    }

    /// Arguments for the metadata-refresh invocation
    pub fn update_args(self) -> Vec<String> {
        match self {
            PackageManager::AptGet | PackageManager::Apt => vec!["update".to_string()],
            PackageManager::Dnf => vec!["makecache".to_string()],
        }
    }

    /// Arguments for a non-interactive install of the given packages
    pub fn install_args(self, packages: &[String]) -> Vec<String> {
        let mut args = vec!["install".to_string(), "-y".to_string()];
        args.extend(packages.iter().cloned());
        args
    }

    /// Extra environment for non-interactive operation
    pub fn extra_env(self) -> Vec<(&'static str, &'static str)> {
        match self {
            PackageManager::AptGet | PackageManager::Apt => {
                vec![("DEBIAN_FRONTEND", "noninteractive")]
            }
            PackageManager::Dnf => vec![],
        }
    }

    /// Detect the first available package manager on the given search path
    pub fn detect_on(path_var: &OsStr) -> Option<PackageManager> {
        Self::CANDIDATES
            .iter()
            .copied()
            .find(|pm| find_executable_on(path_var, pm.program()).is_some())
    }
}

/// Read-only view of ambient state, re-probed each run
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Value of DISPLAY, if set and non-empty
    pub display: Option<String>,
    /// Whether the virtual-display sentinel is present
    pub inside_xvfb: bool,
    /// Whether the process runs with root privileges
    pub running_as_root: bool,
    /// Privilege-escalation helper, if present
    pub sudo: Option<PathBuf>,
    /// Detected system package manager, if any
    pub package_manager: Option<PackageManager>,
    /// Virtual framebuffer wrapper, if present
    pub xvfb_run: Option<PathBuf>,
}

impl Snapshot {
    /// Probe the current process environment
    pub fn probe() -> Snapshot {
        let path_var = std::env::var_os("PATH").unwrap_or_default();

        Snapshot {
            display: std::env::var("DISPLAY").ok().filter(|v| !v.is_empty()),
            inside_xvfb: std::env::var_os(XVFB_SENTINEL).is_some(),
            running_as_root: effective_uid_is_root(),
            sudo: find_executable_on(&path_var, "sudo"),
            package_manager: PackageManager::detect_on(&path_var),
            xvfb_run: find_executable_on(&path_var, "xvfb-run"),
        }
    }
}

/// Whether the process runs as root, probed via `id -u`
///
/// A probe failure is treated as non-root: the dependency installer then
/// reaches for sudo or degrades to a warning, both safe outcomes.
fn effective_uid_is_root() -> bool {
    Command::new("id")
        .arg("-u")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim() == "0")
        .unwrap_or(false)
}

/// Find an executable by name on the process search path
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    find_executable_on(&path_var, name)
}

/// Find an executable by name on the given search path value
pub fn find_executable_on(path_var: &OsStr, name: &str) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Environment variables produced by a run
///
/// Accumulated across steps, applied to child-process invocations through
/// [`Exports::apply_to`], and announced once so the caller can persist them.
#[derive(Clone, Debug, Default)]
pub struct Exports {
    vars: Vec<(String, String)>,
    path_prepends: Vec<PathBuf>,
}

impl Exports {
    pub fn new() -> Self {
        Exports::default()
    }

    /// Record a produced variable
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.vars.push((key.to_string(), value.into()));
    }

    /// Record a directory to prepend to the search path
    pub fn prepend_path(&mut self, dir: impl Into<PathBuf>) {
        self.path_prepends.push(dir.into());
    }

    /// Look up a recorded variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Search path value with the recorded prepends ahead of the inherited one
    pub fn path_value(&self) -> OsString {
        let inherited = std::env::var_os("PATH").unwrap_or_default();
        let dirs = self
            .path_prepends
            .iter()
            .cloned()
            .chain(std::env::split_paths(&inherited));
        std::env::join_paths(dirs).unwrap_or(inherited)
    }

    /// Apply the exports to a child-process invocation
    pub fn apply_to(&self, command: &mut Command) {
        for (key, value) in &self.vars {
            command.env(key, value);
        }
        if !self.path_prepends.is_empty() {
            command.env("PATH", self.path_value());
        }
    }

    /// Announce the exports on stdout in shell-persistable form
    pub fn announce(&self) {
        for (key, value) in &self.vars {
            crate::ui::info(&format!("export {key}={value}"));
        }
        for dir in &self.path_prepends {
            crate::ui::info(&format!("export PATH={}:$PATH", dir.display()));
        }
    }
}
