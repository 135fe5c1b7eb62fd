//! Bootstrap configuration
//!
//! Everything a run needs is collected here once, up front, from CLI
//! arguments and environment variables. The configuration is immutable for
//! the lifetime of the run.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::SetupArgs;
use crate::error::{FlutterstrapError, Result};

/// Upstream SDK repository cloned when no override is given
pub const DEFAULT_REPO_URL: &str = "https://github.com/flutter/flutter.git";

/// OS-level build dependencies for the Web and Linux-desktop targets.
///
/// Debian package names; on other distributions the operator is expected to
/// pre-install the equivalents (the installer degrades to a warning).
pub const DEFAULT_PACKAGES: &[&str] = &[
    "curl",
    "git",
    "unzip",
    "xz-utils",
    "zip",
    "libglu1-mesa",
    "clang",
    "cmake",
    "ninja-build",
    "pkg-config",
    "libgtk-3-dev",
    "liblzma-dev",
    "libstdc++-12-dev",
    "xvfb",
];

/// SDK update track; doubles as the branch name cloned from upstream
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Beta,
    Master,
}

impl Channel {
    /// Branch name of this channel in the upstream repository
    pub fn branch(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
            Channel::Master => "master",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.branch())
    }
}

/// Requested SDK version: the channel tip, or a pinned release tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionPin {
    Latest,
    Tag(String),
}

impl VersionPin {
    /// Parse the CLI value; "latest" (any case) is the channel-tip sentinel
    pub fn parse(value: &str) -> VersionPin {
        if value.eq_ignore_ascii_case("latest") {
            VersionPin::Latest
        } else {
            VersionPin::Tag(value.to_string())
        }
    }
}

/// A deployable output form the toolchain can be configured to build for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPlatform {
    Web,
    LinuxDesktop,
    Android,
    Ios,
}

impl TargetPlatform {
    /// Feature name as `flutter config` spells it
    pub fn config_name(self) -> &'static str {
        match self {
            TargetPlatform::Web => "web",
            TargetPlatform::LinuxDesktop => "linux-desktop",
            TargetPlatform::Android => "android",
            TargetPlatform::Ios => "ios",
        }
    }

    /// `flutter config` flag enabling or disabling this platform
    pub fn config_flag(self, enable: bool) -> String {
        if enable {
            format!("--enable-{}", self.config_name())
        } else {
            format!("--no-enable-{}", self.config_name())
        }
    }

    /// `flutter precache` flag for this platform, if it has one we use
    pub fn precache_flag(self) -> Option<&'static str> {
        match self {
            TargetPlatform::Web => Some("--web"),
            TargetPlatform::LinuxDesktop => Some("--linux"),
            TargetPlatform::Android | TargetPlatform::Ios => None,
        }
    }
}

/// Immutable per-run configuration
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// SDK install directory
    pub sdk_path: PathBuf,
    /// Upstream repository to clone
    pub repo_url: String,
    /// Channel to track
    pub channel: Channel,
    /// Version pin, or the channel tip
    pub version: VersionPin,
    /// System packages to install
    pub packages: Vec<String>,
    /// Platforms to enable
    pub enable: Vec<TargetPlatform>,
    /// Platforms to disable
    pub disable: Vec<TargetPlatform>,
}

impl BootstrapConfig {
    /// Build the run configuration from setup arguments
    pub fn from_args(args: &SetupArgs) -> Result<Self> {
        let sdk_path = resolve_sdk_path(args.sdk_path.clone())?;

        let mut packages: Vec<String> =
            DEFAULT_PACKAGES.iter().map(|p| (*p).to_string()).collect();
        packages.extend(args.packages.iter().cloned());

        Ok(BootstrapConfig {
            sdk_path,
            repo_url: args.repo_url.clone(),
            channel: args.channel,
            version: VersionPin::parse(&args.version),
            packages,
            enable: vec![TargetPlatform::Web, TargetPlatform::LinuxDesktop],
            disable: vec![TargetPlatform::Android, TargetPlatform::Ios],
        })
    }

    /// Path of the SDK entry-point executable; its presence marks a
    /// completed acquisition
    pub fn flutter_bin(&self) -> PathBuf {
        self.sdk_path.join("bin").join("flutter")
    }
}

/// Resolve the SDK install directory from an optional argument
///
/// If a path is provided, use it. Otherwise default to `flutter` under the
/// user's home directory.
pub fn resolve_sdk_path(sdk_path: Option<PathBuf>) -> Result<PathBuf> {
    match sdk_path {
        Some(path) => Ok(path),
        None => dirs::home_dir()
            .map(|home| home.join("flutter"))
            .ok_or(FlutterstrapError::HomeDirNotFound),
    }
}
