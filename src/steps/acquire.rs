//! SDK source acquisition - the only fatal step
//!
//! An install directory that already holds the SDK executable short-circuits
//! acquisition entirely: its mere existence is the precondition-satisfied
//! marker, and its channel or version is deliberately not re-verified.
//!
//! Otherwise the upstream repository is shallow-cloned at the channel
//! branch. A pinned release tag is checked out afterwards; since a shallow
//! channel clone carries no tags, a failed checkout triggers one tag fetch
//! and exactly one retry before the run aborts.

use crate::config::{BootstrapConfig, VersionPin};
use crate::error::{FlutterstrapError, Result};
use crate::git;
use crate::step::StepOutcome;
use crate::ui;

const STEP_ID: &str = "sdk-acquire";

/// Acquire the SDK source; an `Err` aborts the whole run
pub fn run(config: &BootstrapConfig) -> Result<StepOutcome> {
    ui::section("Acquiring the Flutter SDK");

    if config.flutter_bin().exists() {
        let message = format!(
            "SDK already present at {}; skipping clone",
            config.sdk_path.display()
        );
        ui::info(&message);
        return Ok(StepOutcome::succeeded(STEP_ID, message));
    }

    if let Some(parent) = config.sdk_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            FlutterstrapError::io(
                format!("creating parent of {}", config.sdk_path.display()),
                e,
            )
        })?;
    }

    ui::info(&format!(
        "cloning {} ({} channel) into {}",
        config.repo_url,
        config.channel.branch(),
        config.sdk_path.display()
    ));
    let repo = git::clone_channel(&config.repo_url, config.channel.branch(), &config.sdk_path)?;

    if let VersionPin::Tag(tag) = &config.version {
        checkout_pinned(&repo, tag)?;
        return Ok(StepOutcome::succeeded(
            STEP_ID,
            format!("cloned {} at {tag}", config.channel.branch()),
        ));
    }

    Ok(StepOutcome::succeeded(
        STEP_ID,
        format!("cloned {} channel tip", config.channel.branch()),
    ))
}

/// Check out a pinned tag, fetching tag metadata and retrying exactly once
fn checkout_pinned(repo: &git2::Repository, tag: &str) -> Result<()> {
    match git::checkout_tag(repo, tag) {
        Ok(()) => Ok(()),
        Err(first) => {
            ui::warn(&format!(
                "checkout of {tag} failed ({first}); fetching tags and retrying once"
            ));
            git::fetch_tags(repo)?;
            git::checkout_tag(repo, tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Channel, TargetPlatform};
    use crate::test_fixtures::{fixture_repo, tag_head, write_flutter_stub};
    use std::path::Path;
    use tempfile::TempDir;

    fn config(sdk_path: &Path, repo_url: &str, version: VersionPin) -> BootstrapConfig {
        BootstrapConfig {
            sdk_path: sdk_path.to_path_buf(),
            repo_url: repo_url.to_string(),
            channel: Channel::Stable,
            version,
            packages: vec![],
            enable: vec![TargetPlatform::Web, TargetPlatform::LinuxDesktop],
            disable: vec![TargetPlatform::Android, TargetPlatform::Ios],
        }
    }

    #[test]
    fn test_existing_sdk_short_circuits_clone() {
        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("flutter");
        write_flutter_stub(&sdk);

        // A URL that cannot be cloned proves no clone was attempted
        let config = config(&sdk, "/nonexistent/upstream", VersionPin::Latest);
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.status, crate::step::StepStatus::Succeeded);
        assert!(outcome.message.contains("already present"));
        assert!(!sdk.join(".git").exists());
    }

    #[test]
    fn test_clone_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("flutter");

        let config = config(&sdk, "/nonexistent/upstream", VersionPin::Latest);
        let result = run(&config);

        assert!(matches!(
            result,
            Err(FlutterstrapError::GitCloneFailed { .. })
        ));
    }

    #[test]
    fn test_latest_clones_channel_tip() {
        let fixture = fixture_repo("stable");
        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("flutter");

        let config = config(
            &sdk,
            fixture.path().to_str().unwrap(),
            VersionPin::Latest,
        );
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.status, crate::step::StepStatus::Succeeded);
        assert!(sdk.join("bin").join("flutter").exists());
    }

    #[test]
    fn test_pinned_version_checks_out_tag() {
        let fixture = fixture_repo("stable");
        let upstream = git2::Repository::open(fixture.path()).unwrap();
        tag_head(&upstream, "3.24.0");

        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("flutter");

        let config = config(
            &sdk,
            fixture.path().to_str().unwrap(),
            VersionPin::Tag("3.24.0".to_string()),
        );
        let outcome = run(&config).unwrap();

        assert!(outcome.message.contains("3.24.0"));
        let clone = git2::Repository::open(&sdk).unwrap();
        assert!(clone.head_detached().unwrap());
    }

    #[test]
    fn test_missing_pinned_version_is_fatal_after_retry() {
        let fixture = fixture_repo("stable");
        let temp = TempDir::new().unwrap();
        let sdk = temp.path().join("flutter");

        let config = config(
            &sdk,
            fixture.path().to_str().unwrap(),
            VersionPin::Tag("9.9.9".to_string()),
        );
        let result = run(&config);

        assert!(matches!(
            result,
            Err(FlutterstrapError::GitCheckoutFailed { .. })
        ));
    }
}
