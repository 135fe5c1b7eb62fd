//! Common test utilities for Flutterstrap integration tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Build a command for the REAL flutterstrap binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn flutterstrap_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("flutterstrap").unwrap()
}

/// A throwaway sandbox with a controlled search path
///
/// `bin` holds stub executables and is meant to be the entire PATH of the
/// invocation, so probes (package manager, browser, xvfb-run) see only what
/// the test planted.
#[allow(dead_code)]
pub struct TestSandbox {
    /// Temporary directory
    pub temp: TempDir,
    /// Stub executable directory (the controlled PATH)
    pub bin: PathBuf,
    /// SDK install target used by tests
    pub sdk: PathBuf,
}

#[allow(dead_code)]
impl TestSandbox {
    /// Create a new sandbox with an empty stub bin directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create stub bin directory");
        let sdk = temp.path().join("flutter");
        Self { temp, bin, sdk }
    }

    /// Path to the sandbox root
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Plant an executable stub shell script on the controlled PATH
    pub fn write_stub(&self, name: &str, body: &str) -> PathBuf {
        write_executable(&self.bin.join(name), body)
    }

    /// Create an SDK directory whose `bin/flutter` logs every invocation
    /// into `.invocations.log` next to the SDK and exits 0
    pub fn install_fake_sdk(&self) -> PathBuf {
        install_logging_flutter(&self.sdk)
    }

    /// Invocation log of the fake SDK, one line per flutter call
    pub fn flutter_log(&self) -> String {
        std::fs::read_to_string(self.sdk.join(".invocations.log")).unwrap_or_default()
    }

    /// Create an upstream-like git repository that clones into a valid SDK
    ///
    /// The cloned `bin/flutter` stub logs into `.invocations.log` inside the
    /// clone, so the end-to-end test can assert which toolchain commands ran.
    pub fn upstream_repo(&self, branch: &str) -> PathBuf {
        let upstream = self.temp.path().join("upstream");
        std::fs::create_dir_all(&upstream).expect("Failed to create upstream directory");

        let mut opts = git2::RepositoryInitOptions::new();
        opts.initial_head(branch);
        let repo = git2::Repository::init_opts(&upstream, &opts)
            .expect("Failed to init upstream repository");

        install_logging_flutter(&upstream);
        std::fs::write(upstream.join("version"), "0.0.0-fixture\n")
            .expect("Failed to write version file");

        commit_all(&repo, "sdk snapshot");
        upstream
    }

    /// Tag the upstream repository's HEAD
    pub fn tag_upstream(&self, tag: &str) {
        let repo = git2::Repository::open(self.temp.path().join("upstream"))
            .expect("Failed to open upstream repository");
        let head = repo
            .head()
            .expect("Failed to read HEAD")
            .peel(git2::ObjectType::Commit)
            .expect("Failed to peel HEAD");
        repo.tag_lightweight(tag, &head, false)
            .expect("Failed to tag upstream");
    }
}

/// Write `bin/flutter` under `root`, logging arguments to
/// `<root>/.invocations.log`
#[allow(dead_code)]
fn install_logging_flutter(root: &Path) -> PathBuf {
    let bin = root.join("bin");
    std::fs::create_dir_all(&bin).expect("Failed to create SDK bin directory");
    // Resolve the log path relative to the stub's own location (`$0`) rather
    // than baking in an absolute path. This keeps the log next to whichever
    // SDK tree the stub ends up in — crucially after it is cloned elsewhere,
    // so the end-to-end test reads invocations from the clone, not upstream.
    write_executable(
        &bin.join("flutter"),
        "#!/bin/sh\nlog=\"${0%/*}/../.invocations.log\"\necho \"$@\" >> \"$log\"\nexit 0\n",
    );
    root.to_path_buf()
}

#[allow(dead_code)]
fn write_executable(path: &Path, body: &str) -> PathBuf {
    std::fs::write(path, body).expect("Failed to write stub");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");
    }

    path.to_path_buf()
}

#[allow(dead_code)]
fn commit_all(repo: &git2::Repository, message: &str) {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = git2::Signature::now("fixture", "fixture@example.com")
        .expect("Failed to create signature");

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .expect("Failed to commit");
}
