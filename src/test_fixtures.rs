//! Test fixtures for reducing test setup duplication.
//!
//! Builds throwaway upstream SDK repositories with `git2`, so acquisition
//! tests can clone and check out from a local path instead of the network.

use std::path::Path;

use tempfile::TempDir;

/// Create an upstream-like repository whose default branch is `branch`.
///
/// The repository carries a `marker.txt` and an executable `bin/flutter`
/// stub, so a clone of it passes the acquisition idempotency probe.
///
/// # Panics
///
/// Panics if the fixture cannot be built.
#[must_use]
pub fn fixture_repo(branch: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let mut opts = git2::RepositoryInitOptions::new();
    opts.initial_head(branch);
    let repo = git2::Repository::init_opts(temp.path(), &opts)
        .expect("Failed to init fixture repository");

    std::fs::write(temp.path().join("marker.txt"), "fixture\n")
        .expect("Failed to write marker file");
    write_flutter_stub(temp.path());

    commit_all(&repo, "sdk snapshot");
    temp
}

/// Write an executable `bin/flutter` stub that accepts any arguments
pub fn write_flutter_stub(root: &Path) {
    let bin = root.join("bin");
    std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
    let flutter = bin.join("flutter");
    std::fs::write(&flutter, "#!/bin/sh\nexit 0\n").expect("Failed to write flutter stub");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&flutter, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark flutter stub executable");
    }
}

/// Stage the whole worktree and commit it
pub fn commit_all(repo: &git2::Repository, message: &str) {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = git2::Signature::now("fixture", "fixture@example.com")
        .expect("Failed to create signature");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit");
}

/// Create a lightweight tag at the current HEAD
pub fn tag_head(repo: &git2::Repository, tag: &str) {
    let head = repo
        .head()
        .expect("Failed to read HEAD")
        .peel(git2::ObjectType::Commit)
        .expect("Failed to peel HEAD");
    repo.tag_lightweight(tag, &head, false)
        .expect("Failed to create tag");
}
