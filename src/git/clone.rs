//! SDK repository cloning

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::error::interpret_git_error;
use crate::error::{FlutterstrapError, Result};
use crate::progress::CloneProgress;

/// Clone the SDK repository at the given channel branch
///
/// Remote URLs are cloned shallowly (depth 1): the SDK tree is large and the
/// channel tip is all a fresh sandbox needs. Local paths and file:// URLs are
/// cloned in full since libgit2 does not support shallow local fetches.
pub fn clone_channel(url: &str, branch: &str, target: &Path) -> Result<Repository> {
    let progress = CloneProgress::new();

    let mut callbacks = RemoteCallbacks::new();
    callbacks.transfer_progress(|stats| {
        progress.update(stats.received_objects(), stats.total_objects());
        true
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    if !is_local_url(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    builder.branch(branch);

    match builder.clone(url, target) {
        Ok(repo) => {
            progress.finish();
            Ok(repo)
        }
        Err(e) => {
            progress.abandon();
            Err(FlutterstrapError::GitCloneFailed {
                url: url.to_string(),
                reason: interpret_git_error(&e),
            })
        }
    }
}

fn is_local_url(url: &str) -> bool {
    url.starts_with("file://") || Path::new(url).is_absolute()
}
