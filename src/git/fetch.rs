//! Tag metadata fetch for the checkout retry
//!
//! A shallow channel clone does not carry release tags. When a pinned
//! version fails to check out, the acquisition step fetches the tag refs
//! from origin and retries exactly once.

use git2::{AutotagOption, FetchOptions, Repository};

use crate::error::{FlutterstrapError, Result};

/// Fetch all tag refs from origin
pub fn fetch_tags(repo: &Repository) -> Result<()> {
    let mut remote = repo
        .find_remote("origin")
        .map_err(|e| FlutterstrapError::GitFetchFailed {
            reason: e.message().to_string(),
        })?;

    let mut fetch_options = FetchOptions::new();
    fetch_options.download_tags(AutotagOption::All);

    remote
        .fetch(
            &["+refs/tags/*:refs/tags/*"],
            Some(&mut fetch_options),
            None,
        )
        .map_err(|e| FlutterstrapError::GitFetchFailed {
            reason: e.message().to_string(),
        })
}
