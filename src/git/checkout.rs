//! Checkout of a pinned release tag

use git2::Repository;

use crate::error::{FlutterstrapError, Result};

/// Check out a release tag in the cloned SDK repository
///
/// Leaves HEAD detached at the tagged commit, which is how the Flutter tool
/// itself expects a pinned install to look.
pub fn checkout_tag(repo: &Repository, tag: &str) -> Result<()> {
    let commit = resolve_tag(repo, tag)?;

    repo.set_head_detached(commit.id())
        .map_err(|e| FlutterstrapError::GitCheckoutFailed {
            reference: tag.to_string(),
            reason: e.message().to_string(),
        })?;

    let mut checkout_builder = git2::build::CheckoutBuilder::new();
    checkout_builder.force();

    repo.checkout_head(Some(&mut checkout_builder))
        .map_err(|e| FlutterstrapError::GitCheckoutFailed {
            reference: tag.to_string(),
            reason: e.message().to_string(),
        })?;

    Ok(())
}

/// Resolve a tag name to a commit, trying the spellings upstream uses
fn resolve_tag<'a>(repo: &'a Repository, tag: &str) -> Result<git2::Commit<'a>> {
    let ref_candidates = [
        format!("refs/tags/{tag}"),
        format!("refs/tags/v{tag}"),
        tag.to_string(),
    ];

    for candidate in &ref_candidates {
        if let Ok(reference) = repo.find_reference(candidate) {
            if let Ok(commit) = reference.peel_to_commit() {
                return Ok(commit);
            }
        }
    }

    if let Ok(obj) = repo.revparse_single(tag) {
        if let Ok(commit) = obj.peel_to_commit() {
            return Ok(commit);
        }
    }

    Err(FlutterstrapError::GitCheckoutFailed {
        reference: tag.to_string(),
        reason: "Could not resolve tag".to_string(),
    })
}
