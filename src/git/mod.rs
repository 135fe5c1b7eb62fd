//! Git operations for acquiring the SDK
//!
//! This module handles:
//! - Shallow-cloning the upstream SDK repository at a channel branch
//! - Checking out a pinned release tag
//! - Fetching tag metadata for the single checkout retry
//!
//! Acquisition is the only fatal tier of the bootstrap: every error raised
//! here aborts the run.

pub mod checkout;
pub mod clone;
pub mod error;
pub mod fetch;

pub use checkout::checkout_tag;
pub use clone::clone_channel;
pub use fetch::fetch_tags;
