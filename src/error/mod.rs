//! Error types and handling for Flutterstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only the failures that make the rest of the bootstrap sequence meaningless
//! become errors: SDK source acquisition (clone, checkout after the single
//! retry) and pre-flight resolution problems. Everything else in the sequence
//! is best-effort and is reported as a warning step outcome instead of an
//! error value.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Flutterstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum FlutterstrapError {
    // Git errors (the fatal tier: every later step needs the SDK present)
    #[error("Failed to clone SDK repository {url}: {reason}")]
    #[diagnostic(
        code(flutterstrap::git::clone_failed),
        help("Check network access and the repository URL (FLUTTERSTRAP_REPO_URL overrides the default)")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to check out version '{reference}': {reason}")]
    #[diagnostic(
        code(flutterstrap::git::checkout_failed),
        help("Verify the requested release tag exists on the chosen channel")
    )]
    GitCheckoutFailed { reference: String, reason: String },

    #[error("Failed to fetch tag metadata: {reason}")]
    #[diagnostic(code(flutterstrap::git::fetch_failed))]
    GitFetchFailed { reason: String },

    // Pre-flight errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(flutterstrap::config::home_dir_not_found),
        help("Pass --sdk-path (or set FLUTTERSTRAP_SDK_PATH) explicitly")
    )]
    HomeDirNotFound,

    #[error("No SDK found at '{path}'")]
    #[diagnostic(
        code(flutterstrap::sdk::not_found),
        help("Run 'flutterstrap setup' first, or point --sdk-path at an existing install")
    )]
    SdkNotFound { path: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(flutterstrap::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl FlutterstrapError {
    /// Wrap an IO error with a contextual message
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        FlutterstrapError::IoError {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias for Flutterstrap operations
pub type Result<T> = std::result::Result<T, FlutterstrapError>;
