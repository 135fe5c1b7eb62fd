//! Friendly interpretation of libgit2 errors

use git2::ErrorClass;

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &git2::Error) -> String {
    let class = err.class();
    let message = err.message().to_lowercase();

    // Check for specific error patterns in the message
    // Order matters - more specific patterns first
    if message.contains("not found") || message.contains("404") {
        "Repository not found".to_string()
    } else if message.contains("authentication") || message.contains("credentials") {
        "Authentication failed".to_string()
    } else if message.contains("could not resolve host") || message.contains("failed to resolve") {
        "Could not resolve host (check network access)".to_string()
    } else if message.contains("timed out") || message.contains("timeout") {
        "Connection timed out".to_string()
    } else if class == ErrorClass::Net {
        format!("Network error: {}", err.message())
    } else {
        err.message().to_string()
    }
}
