//! Error types for shell setup.

use thiserror::Error;

/// Errors raised while wiring up the shell.
///
/// Content failures (network, TLS, navigation) never show up here; the web
/// engine owns those.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Native window could not be created
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// Native web view could not be created
    #[error("web view creation failed: {0}")]
    WebViewCreation(String),

    /// Native web view rejected new bounds
    #[error("web view bounds update failed: {0}")]
    WebViewBounds(String),

    /// Layout tree operation failed
    #[error("layout error: {0}")]
    Layout(#[from] taffy::TaffyError),

    /// Async runtime for the reachability probe could not start
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result alias used across the shell.
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_failure_is_not_reported_as_creation() {
        let err = ShellError::WebViewBounds("no parent".to_string());
        assert_eq!(err.to_string(), "web view bounds update failed: no parent");
        assert!(!err.to_string().contains("creation"));
    }
}
