//! Failure taxonomy for the fetch-and-install pipeline.

use reqwest::StatusCode;

/// Errors that terminate an install attempt.
///
/// Carried inside `anyhow::Error` on propagation paths and recovered with
/// `downcast_ref` where callers need to tell the kinds apart.
#[derive(Debug)]
pub enum FetchError {
    /// No prebuilt binary exists for the given OS tag
    UnsupportedPlatform(String),
    /// The release host answered with a status that is neither success nor redirect
    DownloadFailed(StatusCode),
    /// Transport-level failure (DNS, connect, reset, timeout)
    Network(String),
    /// The redirect chain exceeded the hop bound
    TooManyRedirects(usize),
    /// The downloaded binary could not be marked executable
    Permission(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::UnsupportedPlatform(tag) => {
                write!(f, "Unsupported platform: {}", tag)
            }
            FetchError::DownloadFailed(status) => {
                write!(
                    f,
                    "Failed to download binary; status code: {}",
                    status.as_u16()
                )
            }
            FetchError::Network(msg) => {
                write!(f, "Error downloading: {}", msg)
            }
            FetchError::TooManyRedirects(hops) => {
                write!(f, "Too many redirects; gave up after {} hops", hops)
            }
            FetchError::Permission(msg) => {
                write!(f, "Failed to mark binary as executable: {}", msg)
            }
        }
    }
}

impl std::error::Error for FetchError {}
