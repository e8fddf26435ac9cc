//! Bounded redirect handling for release downloads.
//!
//! GitHub serves release assets through one or more redirects to a CDN, so
//! the client follows hops itself and keeps the count bounded instead of
//! delegating to an open-ended follow policy.

use anyhow::{Context, Result, anyhow};
use reqwest::{Response, StatusCode, Url, header};

use crate::error::FetchError;

/// Maximum redirect hops before a download is abandoned.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// What to do with a response while following a download.
#[derive(Debug, PartialEq)]
pub enum RedirectStep {
    /// 200; the body is the asset
    Deliver,
    /// 301 or 302; retry at the resolved URL
    Follow(String),
}

/// Classifies a response status, resolving the next URL for redirects.
///
/// Only 301 and 302 are treated as redirects; release hosts emit nothing
/// else. Any other non-success status terminates the download.
pub fn next_step(response: &Response, current_url: &str) -> Result<RedirectStep> {
    match response.status() {
        StatusCode::OK => Ok(RedirectStep::Deliver),
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => {
            let location = response
                .headers()
                .get(header::LOCATION)
                .ok_or_else(|| anyhow!("Redirect response is missing a Location header"))?
                .to_str()
                .context("Redirect Location header is not valid UTF-8")?;
            Ok(RedirectStep::Follow(resolve_location(current_url, location)?))
        }
        status => Err(FetchError::DownloadFailed(status).into()),
    }
}

/// Resolves a Location header value against the URL that produced it.
/// Handles both absolute and relative targets.
fn resolve_location(current_url: &str, location: &str) -> Result<String> {
    let base = Url::parse(current_url)
        .with_context(|| format!("Invalid download URL: {}", current_url))?;
    let next = base
        .join(location)
        .with_context(|| format!("Invalid redirect target: {}", location))?;
    Ok(next.to_string())
}
