//! HTTP client that follows release-asset redirects itself.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Response};
use std::io::Write;

use super::redirect::{MAX_REDIRECT_HOPS, RedirectStep, next_step};
use crate::error::FetchError;

/// HTTP client for fetching release assets.
///
/// Redirects are followed manually so the hop count stays bounded; the
/// wrapped reqwest Client must be built with its own redirect policy
/// disabled.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Fetches `url`, following up to [`MAX_REDIRECT_HOPS`] redirects, and
    /// streams the response body into the writer produced by `create_writer`.
    ///
    /// The writer is created only once a success status has arrived, so
    /// callers can treat writer creation as the signal that payload bytes
    /// are coming. Returns the number of bytes written.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(&self, url: &str, create_writer: F) -> Result<u64>
    where
        W: Write,
        F: Fn() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let mut url = url.to_string();

        for _hop in 0..=MAX_REDIRECT_HOPS {
            let response = self.client.get(&url).send().await.map_err(network_error)?;

            match next_step(&response, &url)? {
                RedirectStep::Deliver => return stream_body(response, &create_writer).await,
                RedirectStep::Follow(next_url) => {
                    debug!("Redirected to {}", next_url);
                    url = next_url;
                }
            }
        }

        Err(FetchError::TooManyRedirects(MAX_REDIRECT_HOPS).into())
    }
}

/// Streams a success response into a freshly created writer.
async fn stream_body<W, F>(mut response: Response, create_writer: &F) -> Result<u64>
where
    W: Write,
    F: Fn() -> Result<W>,
{
    let mut writer = create_writer()?;
    let mut downloaded_bytes: u64 = 0;

    while let Some(chunk) = response.chunk().await.map_err(network_error)? {
        writer
            .write_all(&chunk)
            .context("Failed to write chunk to file")?;
        downloaded_bytes += chunk.len() as u64;
    }

    debug!(
        "Downloaded {:.2} MB",
        downloaded_bytes as f64 / (1024.0 * 1024.0)
    );

    Ok(downloaded_bytes)
}

/// Wraps a transport failure in the network error kind.
fn network_error(error: reqwest::Error) -> anyhow::Error {
    FetchError::Network(error.to_string()).into()
}
