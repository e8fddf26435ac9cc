use crate::http::HttpClient;
use crate::runtime::Runtime;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Downloads a file from a URL straight to its destination path.
///
/// The destination is only created once the server has answered with a
/// success status, and a partially written file is removed again when
/// streaming fails, so no truncated binary is left behind.
#[tracing::instrument(skip(runtime, dest, http_client))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    url: &str,
    dest: &Path,
    http_client: &HttpClient,
) -> Result<()> {
    info!("Downloading {} to {:?}...", url, dest);

    let dest = dest.to_path_buf();
    let created = AtomicBool::new(false);

    let result = http_client
        .download_file(url, || {
            let writer = runtime
                .create_file(&dest)
                .with_context(|| format!("Failed to create file at {:?}", dest))?;
            created.store(true, Ordering::SeqCst);
            Ok(writer)
        })
        .await;

    match result {
        Ok(bytes) => {
            debug!("Wrote {} bytes to {:?}", bytes, dest);
            info!("Download complete.");
            Ok(())
        }
        Err(err) => {
            if created.load(Ordering::SeqCst) {
                if let Err(remove_err) = runtime.remove_file(&dest) {
                    warn!("Could not remove partial file {:?}: {}", dest, remove_err);
                }
            }
            Err(err)
        }
    }
}
