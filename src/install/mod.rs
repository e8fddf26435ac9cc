use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::{
    download::download_file, error::FetchError, github::release_asset_url, runtime::Runtime,
};

pub mod config;
pub mod paths;

pub use config::{Config, InstallOptions};
use paths::{bin_dir, binary_path};

const EXECUTABLE_MODE: u32 = 0o755;

/// Resolves options against the environment and installs the binary.
#[tracing::instrument(skip(runtime, options))]
pub async fn install<R: Runtime>(runtime: R, options: InstallOptions) -> Result<()> {
    let config = Config::new(&runtime, options)?;
    run(&runtime, &config).await
}

/// Installs the release binary described by an already resolved config.
///
/// Creates the bin directory, streams the platform asset into place and
/// marks it executable on non-Windows platforms.
#[tracing::instrument(skip(runtime, config))]
pub async fn run<R: Runtime>(runtime: &R, config: &Config) -> Result<()> {
    let asset = config.assets.name_for(config.platform);
    let url = release_asset_url(&config.download_base, &config.repo, &config.version, asset);

    let bin = bin_dir(&config.install_root);
    runtime
        .create_dir_all(&bin)
        .with_context(|| format!("Failed to create bin directory at {:?}", bin))?;

    let dest = binary_path(&config.install_root, config.platform);

    println!(" downloading {} {}", config.repo, config.version);

    download_file(runtime, &url, &dest, &config.client).await?;

    if !config.platform.is_windows() {
        mark_executable(runtime, &dest)?;
    }

    println!(
        "   installed {} {} {}",
        config.repo,
        config.version,
        dest.display()
    );

    Ok(())
}

fn mark_executable<R: Runtime>(runtime: &R, dest: &Path) -> Result<()> {
    info!("Marking {:?} executable", dest);
    runtime
        .set_permissions(dest, EXECUTABLE_MODE)
        .map_err(|e| FetchError::Permission(format!("{:#}", e)))?;
    Ok(())
}
