use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::runtime::Runtime;

/// Base name of the installed binary.
///
/// The `-bin` suffix keeps the fetched executable from shadowing the
/// `treetouch` launcher script on PATH.
pub const BINARY_BASENAME: &str = "treetouch-bin";

/// Get the default installation root directory
#[tracing::instrument(skip(runtime))]
pub fn default_install_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    Ok(home_dir.join(".treetouch"))
}

/// Get the bin directory under an installation root
pub fn bin_dir(install_root: &Path) -> PathBuf {
    install_root.join("bin")
}

/// Get the full path the downloaded binary is installed to
pub fn binary_path(install_root: &Path, platform: Platform) -> PathBuf {
    let file_name = if platform.is_windows() {
        format!("{}.exe", BINARY_BASENAME)
    } else {
        BINARY_BASENAME.to_string()
    };
    bin_dir(install_root).join(file_name)
}
