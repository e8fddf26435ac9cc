use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use treetouch_install::install::{InstallOptions, install};
use treetouch_install::runtime::RealRuntime;

/// treetouch-install - treetouch release binary fetcher
///
/// Downloads the prebuilt treetouch binary for this platform from a GitHub
/// release and installs it under the install root's bin directory.
///
/// If the TREETOUCH_VERSION environment variable is set, it selects the
/// release tag when --tag is not given.
///
/// Examples:
///   treetouch-install                   # Install the default release
///   treetouch-install --tag v0.2.0      # Install a specific release
#[derive(Parser, Debug)]
#[command(author, version = env!("TREETOUCH_INSTALL_VERSION"), about)]
struct Cli {
    /// Release tag to install (also via TREETOUCH_VERSION)
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tag: Option<String>,

    /// Install root directory (overrides defaults; also via TREETOUCH_ROOT)
    #[arg(long = "root", short = 'r', env = "TREETOUCH_ROOT", value_name = "PATH")]
    pub install_root: Option<PathBuf>,

    /// GitHub repository hosting the releases
    #[arg(long = "repo", value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Base URL release assets are downloaded from (defaults to https://github.com)
    #[arg(long = "download-base", value_name = "URL")]
    pub download_base: Option<String>,

    /// Platform to fetch the asset for (linux, macos or windows; defaults to this host)
    #[arg(long = "platform", value_name = "OS")]
    pub platform: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let options = InstallOptions {
        platform: cli.platform,
        version: cli.tag,
        repo: cli.repo,
        install_root: cli.install_root,
        download_base: cli.download_base,
    };

    install(runtime, options).await
}
