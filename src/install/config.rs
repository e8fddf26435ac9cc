use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, redirect};
use std::path::PathBuf;
use std::time::Duration;

use crate::asset::AssetMap;
use crate::github::{DEFAULT_DOWNLOAD_BASE, GitHubRepo};
use crate::http::HttpClient;
use crate::install::paths::default_install_root;
use crate::platform::Platform;
use crate::runtime::Runtime;

/// Release tag installed when neither the flag nor the environment names one.
pub const DEFAULT_VERSION: &str = "v0.1.0";

/// Repository the binary is fetched from by default.
pub const DEFAULT_REPO: &str = "HashimCodeDev/treetouch";

/// Environment variable overriding the release tag.
pub const VERSION_ENV_VAR: &str = "TREETOUCH_VERSION";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Caller-facing knobs for an install. Unset fields fall back to defaults.
#[derive(Debug, Default)]
pub struct InstallOptions {
    pub platform: Option<String>,
    pub version: Option<String>,
    pub repo: Option<String>,
    pub install_root: Option<PathBuf>,
    pub download_base: Option<String>,
}

/// Fully resolved configuration for one install run.
#[derive(Debug)]
pub struct Config {
    pub platform: Platform,
    pub version: String,
    pub repo: GitHubRepo,
    pub assets: AssetMap,
    pub download_base: String,
    pub install_root: PathBuf,
    pub client: HttpClient,
}

impl Config {
    /// Resolves options into a ready-to-run configuration.
    ///
    /// The platform is resolved first, so an unsupported platform fails
    /// before the environment or filesystem is touched. The release tag is
    /// taken from the `--tag` flag, then `TREETOUCH_VERSION`, then
    /// [`DEFAULT_VERSION`].
    pub fn new<R: Runtime>(runtime: &R, options: InstallOptions) -> Result<Self> {
        let platform = match options.platform {
            Some(tag) => tag.parse::<Platform>()?,
            None => Platform::detect()?,
        };

        let version = resolve_version(runtime, options.version);

        let repo = options
            .repo
            .as_deref()
            .unwrap_or(DEFAULT_REPO)
            .parse::<GitHubRepo>()?;

        let install_root = match options.install_root {
            Some(path) => path,
            None => default_install_root(runtime)?,
        };

        let download_base = options
            .download_base
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_BASE.to_string());

        // Redirects are followed manually with a bounded hop count
        let client = Client::builder()
            .user_agent("treetouch-install")
            .redirect(redirect::Policy::none())
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            platform,
            version,
            repo,
            assets: AssetMap::default(),
            download_base,
            install_root,
            client: HttpClient::new(client),
        })
    }
}

fn resolve_version<R: Runtime>(runtime: &R, flag: Option<String>) -> String {
    if let Some(version) = flag {
        return version;
    }
    if let Ok(version) = runtime.env_var(VERSION_ENV_VAR) {
        debug!("Using version {} from {}", version, VERSION_ENV_VAR);
        return version;
    }
    DEFAULT_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_mock_runtime_basics, test_root};
    use mockall::predicate::eq;
    use std::env::VarError;

    #[test]
    fn test_config_defaults() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);

        let options = InstallOptions {
            platform: Some("linux".to_string()),
            ..Default::default()
        };
        let config = Config::new(&runtime, options).unwrap();

        assert_eq!(config.platform, Platform::Linux);
        assert_eq!(config.version, DEFAULT_VERSION);
        assert_eq!(config.repo.to_string(), DEFAULT_REPO);
        assert_eq!(config.download_base, DEFAULT_DOWNLOAD_BASE);
        assert_eq!(config.install_root, test_root());
        assert_eq!(config.assets.name_for(Platform::Linux), "treetouch-linux");
    }

    #[test]
    fn test_config_version_flag_wins() {
        // No env_var expectation: the flag must short-circuit the env lookup
        let mut runtime = MockRuntime::new();
        runtime
            .expect_home_dir()
            .returning(|| Some(std::path::PathBuf::from("/home/user")));

        let options = InstallOptions {
            platform: Some("linux".to_string()),
            version: Some("v9.9.9".to_string()),
            ..Default::default()
        };
        let config = Config::new(&runtime, options).unwrap();

        assert_eq!(config.version, "v9.9.9");
    }

    #[test]
    fn test_config_version_from_env() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(VERSION_ENV_VAR))
            .returning(|_| Ok("v2.0.0".to_string()));
        runtime
            .expect_home_dir()
            .returning(|| Some(std::path::PathBuf::from("/home/user")));

        let options = InstallOptions {
            platform: Some("linux".to_string()),
            ..Default::default()
        };
        let config = Config::new(&runtime, options).unwrap();

        assert_eq!(config.version, "v2.0.0");
    }

    #[test]
    fn test_config_unsupported_platform() {
        // No expectations: an unsupported platform must fail before any
        // environment or filesystem access
        let runtime = MockRuntime::new();

        let options = InstallOptions {
            platform: Some("freebsd".to_string()),
            ..Default::default()
        };
        let err = Config::new(&runtime, options).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::UnsupportedPlatform(tag)) if tag == "freebsd"
        ));
    }

    #[test]
    fn test_config_invalid_repo() {
        // Repo is parsed before the install root, so home_dir stays untouched
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .returning(|_| Err(VarError::NotPresent));

        let options = InstallOptions {
            platform: Some("linux".to_string()),
            repo: Some("not-a-repo".to_string()),
            ..Default::default()
        };
        let err = Config::new(&runtime, options).unwrap_err();

        assert!(err.to_string().contains("Invalid repository format"));
    }

    #[test]
    fn test_config_custom_root_skips_home() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .returning(|_| Err(VarError::NotPresent));

        let options = InstallOptions {
            platform: Some("linux".to_string()),
            install_root: Some(std::path::PathBuf::from("/opt/treetouch")),
            download_base: Some("http://localhost:1234".to_string()),
            ..Default::default()
        };
        let config = Config::new(&runtime, options).unwrap();

        assert_eq!(config.install_root, std::path::PathBuf::from("/opt/treetouch"));
        assert_eq!(config.download_base, "http://localhost:1234");
    }
}
