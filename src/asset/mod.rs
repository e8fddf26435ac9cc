//! Release asset names per platform.
//!
//! Each release ships one binary per supported platform, under a fixed
//! filename. The mapping lives in configuration rather than a static table
//! so tests can point the installer at arbitrary asset names.

use crate::platform::Platform;

/// Maps each supported platform to its release asset filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMap {
    pub linux: String,
    pub macos: String,
    pub windows: String,
}

impl AssetMap {
    /// The asset filename published for the given platform.
    pub fn name_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Linux => &self.linux,
            Platform::MacOs => &self.macos,
            Platform::Windows => &self.windows,
        }
    }
}

impl Default for AssetMap {
    fn default() -> Self {
        Self {
            linux: "treetouch-linux".to_string(),
            macos: "treetouch-macos".to_string(),
            windows: "treetouch-win.exe".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_asset_names() {
        let assets = AssetMap::default();
        assert_eq!(assets.name_for(Platform::Linux), "treetouch-linux");
        assert_eq!(assets.name_for(Platform::MacOs), "treetouch-macos");
        assert_eq!(assets.name_for(Platform::Windows), "treetouch-win.exe");
    }

    #[test]
    fn test_name_for_is_total() {
        let assets = AssetMap::default();
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            assert!(!assets.name_for(platform).is_empty());
        }
    }

    #[test]
    fn test_custom_asset_names() {
        let assets = AssetMap {
            linux: "tool-x86_64-unknown-linux-gnu".to_string(),
            macos: "tool-aarch64-apple-darwin".to_string(),
            windows: "tool.exe".to_string(),
        };
        assert_eq!(assets.name_for(Platform::MacOs), "tool-aarch64-apple-darwin");
    }
}
