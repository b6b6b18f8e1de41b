//! Backend selection and its configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use assetfs_core::Error;

pub const USE_LOCAL_VAR: &str = "ASSETFS_USE_LOCAL";
pub const LOCAL_ROOT_VAR: &str = "ASSETFS_LOCAL_ROOT";
pub const PREFIX_VAR: &str = "ASSETFS_PREFIX";

/// Which store answers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The compiled-in asset table
    #[default]
    Embedded,
    /// The real filesystem under the configured root
    Local,
}

impl Backend {
    pub fn from_use_local(use_local: bool) -> Self {
        if use_local {
            Backend::Local
        } else {
            Backend::Embedded
        }
    }

    pub fn is_local(self) -> bool {
        self == Backend::Local
    }
}

/// How an application wants its assets served.
///
/// Deserializes from JSON like:
/// ```json
/// {"use_local": true, "local_root": "server", "prefix": "/static"}
/// ```
/// Every field is optional; the default serves embedded assets from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Serve from disk instead of the embedded table.
    pub use_local: bool,
    /// Directory that recorded local paths are relative to.
    pub local_root: PathBuf,
    /// Sub-tree to expose as the root, if any.
    pub prefix: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            use_local: false,
            local_root: PathBuf::from("."),
            prefix: None,
        }
    }
}

impl AssetsConfig {
    pub fn backend(&self) -> Backend {
        Backend::from_use_local(self.use_local)
    }

    /// Read `ASSETFS_USE_LOCAL`, `ASSETFS_LOCAL_ROOT` and `ASSETFS_PREFIX`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`AssetsConfig::from_env`] but with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(value) = lookup(USE_LOCAL_VAR) {
            config.use_local = parse_flag(USE_LOCAL_VAR, &value)?;
        }
        if let Some(root) = lookup(LOCAL_ROOT_VAR).filter(|v| !v.is_empty()) {
            config.local_root = PathBuf::from(root);
        }
        config.prefix = lookup(PREFIX_VAR).filter(|v| !v.is_empty());
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config {
            message: format!("{} must be a boolean, got '{}'", name, other),
        }),
    }
}
