//! Configuration file support for tcg-landing.
//!
//! Loads an optional `tcg-landing.toml` from the working directory, or the
//! file given with `--config`. Flags on the command line win over the file.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tcg_page::assets::AssetError;
use tcg_page::{AssetManifest, AssetName};
use thiserror::Error;

/// File looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "tcg-landing.toml";

/// Where `render` writes when neither flag nor config says otherwise.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Base URL images are served from by default, relative to the page.
pub const DEFAULT_BASE_URL: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [assets.overrides] entry: {0}")]
    Asset(#[from] AssetError),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub output: OutputConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file for `render`, `-` for stdout
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Render labeled boxes instead of images
    pub placeholders: bool,
    /// Prefix for every image URL
    pub base_url: Option<String>,
    /// Local directory the images are published from. Slots whose file is
    /// missing there are left empty.
    pub dir: Option<PathBuf>,
    /// Per-image URL overrides, keyed by logical asset name
    pub overrides: BTreeMap<String, String>,
}

impl LandingConfig {
    /// Load from an explicit path, or from [`DEFAULT_CONFIG_FILE`] when it exists.
    ///
    /// An explicit path that can't be read is an error; a missing default
    /// file just means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl AssetsConfig {
    /// Manifest for `base_url` with the overrides applied on top.
    pub fn manifest(&self, base_url: Option<&str>) -> Result<AssetManifest, ConfigError> {
        let base = base_url
            .or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);
        let mut manifest = AssetManifest::with_base(base);

        for (name, url) in &self.overrides {
            let name: AssetName = name.parse()?;
            manifest.insert(name, url.clone());
        }
        Ok(manifest)
    }
}
