//! Subcommand handlers.
//!
//! Each handler returns what it produced; printing and exit codes are left
//! to the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tcg_page::audit::{DocumentAudit, Expectations, audit_document};
use tcg_page::{AssetMode, PageContent, render_page};
use tracing::{debug, info};

use crate::args::{AssetArgs, CheckArgs};
use crate::asset_dir::prune_missing;
use crate::config::{DEFAULT_OUTPUT, LandingConfig};

/// Where rendered HTML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::File(path)
        }
    }
}

/// Flags and config merged into the asset mode for this run.
pub fn asset_mode(args: &AssetArgs, config: &LandingConfig) -> Result<AssetMode> {
    if args.placeholders || config.assets.placeholders {
        debug!("placeholder mode");
        return Ok(AssetMode::Placeholder);
    }

    let mut manifest = config.assets.manifest(args.base_url.as_deref())?;

    let dir = args.assets_dir.as_ref().or(config.assets.dir.as_ref());
    if let Some(dir) = dir {
        let dropped = prune_missing(&mut manifest, dir);
        if dropped > 0 {
            info!("{} image(s) missing from {}", dropped, dir.display());
        }
    }
    Ok(AssetMode::Resolved(manifest))
}

/// Resolve the output target: flag, then config, then [`DEFAULT_OUTPUT`].
pub fn output_target(out: Option<PathBuf>, config: &LandingConfig) -> Output {
    let path = out
        .or_else(|| config.output.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    Output::from_path(path)
}

/// Render the page. Returns the HTML and writes it when the target is a file.
pub fn render(mode: &AssetMode, output: &Output) -> Result<String> {
    let html = render_page(&PageContent::default(), mode);

    if let Output::File(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, &html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {} bytes to {}", html.len(), path.display());
    }
    Ok(html)
}

/// What `check` audits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInput {
    /// A page already on disk
    File(PathBuf),
    /// A fresh render in the given mode
    Render(AssetMode),
}

/// Pick the check input. Asset flags and config only matter for a fresh
/// render, so a broken asset setup never blocks checking an existing file.
pub fn check_input(args: &CheckArgs, config: &LandingConfig) -> Result<CheckInput> {
    match &args.file {
        Some(path) => Ok(CheckInput::File(path.clone())),
        None => Ok(CheckInput::Render(asset_mode(&args.assets, config)?)),
    }
}

/// Audit the input against the page as designed.
pub fn check(input: &CheckInput) -> Result<(DocumentAudit, Vec<String>)> {
    let html = match input {
        CheckInput::File(path) => read_page(path)?,
        CheckInput::Render(mode) => render_page(&PageContent::default(), mode),
    };

    let audit = audit_document(&html);
    let problems = audit.problems(&Expectations::default());
    Ok((audit, problems))
}

fn read_page(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// The display content as pretty JSON.
pub fn content_json() -> Result<String> {
    serde_json::to_string_pretty(&PageContent::default()).context("failed to serialize content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetsConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn placeholder_flag_wins() {
        let args = AssetArgs {
            placeholders: true,
            ..Default::default()
        };
        let mode = asset_mode(&args, &LandingConfig::default()).unwrap();
        assert_eq!(mode, AssetMode::Placeholder);
    }

    #[test]
    fn placeholder_config_applies_without_flag() {
        let config = LandingConfig {
            assets: AssetsConfig {
                placeholders: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mode = asset_mode(&AssetArgs::default(), &config).unwrap();
        assert_eq!(mode, AssetMode::Placeholder);
    }

    #[test]
    fn output_falls_back_to_default() {
        assert_eq!(
            output_target(None, &LandingConfig::default()),
            Output::File(PathBuf::from(DEFAULT_OUTPUT))
        );
        assert_eq!(
            output_target(Some(PathBuf::from("-")), &LandingConfig::default()),
            Output::Stdout
        );
    }

    #[test]
    fn render_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site/public/index.html");

        let html = render(&AssetMode::Placeholder, &Output::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn fresh_render_passes_check() {
        let (audit, problems) = check(&CheckInput::Render(AssetMode::default())).unwrap();
        assert!(problems.is_empty(), "{:?}", problems);
        assert_eq!(audit.info_columns, 4);
    }

    #[test]
    fn file_check_ignores_asset_config() {
        let dir = TempDir::new().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, render(&AssetMode::Placeholder, &Output::Stdout).unwrap()).unwrap();

        let config = LandingConfig::parse("[assets.overrides]\npack-mythic = \"x.webp\"\n").unwrap();
        let mut args = CheckArgs {
            file: Some(page.clone()),
            assets: AssetArgs::default(),
        };

        let input = check_input(&args, &config).unwrap();
        assert_eq!(input, CheckInput::File(page));
        let (_, problems) = check(&input).unwrap();
        assert!(problems.is_empty(), "{:?}", problems);

        // Without a file the same config is still rejected
        args.file = None;
        assert!(check_input(&args, &config).is_err());
    }

    #[test]
    fn content_json_lists_packs() {
        let json = content_json().unwrap();
        assert!(json.contains("\"Starter Pack\""));
        assert!(json.contains("\"$49.99\""));
    }
}
