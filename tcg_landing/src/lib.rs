//! # tcg-landing
//!
//! Command-line front-end for the [`tcg_page`] renderer: merges the config
//! file with flags, checks the image directory, writes the page and audits
//! rendered documents.
//!
//! ```bash
//! tcg-landing render --out dist/index.html --assets-dir dist/assets
//! tcg-landing render --placeholders --out -
//! tcg-landing check dist/index.html
//! tcg-landing content > content.json
//! ```

pub mod args;
pub mod asset_dir;
pub mod commands;
pub mod config;

pub use args::Cli;
pub use config::{ConfigError, LandingConfig};
