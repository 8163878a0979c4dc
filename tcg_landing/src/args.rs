//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tcg-landing")]
#[command(about = "Render and check the TCG Studios landing page as static HTML")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./tcg-landing.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to an HTML file
    Render(RenderArgs),
    /// Check a rendered page for missing sections and dangling anchors
    Check(CheckArgs),
    /// Print the page's display content as JSON
    Content,
}

/// How image slots are filled. Shared by `render` and `check`.
#[derive(Args, Debug, Default, Clone)]
pub struct AssetArgs {
    /// Render labeled placeholder boxes instead of images
    #[arg(long)]
    pub placeholders: bool,

    /// Base URL for image files
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory the images are published from; missing files leave empty slots
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file, `-` for stdout (default: dist/index.html)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub assets: AssetArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// HTML file to check; renders the page fresh when omitted.
    /// Asset flags and config only apply to the fresh render
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub assets: AssetArgs,
}
