//! tcg-landing binary entry point

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tcg_landing::args::{Cli, Command};
use tcg_landing::commands::{self, Output};
use tcg_landing::LandingConfig;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the page or the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = LandingConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => {
            let mode = commands::asset_mode(&args.assets, &config)?;
            let output = commands::output_target(args.out, &config);
            let html = commands::render(&mode, &output)?;
            if output == Output::Stdout {
                std::io::stdout().write_all(html.as_bytes())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            let input = commands::check_input(&args, &config)?;
            let (audit, problems) = commands::check(&input)?;

            if problems.is_empty() {
                println!(
                    "ok: {} nav links, {} features, {} packs, {} releases, {} info columns, {} footer links",
                    audit.nav_links,
                    audit.features,
                    audit.pack_prices.len(),
                    audit.release_dates.len(),
                    audit.info_columns,
                    audit.footer_links,
                );
                Ok(ExitCode::SUCCESS)
            } else {
                for problem in &problems {
                    println!("problem: {}", problem);
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Content => {
            println!("{}", commands::content_json()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
