use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use pixelrover::api::SearchClient;
use pixelrover::config::{Config, API_KEY_ENV};
use pixelrover::logging::init_tracing;
use pixelrover::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "pixelrover", version, about = "Terminal image-search gallery")]
struct Args {
    /// Initial search query, submitted on startup.
    query: Option<String>,

    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hits per page, overriding the config file (3..=200).
    #[arg(long)]
    per_page: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(per_page) = args.per_page {
        config.search.per_page = per_page;
        config.validate().context("invalid --per-page value")?;
    }

    let Some(api_key) = config.api_key() else {
        bail!(
            "no API key configured; set {} or add `key` under [api] in {}",
            API_KEY_ENV,
            Config::config_path().display()
        );
    };

    let client =
        SearchClient::new(&config.api, api_key).context("failed to build search client")?;

    tracing::info!(per_page = config.search.per_page, "starting pixelrover");
    runtime::run(&config, client, args.query).context("terminal UI failed")?;
    Ok(())
}
