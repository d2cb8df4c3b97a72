use anyhow::{Context, Result};
use clap::Parser;
use newsboard::config::Config;
use newsboard::dom::{page_document, Element};
use newsboard::feed::{resolve_endpoint, Fetcher};
use newsboard::ui::{Presenter, PresenterOptions};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default config file path (~/.config/newsboard/config.toml), if HOME is set.
fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("newsboard")
            .join("config.toml"),
    )
}

#[derive(Parser, Debug)]
#[command(name = "newsboard", about = "Render a categorized news feed into an HTML page")]
struct Args {
    /// Location the page is served from; decides which endpoint is used
    #[arg(long, value_name = "URL", default_value = "http://localhost/")]
    page_url: Url,

    /// News endpoint address, bypassing page-based resolution
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file (defaults to ~/.config/newsboard/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Open the written page in the default browser
    #[arg(long, requires = "output")]
    open: bool,

    /// Disable the simulated progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the page
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => match default_config_path() {
            Some(path) => Config::load(&path).context("Failed to load config file")?,
            None => {
                tracing::debug!("HOME not set, using default configuration");
                Config::default()
            }
        },
    };

    if let Some(endpoint) = args.endpoint {
        config.endpoint.base_address = Some(endpoint);
    }
    if args.no_progress {
        config.progress.enabled = false;
    }

    let endpoint = resolve_endpoint(&args.page_url, &config.endpoint)
        .context("Failed to resolve news endpoint")?;
    tracing::info!(page = %args.page_url, endpoint = %endpoint, "Loading news board");

    let mut fetcher = Fetcher::new(reqwest::Client::new(), endpoint);
    if let Some(secs) = config.request_timeout_secs {
        fetcher = fetcher.with_timeout(Duration::from_secs(secs));
    }

    let mut presenter = Presenter::new(
        Element::new("div").with_id("news-list"),
        PresenterOptions::from(&config),
    );
    let state = presenter.run(&fetcher).await;
    tracing::info!(state = state.name(), "News board settled");

    let page = page_document(
        &config.page_title,
        config.stylesheet.as_deref(),
        presenter.container(),
    );

    match args.output {
        Some(path) => {
            std::fs::write(&path, page)
                .with_context(|| format!("Failed to write page to '{}'", path.display()))?;
            eprintln!("Wrote {}", path.display());
            if args.open {
                open::that(&path)
                    .with_context(|| format!("Failed to open '{}'", path.display()))?;
            }
        }
        None => print!("{page}"),
    }

    Ok(())
}
