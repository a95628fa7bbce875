/* src/site/src/main.rs */

mod app;
mod components;
mod config;
mod content;
mod pages;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{SiteConfig, apply_env_overrides, find_site_config, load_site_config};

#[derive(Parser)]
#[command(name = "saminvest-site", about = "Saminvest public site and admin panel", version)]
struct Cli {
  /// Path to site.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site (default)
  Serve,
  /// Load config, catalogs, content and templates, then exit
  Check,
}

fn init_tracing() {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<SiteConfig> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_site_config(&cwd)?
    }
  };
  let mut config = load_site_config(&path)?;
  apply_env_overrides(&mut config, |k| std::env::var(k).ok())?;
  tracing::info!(path = %path.display(), "config loaded");
  Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();
  let config = resolve_config(cli.config)?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => {
      let router = app::build_router(&config)?;
      let addr = config.listen_addr();
      let listener =
        tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
      let port = listener.local_addr()?.port();
      tracing::info!(%addr, locales = ?config.i18n.locales, "site running on http://localhost:{port}");
      axum::serve(listener, router).await?;
    }
    Command::Check => {
      app::build_site(&config)?;
      tracing::info!(
        locales = ?config.i18n.locales,
        default = %config.i18n.default,
        chat = config.chat.is_some(),
        "site configuration is valid"
      );
    }
  }
  Ok(())
}
