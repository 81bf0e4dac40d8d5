mod catalog;
mod cli;
mod config;
mod domain;
mod favorites;
mod indicator;
mod pages;
mod render;
mod view_state;

use std::path::Path;

use catalog::CatalogClient;
use clap::Parser;
use config::Config;
use favorites::FavoritesStore;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

type GutenshelfResult<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> GutenshelfResult<()> {
    // Initialize tracing (logs). Respect RUST_LOG if set, default to info for our crate and warn for deps.
    let default_filter = format!("{}=info,reqwest=warn,h2=warn", env!("CARGO_PKG_NAME"));
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish()
        .with(ErrorLayer::default())
        .init();

    // Load environment variables from .env files
    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    };
    let config = Config::load();
    match config.validate() {
        Ok(_) => {}
        Err(e) => {
            return Err(anyhow::anyhow!(e));
        }
    }

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let client = CatalogClient::new(&config.catalog_base_url)?;
    let mut wishlist = FavoritesStore::load(&config.wishlist_path);
    tracing::info!(
        catalog = %config.catalog_base_url,
        wishlist = %config.wishlist_path.display(),
        favorites = wishlist.len(),
        "configured catalog browser"
    );

    match cli.command {
        cli::Command::List => pages::list::run(&client, &mut wishlist).await?,
        cli::Command::Wishlist => pages::wishlist::run(&client, &mut wishlist).await?,
        cli::Command::Detail { id } => pages::detail::run(&client, &wishlist, id).await?,
    }
    Ok(())
}
