//! `artmarket` CLI entry-point.
//!
//! Available sub-commands:
//! - `migrate`     — apply the embedded schema.
//! - `artworks`    — list every artwork.
//! - `artwork`     — show one artwork in detail.
//! - `charity`     — show a charity and the artworks raising money for it.
//! - `artists`     — list artists.
//! - `charities`   — list charities.
//! - `add-artwork` — list a new artwork for sale.
//! - `sell`        — mark artworks as sold.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use db::{models::NewArtwork, Repository};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "artmarket",
    about = "Query and update the art marketplace database",
    version
)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://artmarket.db")]
    database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the embedded schema migrations.
    Migrate,
    /// List every artwork with its artist and cause.
    Artworks,
    /// Show a single artwork.
    Artwork { id: i64 },
    /// Show a charity profile with its artworks.
    Charity { id: i64 },
    /// List users who are artists.
    Artists,
    /// List users who are charities.
    Charities,
    /// List a new artwork for sale.
    AddArtwork {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        artist_id: i64,
        #[arg(long)]
        cause_id: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Mark one or more artworks as sold.
    Sell {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let pool = db::pool::create_pool(&cli.database_url, cli.max_connections)
        .await
        .with_context(|| format!("failed to connect to {}", cli.database_url))?;

    let repo = Repository::new(pool);

    match cli.command {
        Command::Migrate => {
            db::pool::run_migrations(repo.pool())
                .await
                .context("migration failed")?;
            info!("Migrations applied successfully");
        }
        Command::Artworks => print_json(&repo.list_artworks().await?)?,
        Command::Artwork { id } => print_json(&repo.get_artwork_detail(id).await?)?,
        Command::Charity { id } => print_json(&repo.get_charity_profile(id).await?)?,
        Command::Artists => print_json(&repo.list_artists().await?)?,
        Command::Charities => print_json(&repo.list_charities().await?)?,
        Command::AddArtwork {
            name,
            price,
            artist_id,
            cause_id,
            description,
            image,
        } => {
            let outcome = repo
                .create_artwork(NewArtwork {
                    name,
                    description,
                    price,
                    image,
                    artist_id,
                    cause_id,
                    is_available: None,
                })
                .await;
            match outcome.into_result() {
                Ok(artwork) => print_json(&artwork)?,
                Err(err) => bail!("artwork was not created: {err}"),
            }
        }
        Command::Sell { ids } => {
            let updated = repo.mark_sold(&ids).await?;
            info!("Marked {updated} of {} artworks as sold", ids.len());
            print_json(&serde_json::json!({ "updated": updated }))?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
