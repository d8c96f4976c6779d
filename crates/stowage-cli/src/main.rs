//! Stowage CLI — fetch stored objects and list orders.
//!
//! Storage is configured with STORAGE_BACKEND, S3_REGION (or AWS_REGION),
//! S3_ENDPOINT and LOCAL_STORAGE_PATH. The orders API uses STOWAGE_API_URL
//! and STOWAGE_API_KEY.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use stowage_cli::{fetch_object, init_tracing};
use stowage_client::OrderClient;
use stowage_core::Config;
use stowage_storage::{create_storage, ObjectFetcher};

#[derive(Parser)]
#[command(name = "stowage", about = "Stowage object and orders CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download an object into a temporary file
    Fetch {
        /// Bucket holding the object (defaults to S3_BUCKET)
        #[arg(long)]
        bucket: Option<String>,
        /// Object key
        #[arg(long)]
        key: String,
        /// Keep the downloaded file at this path
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
    /// List orders
    Orders {
        /// Answer from the built-in stub instead of calling the API
        #[arg(long)]
        stub: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            bucket,
            key,
            output,
        } => {
            let config = Config::from_env().context("Failed to load storage configuration")?;
            let bucket = bucket
                .or_else(|| config.s3_bucket().map(String::from))
                .context("No bucket given. Pass --bucket or set S3_BUCKET")?;
            let storage = create_storage(&config)
                .await
                .context("Failed to create storage backend")?;
            let fetcher = ObjectFetcher::new(storage);

            let summary = fetch_object(&fetcher, &bucket, &key, output.as_deref()).await?;
            print_json(&summary)?;
        }
        Commands::Orders { stub } => {
            let client = OrderClient::new(stub).context(
                "Failed to create orders client. Set STOWAGE_API_URL (or API_URL)",
            )?;
            let orders = client.list_orders().await?;
            print_json(&orders)?;
        }
    }

    Ok(())
}
