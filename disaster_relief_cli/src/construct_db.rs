//! End-to-end loader: read settings, connect, ensure the table, fetch the
//! declarations, and insert them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use disaster_relief_lib::{Client, DeclarationQuery, Settings, Store};

#[derive(Parser)]
#[command(name = "construct-db")]
#[command(about = "Load FEMA disaster declarations into Postgres")]
struct Cli {
    /// Path to the JSON connection-settings file
    #[arg(long, default_value = "./settings.json")]
    filepath: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("construct_db=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.filepath)?;
    let store = Store::connect(&settings).await?;

    // Table creation is the one warn-and-continue failure.
    if let Err(e) = store.ensure_schema().await {
        tracing::warn!("Unable to perform the FEMA table creation: {}", e);
    }

    let client = Client::new();
    let data = client
        .get_disaster_declarations(&DeclarationQuery::default().with_max_count(10_000))
        .await?;

    let inserted = store
        .insert_declarations(&data.disaster_declaration_summaries)
        .await?;
    tracing::info!("Inserted {} declarations", inserted);

    Ok(())
}
