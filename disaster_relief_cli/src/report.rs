//! Illustrative query: the two most recent Tennessee declarations from the
//! current month, printed for inspection.

use anyhow::Result;
use disaster_relief_lib::{Client, DeclarationQuery};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fema_report=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let query = DeclarationQuery::default()
        .with_max_count(2)
        .with_state("TN")
        .with_current_month();

    let client = Client::new();
    let data = client.get_disaster_declarations(&query).await?;

    println!("Data returned:\n{:#?}", data);

    Ok(())
}
