//! Stories command - Prints the static story listing.

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

/// Execute the stories command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config);

    tracing::info!("Fetching stories...");
    let response = services.stories().list_stories().await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    services.shutdown().await;
    Ok(())
}
