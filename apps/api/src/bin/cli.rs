//! Interactive deliverable generator.
//!
//! Reads one request from stdin, folds in the static project-update file,
//! and prints the generated client-ready content. Startup fails if the
//! update file is missing or malformed.

use anyhow::Result;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deliverable_api::config::Config;
use deliverable_api::generation::builder::build_conversational;
use deliverable_api::generation::generator::DeliverableGenerator;
use deliverable_api::llm_client::HttpCompletionClient;
use deliverable_api::updates::load_updates;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Quiet by default; stdout belongs to the generated content
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let updates = load_updates(&config.project_data_path)?;

    let client = HttpCompletionClient::new(config.completion());
    let generator = DeliverableGenerator::new(Arc::new(client));

    println!("\nWhat would you like to generate? (e.g., 'Executive summary for client'):");

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let request = line.trim();

    if request.is_empty() {
        println!("Please enter a prompt before generating.");
        return Ok(());
    }

    let prompt = build_conversational(request, &updates);

    match generator.generate(&prompt).await {
        Ok(content) => {
            println!("\nGenerated client-ready content:\n");
            println!("{content}");
        }
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
