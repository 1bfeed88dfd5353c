use eventscout::config::env_loader::load_config;
use eventscout::extractor::Extractor;
use eventscout::search::api::SearchAPI;
use eventscout::tracing::{setup_loki, shutdown_loki};
use itertools::Itertools;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;
    let config = load_config();

    let exit_code = match SearchAPI::search(
        &config.search_config,
        config.debug_config.print_raw_response,
    )
    .await
    {
        Ok(results) => {
            let events = Extractor::default().extract(&results);

            info!("Parsed {} events", events.len());

            println!("PARSED EVENTS:\n");
            if !events.is_empty() {
                println!("{}\n---", events.iter().join("\n---\n"));
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Search failed: {}", e);
            ExitCode::FAILURE
        }
    };

    shutdown_loki(loki).await;

    exit_code
}
