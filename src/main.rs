use clap::Parser;
use profile_card::utils::logger;
use profile_card::{web, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting profile-card");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = web::server::run(config.addr).await {
        tracing::error!("Server failed: {}", e);
        eprintln!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
