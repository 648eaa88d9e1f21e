use clap::Parser;
use tracing::info;

use builder::cli::{run, Cli};
use builder::config::Config;
use builder::errors::AppError;
use builder::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration first (fails on unreadable paths)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", AppError::configuration(e).to_json());
            std::process::exit(1);
        }
    };

    logging::init(cli.log_format, &config.rust_log);
    info!("Starting résumé builder v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli, config).await {
        eprintln!("{}", e.to_json());
        std::process::exit(1);
    }
}
