use std::process::ExitCode;

use tracing::{error, info, warn};

use sample_app::{Config, WebServer};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let (mut config, found) = match Config::load_or_default(CONFIG_PATH) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_env_overrides();
    let generated_secret = config.ensure_secret_key();

    if config.server.debug {
        config.logging.level = "debug".to_string();
    }

    // Initialize logging
    if let Err(e) = sample_app::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        sample_app::logging::init_console_only(&config.logging.level);
    }

    if !found {
        warn!("{CONFIG_PATH} not found. Using default configuration.");
    }
    if generated_secret {
        warn!("No secret key configured; generated an ephemeral one. Sessions will not survive a restart.");
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    info!("sample-app starting");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let server = match WebServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Web server error: {e}");
            ExitCode::FAILURE
        }
    }
}
