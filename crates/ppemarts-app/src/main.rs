//! PPE Marts binary - composition root.
//!
//! 1. Load `.env` and the TOML configuration
//! 2. Install the tracing subscriber
//! 3. Either print an offline requirements report (`calc`) or build the
//!    assistant and serve the HTTP API (`serve`, the default)

mod cli;

use std::sync::Arc;

use clap::Parser;

use ppemarts_api::routes;
use ppemarts_api::state::AppState;
use ppemarts_calc::Calculator;
use ppemarts_chat::{CompletionService, OpenAiClient};
use ppemarts_core::{EquipmentKey, PpeConfig, Preset};

use cli::{CliArgs, Command};

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

/// Print a requirements report for the given inputs.
fn run_calc(
    config: &PpeConfig,
    workers: u32,
    days: u32,
    preset: Option<Preset>,
    items: &[EquipmentKey],
) -> Result<(), Box<dyn std::error::Error>> {
    let preset = Command::effective_preset(preset, items);
    let calculator = Calculator::new(&config.calculator);
    let selection = Calculator::selection(preset, items);

    let calculation = calculator.calculate(workers, days, &selection)?;
    println!(
        "{}",
        calculation.render_report(chrono::Local::now().date_naive())
    );
    Ok(())
}

/// Build the completion client if an API key is available.
fn completion_service(
    config: &PpeConfig,
) -> Result<Option<Arc<dyn CompletionService>>, Box<dyn std::error::Error>> {
    match OpenAiClient::from_env(&config.assistant)? {
        Some(client) => {
            tracing::info!(model = %client.model(), "Completion service configured");
            let service: Arc<dyn CompletionService> = Arc::new(client);
            Ok(Some(service))
        }
        None => {
            tracing::info!(
                env = %config.assistant.api_key_env,
                "No API key set, assistant will use fallback replies"
            );
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    let args = CliArgs::parse();

    // Config is read before tracing starts so its log level can apply.
    let config_file = args.resolve_config_path();
    let loaded = PpeConfig::load(&config_file);

    let log_level = args.resolve_log_level().unwrap_or_else(|| match loaded {
        Ok(ref c) => c.general.log_level.clone(),
        Err(_) => "info".to_string(),
    });
    init_tracing(&log_level);

    tracing::info!("Starting PPE Marts v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let mut config = match loaded {
        Ok(c) => {
            tracing::info!(path = %config_file.display(), "Configuration loaded");
            c
        }
        Err(e) => {
            tracing::warn!(
                path = %config_file.display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            PpeConfig::default()
        }
    };

    match args.command {
        Some(Command::Calc {
            workers,
            days,
            preset,
            ref items,
        }) => run_calc(&config, workers, days, preset, items),
        Some(Command::Serve { .. }) | None => {
            config.general.port = args.resolve_port(config.general.port);
            if let Some(host) = args.resolve_host() {
                config.general.host = host;
            }

            let completion = completion_service(&config)?;
            let state = AppState::new(config.clone(), completion);
            routes::start_server(&config, state).await?;
            Ok(())
        }
    }
}
