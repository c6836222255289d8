//! CLI argument definitions for the PPE Marts binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ppemarts_core::{EquipmentKey, Preset};

/// PPE Marts - product catalog, requirement calculator and safety assistant.
#[derive(Parser, Debug)]
#[command(name = "ppemarts", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP API server (default).
    Serve {
        /// Address to bind.
        #[arg(long = "host")]
        host: Option<String>,

        /// API server port.
        #[arg(short = 'p', long = "port")]
        port: Option<u16>,
    },
    /// Print a requirements report without starting the server.
    Calc {
        /// Number of workers.
        #[arg(short = 'w', long = "workers", default_value_t = 10)]
        workers: u32,

        /// Working days in the period.
        #[arg(short = 'd', long = "days", default_value_t = 22)]
        days: u32,

        /// Equipment preset: basic, full, respiratory, fall or custom.
        #[arg(long = "preset")]
        preset: Option<Preset>,

        /// Comma-separated equipment keys; implies the custom preset.
        #[arg(long = "items", value_delimiter = ',')]
        items: Vec<EquipmentKey>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PPEMARTS_CONFIG env var > ~/.ppemarts/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PPEMARTS_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > PPEMARTS_PORT env var > config file value > 3030.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(Command::Serve { port: Some(p), .. }) = self.command {
            return p;
        }
        if let Ok(val) = std::env::var("PPEMARTS_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        3030
    }

    /// Resolve the bind address. `None` keeps the config value.
    pub fn resolve_host(&self) -> Option<String> {
        match self.command {
            Some(Command::Serve { ref host, .. }) => host.clone(),
            _ => None,
        }
    }

    /// Resolve the log level. `None` keeps the config value.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

impl Command {
    /// The preset a `calc` run uses: explicit flag, else custom when items
    /// were listed, else basic.
    pub fn effective_preset(preset: Option<Preset>, items: &[EquipmentKey]) -> Preset {
        match preset {
            Some(p) => p,
            None if !items.is_empty() => Preset::Custom,
            None => Preset::Basic,
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".ppemarts").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".ppemarts").join("config.toml");
    }
    PathBuf::from("config.toml")
}
