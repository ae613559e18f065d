use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tokio::io::AsyncReadExt;
use tracing::{Dispatch, warn};
use weather_api_core::{Config, OpenWeatherProvider, WeatherTool, config::BASE_URL_ENV, error_json};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather_api", version, about = "OpenWeatherMap lookup tool")]
pub struct Cli {
    /// Raise log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read `{"params": ..., "secrets": ...}` from stdin and print the result JSON.
    Run,

    /// Print the tool definition consumed by the host.
    Definition,

    /// Store a provider base URL override in the local config file.
    Configure {
        /// Base URL of an OpenWeatherMap-compatible API; omit to reset to the public endpoint.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print the path of the local config file.
    ConfigPath,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self, dispatch: Dispatch) -> Result<()> {
        match self.command.unwrap_or(Command::Run) {
            Command::Run => {
                let mut bytes = Vec::new();
                let input = tokio::io::stdin().read_to_end(&mut bytes).await.map(|_| bytes);

                let line =
                    respond(input, Config::load(), std::env::var(BASE_URL_ENV).ok(), dispatch)
                        .await;
                println!("{line}");
            }
            Command::Definition => {
                let json = serde_json::to_string_pretty(&weather_api_core::definition())
                    .context("Failed to serialize tool definition")?;
                println!("{json}");
            }
            Command::Configure { base_url } => {
                let mut config = Config::load()?;
                config.base_url = base_url;
                config.save()?;
                println!(
                    "Saved {} (base URL: {})",
                    Config::config_file_path()?.display(),
                    config.effective_base_url()
                );
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

/// Produce the single stdout line for one `run` invocation.
///
/// Unreadable input renders as an `Invalid input` error; a config that fails to
/// load is logged and replaced by the defaults.
pub async fn respond(
    input: io::Result<Vec<u8>>,
    config: Result<Config>,
    env_base_url: Option<String>,
    dispatch: Dispatch,
) -> String {
    let input = match input
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()))
    {
        Ok(text) => text,
        Err(e) => return error_json(format!("Invalid input: {e}")),
    };

    let config = config
        .unwrap_or_else(|e| {
            tracing::dispatcher::with_default(&dispatch, || {
                warn!("Failed to load config, using defaults: {e:#}");
            });
            Config::default()
        })
        .with_env_override(env_base_url);

    let provider = OpenWeatherProvider::with_base_url(config.effective_base_url());
    let tool = WeatherTool::new(provider).with_dispatch(dispatch);

    tool.run_input(&input).await
}
