mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CheckOutcome;
use typenv_core::config::ObservabilityConfig;
use typenv_core::observability;
use typenv_core::{EnvError, EnvSource, ProcessEnv};

/// Logging config from `source`, falling back to the defaults when a key is
/// unusable; the error is handed back so it can be logged once tracing is up.
fn observability_config<S: EnvSource>(source: &S) -> (ObservabilityConfig, Option<EnvError>) {
    match ObservabilityConfig::from_source(source) {
        Ok(cfg) => (cfg, None),
        Err(e) => (ObservabilityConfig::default(), Some(e)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (obs, obs_err) = observability_config(&ProcessEnv);
    observability::init_tracing(&obs);
    if let Some(e) = obs_err {
        tracing::warn!(error = %e, "invalid logging configuration, using defaults");
    }

    match cli.command {
        Commands::Get { var, pretty } => {
            let value = commands::get(&var, &ProcessEnv)?;
            let out = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", out);
        }
        Commands::Check { var } => match commands::check(&var, &ProcessEnv)? {
            CheckOutcome::Valid(name) => println!("ok: {} is a valid {:?}", name, var.kind),
            CheckOutcome::Unset => {
                tracing::info!(name = %var.name, "variable unset, default applies");
                println!("ok: {} is unset", var.name);
            }
        },
    }
    Ok(())
}
