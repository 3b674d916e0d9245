use std::process::ExitCode;

use clap::Parser;
use dueday_app::cli::Cli;
use dueday_app::commands::{execute, render_error};
use dueday_app::error::AppResult;
use dueday_core::config::{Settings, load_config};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::{Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    let result = load_settings(&cli, &filter_handle)
        .and_then(|settings| execute(&cli, &settings, chrono::Utc::now()))
        .and_then(|report| report.render(cli.json));

    match result {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if cli.json {
                println!("{}", render_error(&err, true));
            } else {
                eprintln!("{}", render_error(&err, false));
            }
            Ok(err.exit_code())
        }
    }
}

fn load_settings(cli: &Cli, filter_handle: &FilterHandle) -> AppResult<Settings> {
    let config = load_config(cli.config.as_deref())?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    tracing::debug!(config = ?config, "Configuration loaded");
    Ok(config)
}
