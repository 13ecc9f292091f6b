//! hello-ops CLI entry point.
//!
//! Prints the arithmetic and string operation report to stdout. Takes no
//! arguments beyond the generated `--help` and `--version`.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_ops_common::DemoConfig;
use hello_ops_core::report;

/// Integer arithmetic and terminated-string demo.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DemoConfig::default();
    info!(?config, "Starting hello-ops");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&mut out, &config).map_err(|e| {
        let context = if e.is_buffer_error() {
            "Text does not fit its buffer"
        } else {
            "Failed to write report"
        };
        anyhow::Error::new(e).context(context)
    })?;

    Ok(())
}
