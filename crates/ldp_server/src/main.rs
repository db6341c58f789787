//! `ldp_server`: a CLI entry point that reads a TOML config, wires up an
//! [`ldp_backend_mem::InMemBackend`], and serves the LDP protocol core over
//! HTTP/1.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use config::{Config as ConfigLoader, FileFormat};
use ldp_backend_mem::InMemBackend;
use ldp_core::{Backend, ServerContext};
use tracing::error;

use ldp_server::config::Config;
use ldp_server::service;
use ldp_server::tracing::{get_subscriber, init_subscriber};

/// A Linked Data Platform protocol server.
#[derive(Debug, Parser)]
#[command(name = "ldp_server", about = "A Linked Data Platform protocol server")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, required = true)]
    config: PathBuf,

    /// Turn on debug-level logging.
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_subscriber(get_subscriber(
        if cli.debug { "debug" } else { "info" }.to_owned(),
    ));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_content = String::from_utf8(tokio::fs::read(&cli.config).await.map_err(|e| {
        error!(path = %cli.config.display(), error = %e, "failed to read config file");
        e
    })?)
    .map_err(|_| "config file is not valid utf-8")?;

    let config: Config = ConfigLoader::builder()
        .add_source(config::File::from_str(&config_content, FileFormat::Toml))
        .build()?
        .try_deserialize()
        .map_err(|e| {
            error!(error = %e, "failed to parse configuration");
            e
        })?;

    let backend: Arc<dyn Backend> = Arc::new(InMemBackend::new());
    backend.init().await?;

    let ctx = ServerContext::new(backend, config.base_url.clone(), config.context_path.clone());

    tracing::info!(addr = %config.addr, base_url = %config.base_url, "starting ldp_server");
    service::serve(config.addr, ctx).await?;
    Ok(())
}
