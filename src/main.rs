//! `futurecad` binary: run the API server, or ask a running one for a model.

use anyhow::Context;
use clap::{Parser, Subcommand};
use futurecad::client::{CadClient, DEFAULT_API_URL};
use futurecad::config::ServerConfig;
use futurecad::server::{ApiState, start_server};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "futurecad", version, about = "Prompt to 3D model service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (the default)
    Serve {
        /// Bind address, overrides FUTURECAD_ADDR and PORT
        #[arg(long)]
        addr: Option<String>,
    },
    /// Generate a model on a running server and save its STL
    Generate {
        #[arg(long)]
        prompt: String,
        #[arg(long, env = "FUTURECAD_API_URL", default_value = DEFAULT_API_URL)]
        url: String,
        /// Output file, defaults to `cad-model-<id>.stl`
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "futurecad=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { addr: None }) {
        Command::Serve { addr } => {
            let mut config = ServerConfig::from_env()?;
            if let Some(addr) = addr {
                config.addr = addr;
            }
            let state = ApiState::from_config(&config);
            start_server(&config.addr, state)
                .await
                .with_context(|| format!("server on {} failed", config.addr))?;
        },
        Command::Generate { prompt, url, out } => {
            let client = CadClient::new(url);
            let generated = client.generate_model(&prompt).await?;
            let id = generated.model.id.to_string();
            let stl = client.download_model(&id).await?;

            let path = out.unwrap_or_else(|| PathBuf::from(format!("cad-model-{id}.stl")));
            tokio::fs::write(&path, &stl)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(%id, path = %path.display(), bytes = stl.len(), "saved model");
        },
    }

    Ok(())
}
