use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use toduo_server::{AppState, ServerConfig};
use toduo_settings::ToduoSettings;
use toduo_store::Store;
use toduo_telemetry::{LogFormat, TelemetryConfig};
use toduo_vault::VaultWriter;

/// Tasks, notes, kanban boards and tags over HTTP, with a Markdown note vault.
#[derive(Debug, Parser)]
#[command(name = "toduo", version)]
struct Cli {
    /// Settings file (defaults to ~/.toduo/settings.json).
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Address to bind.
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (0 picks a free port).
    #[arg(long)]
    port: Option<u16>,
    /// Directory for vault note files.
    #[arg(long)]
    vault_dir: Option<PathBuf>,
    /// Start with demo tasks, notes, a board and tags.
    #[arg(long)]
    seed: bool,
    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn apply(self, settings: &mut ToduoSettings) {
        if let Some(host) = self.host {
            settings.server.host = host;
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(dir) = self.vault_dir {
            settings.vault.dir = dir;
        }
        settings.seed_demo_data |= self.seed;
        settings.logging.json |= self.log_json;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.settings.clone().unwrap_or_else(toduo_settings::settings_path);
    let mut settings = toduo_settings::load_settings_from_path(&settings_path)
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;
    cli.apply(&mut settings);

    toduo_telemetry::init_telemetry(&telemetry_config(&settings))?;
    tracing::info!(settings = %settings_path.display(), "Starting toduo server");

    let store = Store::new();
    if settings.seed_demo_data {
        toduo_store::seed_demo_data(&store);
    }

    let vault = VaultWriter::new(&settings.vault.dir);
    tracing::info!(vault = %vault.dir().display(), "Vault directory configured");

    let config = ServerConfig {
        host: settings.server.host.clone(),
        port: settings.server.port,
    };
    let handle = toduo_server::start(config, AppState::new(store, vault))
        .await
        .with_context(|| format!("failed to bind {}:{}", settings.server.host, settings.server.port))?;

    tracing::info!(port = handle.port, "toduo server ready");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl+c")?;

    tracing::info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}

fn telemetry_config(settings: &ToduoSettings) -> TelemetryConfig {
    let log_level = settings.logging.level.parse().unwrap_or_else(|_| {
        eprintln!("toduo: unknown log level {:?}, using info", settings.logging.level);
        tracing::Level::INFO
    });
    let module_levels = settings
        .logging
        .modules
        .iter()
        .filter_map(|(module, level)| Some((module.clone(), level.parse::<tracing::Level>().ok()?)))
        .collect::<Vec<_>>();
    TelemetryConfig {
        log_level,
        module_levels,
        format: if settings.logging.json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
    }
}
