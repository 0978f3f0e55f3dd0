use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use datavirt::config::Config;
use datavirt::server::{AppState, create_router};
use datavirt::store::{SqliteStore, Store};

#[derive(Parser)]
#[command(name = "datavirt")]
#[command(about = "A data virtualization management server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and database
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },

    /// Start the server
    Serve {
        /// TOML configuration file
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory for the database
        #[arg(long)]
        data_dir: Option<String>,

        /// Report that virtualizations are exposed via 3scale
        #[arg(long)]
        expose_via_3scale: bool,

        /// Report that single sign-on is configured
        #[arg(long)]
        sso_configured: bool,
    },
}

fn run_init(data_dir: String) -> anyhow::Result<()> {
    let mut config = Config::default();
    config.server.data_dir = data_dir.into();
    fs::create_dir_all(&config.server.data_dir)?;

    let db_path = config.server.db_path();
    let store = SqliteStore::new(&db_path)?;

    if store.is_initialized()? {
        bail!("Server already initialized. Database exists at: {}", db_path.display());
    }

    store.initialize()?;

    println!("Initialized database at {}", db_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("datavirt=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir } => {
            run_init(data_dir)?;
        }
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
            expose_via_3scale,
            sso_configured,
        } => {
            let mut config = match config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(data_dir) = data_dir {
                config.server.data_dir = data_dir.into();
            }
            config.features.expose_via_3scale |= expose_via_3scale;
            config.features.sso_configured |= sso_configured;

            let db_path = config.server.db_path();
            if !db_path.exists() {
                bail!("Server not initialized. Run 'datavirt init' first to create the database.");
            }

            let store = SqliteStore::new(&db_path)?;
            if !store.is_initialized()? {
                bail!("Server not initialized. Run 'datavirt init' first to create the database.");
            }

            let state = Arc::new(AppState::new(Arc::new(store), config.features));

            let app = create_router(state);
            let addr = config.server.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
