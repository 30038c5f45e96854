//! CLI entry point for qingping

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qingping::{commands, server, Site};

#[derive(Parser)]
#[command(name = "qingping")]
#[command(version)]
#[command(about = "Server-rendered front end of the 青萍之末 blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Print the HTML of one page
    Render {
        /// Path to render, e.g. /blog/post/a1
        path: String,
    },

    /// Render every page into the public folder
    #[command(alias = "e")]
    Export,

    /// Validate the content store
    Check,

    /// List site information
    List {
        /// Type of content to list (posts, authors, routes)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.debug {
        "qingping=debug,tower_http=debug,info"
    } else {
        "qingping=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = Arc::new(Site::new(&base_dir)?);

            let shutdown = CancellationToken::new();
            let shutdown_signal = shutdown.clone();
            tokio::spawn(async move {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
                shutdown_signal.cancel();
            });

            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(site, &ip, port, shutdown).await?;
        }

        Commands::Render { path } => {
            let site = Arc::new(Site::new(&base_dir)?);
            let (html, found) = commands::render(site, &path).await?;
            print!("{}", html);
            if !found {
                tracing::warn!("{} did not resolve to a page", path);
            }
        }

        Commands::Export => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Exporting to {:?}...", site.public_dir);
            commands::export::run(&site).await?;
            println!("Exported successfully!");
        }

        Commands::Check => {
            let site = Site::new(&base_dir)?;
            commands::check::run(&site).await?;
        }

        Commands::List { r#type } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &r#type).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("qingping version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
