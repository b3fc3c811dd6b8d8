//! CLI entry point for minimal-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minimal-blog")]
#[command(version)]
#[command(about = "A minimal markdown-backed blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// List articles, newest first
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a single article
    Show {
        /// Article id (file name without extension)
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Remove the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "minimal_blog=debug,info"
    } else {
        "minimal_blog=info"
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
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { json } => {
            let blog = minimal_blog::Blog::new(&base_dir)?;
            minimal_blog::commands::list::run(&blog, json)?;
        }

        Commands::Show { id, json } => {
            let blog = minimal_blog::Blog::new(&base_dir)?;
            minimal_blog::commands::show::run(&blog, &id, json)?;
        }

        Commands::Generate => {
            let blog = minimal_blog::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, open } => {
            let blog = minimal_blog::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            minimal_blog::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Clean => {
            let blog = minimal_blog::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("minimal-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
