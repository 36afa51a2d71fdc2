//! CLI entry point for apd-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apd_content::{commands, Site};

#[derive(Parser)]
#[command(name = "apd-content")]
#[command(version)]
#[command(about = "Loads and renders the APD website content collections", long_about = None)]
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
    /// Render every collection into the output directory
    #[command(alias = "r")]
    Render,

    /// Render the article page of a blog post
    Article {
        /// Slug of the post
        slug: String,
    },

    /// Render the gallery modal of a photo
    Photo {
        /// Slug of the photo
        slug: String,
    },

    /// List a collection in display order
    List {
        /// Collection to list (blog, team, gallery, plan)
        #[arg(default_value = "blog")]
        collection: String,
    },

    /// Convert markdown from a file or standard input
    Markdown {
        /// Input file (defaults to standard input)
        file: Option<PathBuf>,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "apd_content=debug,info"
    } else {
        "apd_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Render => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Rendering collections...");
            let report = commands::render::run(&site).await?;
            let failed = report.failures().len();
            if failed == 0 {
                println!("Rendered successfully!");
            } else {
                println!("Rendered with {} failed collection(s)", failed);
            }
        }

        Commands::Article { slug } => {
            let site = Site::new(&base_dir)?;
            commands::detail::article(&site, &slug).await?;
        }

        Commands::Photo { slug } => {
            let site = Site::new(&base_dir)?;
            commands::detail::photo(&site, &slug).await?;
        }

        Commands::List { collection } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &collection).await?;
        }

        Commands::Markdown { file } => {
            commands::markdown::run(file.as_deref())?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("apd-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
