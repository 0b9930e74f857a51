//! Pagesmith CLI - page authoring and publishing tools.
//!
//! # Usage
//!
//! ```bash
//! # Write a starter page file
//! ps-cli seed -o about.json
//!
//! # Render a page file to an HTML fragment
//! ps-cli render about.json
//!
//! # Render the full publishable body (with the embedded source island)
//! ps-cli render about.json --full
//!
//! # Publish a page file to the configured Shopify store
//! ps-cli publish about.json
//! ```
//!
//! # Commands
//!
//! - `seed` - Write a starter page file with one of each common widget
//! - `render` - Render a page file to HTML
//! - `publish` - Push a page file to the Shopify Pages API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(author, version, about = "Pagesmith CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter page file
    Seed {
        /// Output path for the page file
        #[arg(short, long, default_value = "page.json")]
        out: String,

        /// Page title
        #[arg(short, long, default_value = "New Page")]
        title: String,
    },
    /// Render a page file to HTML on stdout
    Render {
        /// Path to a page file produced by `seed` or `publish`
        input: String,

        /// Emit the full publishable body instead of the bare fragment
        #[arg(long)]
        full: bool,
    },
    /// Publish a page file to the configured Shopify store
    Publish {
        /// Path to a page file; rewritten in place with the remote id
        input: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pagesmith=info")),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { out, title } => commands::seed::starter_page(&out, &title).await?,
        Commands::Render { input, full } => commands::render::page(&input, full).await?,
        Commands::Publish { input } => commands::publish::page(&input).await?,
    }
    Ok(())
}
