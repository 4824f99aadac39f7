//! Pocket Cart CLI - Drive the cart widget from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add every sample product once and print the cart
//! pocket-cart demo
//!
//! # Interactive session: type events such as `+ 1`, `- 2`, `like 3`
//! pocket-cart shell --seed
//!
//! # Write the cart page as HTML after applying some events
//! pocket-cart html --event "increment 1" --event "delete 2" --out cart.html
//!
//! # List the catalog, optionally loaded from a JSON file
//! pocket-cart catalog --catalog products.json
//! ```
//!
//! # Commands
//!
//! - `demo` - Seed the cart and print it
//! - `shell` - Read cart events from stdin
//! - `html` - Render the cart page to HTML
//! - `catalog` - List catalog products
//!
//! Logs go to stderr (`RUST_LOG` controls the filter); rendered output goes
//! to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pocket-cart")]
#[command(author, version, about = "Pocket Cart shopping cart widget")]
struct Cli {
    /// Load the catalog from a JSON file instead of the built-in sample
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add every catalog product once and print the cart
    Demo {
        /// Print the cart view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read cart events from stdin, printing the cart after each one
    Shell {
        /// Add every catalog product once before reading events
        #[arg(long)]
        seed: bool,
    },
    /// Render the cart page as HTML
    Html {
        /// Event to apply after seeding, e.g. "increment 1" (repeatable)
        #[arg(short, long = "event")]
        events: Vec<String>,

        /// Start from an empty cart instead of seeding every product
        #[arg(long)]
        empty: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List catalog products
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pocket_cart=info,pocket_cart_widget=info".into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;
    let config = pocket_cart_widget::WidgetConfig::from_env()?;
    tracing::debug!(redraw = %config.redraw, "Loaded widget configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo { json } => commands::demo::run(&catalog, &config, json, &mut out)?,
        Commands::Shell { seed } => {
            let stdin = std::io::stdin();
            commands::shell::run(&catalog, &config, seed, stdin.lock(), &mut out)?;
        }
        Commands::Html { events, empty, out: path } => {
            let document = commands::html::render(&catalog, &config, &events, !empty)?;
            match path {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    tracing::info!(path = %path.display(), "Wrote cart page");
                }
                None => std::io::Write::write_all(&mut out, document.as_bytes())?,
            }
        }
        Commands::Catalog { json } => commands::catalog::list(&catalog, json, &mut out)?,
    }
    Ok(())
}
