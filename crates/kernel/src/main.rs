//! Trovato Menu CLI
//!
//! Lists menu documents and renders them into menu item trees (as JSON).
//!
//! Usage:
//!   trovato-menu list
//!   trovato-menu render main --compact

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trovato_menu::{Config, HiddenNodeListener, MenuDocuments, NodeLoader, TapRegistry};

/// Weight of the hidden-node listener; runs before plugin listeners at 0.
const HIDDEN_NODE_WEIGHT: i32 = -100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the menus found in the menu directory.
    List,

    /// Render a menu into its item tree.
    Render {
        /// Menu name (defaults to DEFAULT_MENU).
        name: Option<String>,

        /// Print the tree on a single line.
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(menus_dir = %config.menus_dir.display(), "configuration loaded");

    let documents = MenuDocuments::new(&config.menus_dir);

    match cli.command {
        Command::List => cmd_list(&documents),
        Command::Render { name, compact } => {
            let name = name.unwrap_or_else(|| config.default_menu.clone());
            cmd_render(&config, &documents, &name, compact)
        }
    }
}

/// Print all menu names, one per line.
fn cmd_list(documents: &MenuDocuments) -> Result<()> {
    let names = documents.list()?;
    if names.is_empty() {
        println!("No menus found in {}.", documents.dir().display());
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// Load a menu, convert it, and print the item tree as JSON.
fn cmd_render(
    config: &Config,
    documents: &MenuDocuments,
    name: &str,
    compact: bool,
) -> Result<()> {
    let menu = documents
        .load(name)
        .with_context(|| format!("failed to load menu '{name}'"))?;

    let registry = Arc::new(TapRegistry::new());
    if config.skip_hidden {
        registry.register(Arc::new(HiddenNodeListener), HIDDEN_NODE_WEIGHT);
    }

    let loader = NodeLoader::with_registry(registry);
    let item = loader
        .load(&menu)
        .with_context(|| format!("failed to build menu '{name}'"))?;
    info!(menu = %name, items = item.count(), "menu rendered");

    let json = if compact {
        serde_json::to_string(&item)
    } else {
        serde_json::to_string_pretty(&item)
    }
    .context("failed to serialize menu items")?;

    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
