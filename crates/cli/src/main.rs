//! Tasty Bites CLI - Browse the menu, manage the cart, and place orders.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! tb-cli menu list --category burgers
//! tb-cli menu list --search vegan
//!
//! # Build an order
//! tb-cli cart add classic-burger --quantity 2
//! tb-cli cart show
//!
//! # Place it
//! tb-cli checkout
//! ```
//!
//! # Commands
//!
//! - `menu` - List, search, and inspect menu items
//! - `cart` - Add, update, remove, show, and clear cart lines
//! - `checkout` - Submit the cart as an order
//!
//! The cart is stored in a JSON slot (see [`config`]) and survives between
//! invocations until checkout or `cart clear`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tasty_bites_core::MenuQuery;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tb-cli")]
#[command(author, version, about = "Tasty Bites food ordering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the current cart
    Checkout,
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items
    List {
        /// Only show this category (`all` shows everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Match name, description, or tags
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show featured items
    Featured {
        #[arg(short, long, default_value_t = commands::menu::FEATURED_LIMIT)]
        limit: usize,
    },
    /// Show one item in detail
    Show {
        /// Menu item id
        id: String,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a menu item
    Add {
        /// Menu item id
        id: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Menu item id
        id: String,
    },
    /// Set a line's quantity (0 or less removes it)
    Update {
        /// Menu item id
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove everything
    Clear,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tasty_bites_cli=info,tasty_bites_cart=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Menu { action } => {
            let catalog = commands::load_catalog(&config)?;
            match action {
                MenuAction::List { category, search } => {
                    commands::menu::list(&catalog, &MenuQuery { category, search })?;
                }
                MenuAction::Featured { limit } => commands::menu::featured(&catalog, limit)?,
                MenuAction::Show { id } => commands::menu::show(&catalog, &id)?,
                MenuAction::Categories => commands::menu::categories(&catalog)?,
            }
        }
        Commands::Cart { action } => {
            let mut store = commands::open_store(&config);
            match action {
                CartAction::Show => {
                    commands::cart::show(&store, config.checkout.delivery_fee)?;
                }
                CartAction::Add { id, quantity } => {
                    let catalog = commands::load_catalog(&config)?;
                    commands::cart::add(&mut store, &catalog, &id, quantity)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&mut store, &id)?,
                CartAction::Update { id, quantity } => {
                    commands::cart::update(&mut store, &id, quantity)?;
                }
                CartAction::Clear => commands::cart::clear(&mut store)?,
            }
        }
        Commands::Checkout => {
            let mut store = commands::open_store(&config);
            commands::checkout::run(&mut store, &config.checkout).await?;
        }
    }
    Ok(())
}
