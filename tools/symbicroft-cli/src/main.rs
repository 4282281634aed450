//! Symbicroft CLI - drive the persisted cart from the command line.
//!
//! Commands:
//! - `symbicroft cart` - List, add, update, remove and clear cart items
//! - `symbicroft checkout` - Print order and payment payloads for the cart
//! - `symbicroft auth` - Inspect or clear the stored admin token
//! - `symbicroft config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AuthArgs, CartArgs, CheckoutArgs, ConfigArgs};

/// Symbicroft CLI - manage the storefront cart
#[derive(Parser)]
#[command(name = "symbicroft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Storage file path (overrides config)
    #[arg(long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and modify the cart
    Cart(CartArgs),

    /// Build checkout payloads from the cart
    Checkout(CheckoutArgs),

    /// Manage the stored admin token
    Auth(AuthArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.storage.as_deref(), output)?;
    init_logging(&ctx.config.log.level, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Auth(args) => commands::auth::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
fn init_logging(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
