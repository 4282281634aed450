//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// List cart items.
    List,
    /// Show one cart item.
    Show {
        /// Product ID.
        product_id: i64,
    },
    /// Add a product, merging with an existing line.
    Add {
        /// Product ID.
        product_id: i64,

        /// Product name.
        #[arg(short, long)]
        name: String,

        /// Unit price.
        #[arg(short, long)]
        price: f64,

        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,

        /// Image path.
        #[arg(long)]
        image: Option<String>,

        /// Stock level shown to the customer.
        #[arg(long)]
        stock: Option<i64>,
    },
    /// Set a line's quantity (zero or below removes it).
    Update {
        /// Product ID.
        product_id: i64,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product's line.
    Remove {
        /// Product ID.
        product_id: i64,
    },
    /// Remove everything.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the cart total.
    Total,
    /// Show the number of units in the cart.
    Count,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[command(subcommand)]
    pub command: CheckoutCommand,
}

#[derive(Subcommand)]
pub enum CheckoutCommand {
    /// Print the order request for the cart.
    Order {
        /// Customer name.
        #[arg(long)]
        name: String,

        /// Customer email.
        #[arg(long)]
        email: String,

        /// Customer phone (10 digits).
        #[arg(long)]
        phone: String,

        /// Shipping address.
        #[arg(long)]
        address: String,
    },
    /// Print the payment order request for the cart total.
    Payment {
        /// Receipt reference (generated when omitted).
        #[arg(long)]
        receipt: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Show which config file and storage file are in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for the auth command.
#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: Option<AuthCommand>,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Show whether an admin token is stored.
    Status,
    /// Store a token returned by OTP verification.
    Token {
        /// Bearer token.
        token: String,
    },
    /// Forget the stored token. The cart is kept.
    Logout,
}
