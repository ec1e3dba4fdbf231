//! BillEase CLI - drive the landing page behaviour from a terminal.
//!
//! State is kept in a JSON file standing in for the browser's local
//! storage, so a sequence of invocations behaves like a sequence of clicks
//! on the page.
//!
//! # Usage
//!
//! ```bash
//! # Add plans and look at the cart
//! billease cart add Pro
//! billease cart add Business
//! billease cart show
//!
//! # Adjust a line by its position in the last listing
//! billease cart decrease 0
//!
//! # Check out (without --yes the confirmation is dismissed)
//! billease checkout --yes
//!
//! # Theme and contact form
//! billease theme toggle
//! billease contact -n "Ada" -e ada@example.com -m "I would like a demo."
//! ```
//!
//! # Commands
//!
//! - `plans` - List the plan catalog
//! - `cart` - Add, adjust, list and clear cart lines
//! - `checkout` - Simulated checkout
//! - `theme` - Show or toggle the saved theme
//! - `contact` - Validate a contact form submission

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use billease_landing::LandingConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "billease")]
#[command(author, version, about = "BillEase landing page tools")]
struct Cli {
    /// Store file (overrides `BILLEASE_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available plans and prices
    Plans,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Check out the current cart
    Checkout {
        /// Acknowledge the confirmation, which clears the cart
        #[arg(short, long)]
        yes: bool,
    },
    /// Manage the colour theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
    /// Validate a contact form submission
    Contact {
        /// Sender name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Sender email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Message body
        #[arg(short, long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Add one unit of a plan
    Add {
        /// Plan name as shown on the pricing card (Free, Pro, Business)
        plan: String,
    },
    /// Add one unit to the line at a position
    Increase { index: usize },
    /// Remove one unit from the line at a position (never below 1)
    Decrease { index: usize },
    /// Delete the line at a position
    Remove { index: usize },
    /// Show the cart
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Show the saved theme
    Show,
    /// Switch between light and dark
    Toggle,
}

fn main() {
    // Initialize tracing
    billease_landing::telemetry::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LandingConfig::from_env()?;
    if let Some(path) = cli.store {
        config.storage.file_path = path;
    }

    match cli.command {
        Commands::Plans => commands::cart::plans(),
        Commands::Cart { action } => {
            let mut session = commands::cart::CartSession::open(&config);
            match action {
                CartCommand::Add { plan } => session.add(&plan)?,
                CartCommand::Increase { index } => session.increase(index)?,
                CartCommand::Decrease { index } => session.decrease(index)?,
                CartCommand::Remove { index } => session.remove(index)?,
                CartCommand::Show => session.show()?,
                CartCommand::Clear => session.clear()?,
            }
        }
        Commands::Checkout { yes } => {
            commands::cart::CartSession::open(&config).checkout(yes)?;
        }
        Commands::Theme { action } => match action {
            ThemeCommand::Show => commands::theme::show(&config)?,
            ThemeCommand::Toggle => commands::theme::toggle(&config)?,
        },
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::submit(&config, name, email, message)?,
    }
    Ok(())
}
