mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod logging;
mod models;
mod session;
mod store;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::logging::{LogLevel, get_rust_log_level, init_event_logger};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::{DisplayConfig, PlaceholderMode};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Browse transcript feedback and stored items per user
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Select this user once users have loaded
        #[arg(long, value_name = "EMAIL")]
        email: Option<String>,

        /// Print the dashboard to stdout instead of running the TUI
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Rows per page for feedback and items. 0 fetches everything.
        #[arg(long, value_name = "ROWS")]
        page_size: Option<u32>,

        /// Only null values render as placeholders
        #[arg(long, action = clap::ArgAction::SetTrue)]
        strict_placeholders: bool,

        /// Paint a solid background behind the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Update the saved display settings
    Config {
        /// Rows per page for feedback and items. 0 fetches everything.
        #[arg(long, value_name = "ROWS")]
        page_size: Option<u32>,

        /// Only null values render as placeholders
        #[arg(long, value_name = "BOOL")]
        strict_placeholders: Option<bool>,
    },
    /// Delete the saved display settings
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            email,
            headless,
            page_size,
            strict_placeholders,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?;
            let display = DisplayConfig {
                placeholder_mode: PlaceholderMode::from_strict(
                    strict_placeholders || config.strict_placeholders,
                ),
                with_background_color: with_background,
                page_size: page_size.or(config.page_size),
            };
            start(email, headless, display).await
        }
        Command::Config {
            page_size,
            strict_placeholders,
        } => {
            let current = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?;
            // Unset flags keep the saved value; a page size of 0 unsets it
            let config = Config::new(
                page_size.map_or(current.page_size, |size| (size > 0).then_some(size)),
                strict_placeholders.unwrap_or(current.strict_placeholders),
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Config saved", "{}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "Deleting {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts a dashboard session.
///
/// # Arguments
/// * `email` - User to select once users have loaded, if any.
/// * `headless` - Print to stdout instead of running the TUI.
/// * `display` - Display settings merged from the config file and flags.
async fn start(
    email: Option<String>,
    headless: bool,
    display: DisplayConfig,
) -> Result<(), Box<dyn Error>> {
    // Fail before touching the terminal
    let env = match Environment::from_env() {
        Ok(env) => env,
        Err(e) => {
            print_cmd_error!("Missing service configuration", &e.to_string());
            return Err(e.into());
        }
    };

    let threshold: LogLevel = get_rust_log_level();
    let event_receiver = init_event_logger(threshold)?;
    let session = setup_session(env, display)?;

    let result = if headless {
        run_headless_mode(session, event_receiver, email).await
    } else {
        run_tui_mode(session, event_receiver, email).await
    };
    if let Err(e) = &result {
        print_cmd_error!("Dashboard error", &e.to_string());
    }
    result
}
