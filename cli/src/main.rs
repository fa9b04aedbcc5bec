//! Solty CLI - resolve type names with the compiler's type registry.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Install panic handler for user-friendly crash reporting
    common::panic::install_handler();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let overrides = common::session::overrides(&cli.session);

    let result = match cli.command {
        Command::Resolve(args) => commands::resolve::run(args, &overrides),
        Command::Signature(args) => commands::signature::run(args, &overrides),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
