//! Prints a fixed sequence of greetings to standard output.
mod models;
mod services;

use services::GreetingService;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only the greetings.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber already being installed is not fatal here.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();

    let service = GreetingService;
    for (index, line) in service.greetings().iter().enumerate() {
        tracing::debug!(index, %line, "printing greeting");
        println!("{line}");
    }
}
