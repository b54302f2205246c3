use clap::Parser;

mod cli;
mod commands;
mod config;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = commands::run(&config, cli.command).await {
        report(&err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Print a failure the way the UI shows it: the message, then any program
/// log lines captured from the node.
fn report(err: &anyhow::Error) {
    eprintln!("error: {err:#}");
    if let Some(client_err) = err.downcast_ref::<spotlight_client::Error>() {
        if let Some(logs) = client_err.program_logs() {
            eprintln!();
            eprintln!("program logs:");
            for line in logs {
                eprintln!("  {line}");
            }
        }
    }
}
