// ABOUTME: Entry point for the envd CLI application.
// ABOUTME: Parses arguments, sets up logging and dispatches to command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, ImagesCommand};
use envd_images::error::Result;
use envd_images::output::Output;
use envd_images::runtime::LocalConnector;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = cli.output_mode();

    if let Err(e) = run(cli).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output = Output::new(cli.output_mode());
    let connector = LocalConnector::new(cli.runtime_config());

    match cli.command {
        Commands::Images(images) => match images.command {
            ImagesCommand::Remove { image, tag } => {
                commands::remove_image(&connector, image.as_deref(), &tag, output).await
            }
            ImagesCommand::List { image } => {
                commands::list_images(&connector, image.as_deref(), output).await
            }
        },
    }
}
