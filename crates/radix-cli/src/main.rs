//! Radix CLI: the `radix` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("radix=warn,radix_kernel=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { value, radix, json } => commands::encode::run(value, radix, json),

        Commands::Decode { text, radix, json } => commands::decode::run(text, radix, json),

        Commands::Convert {
            text,
            from,
            to,
            json,
        } => commands::convert::run(text, from, to, json),

        Commands::Report {
            config,
            min_value,
            max_value,
            min_radix,
            max_radix,
            output,
            json,
        } => commands::report::run(commands::report::Args {
            config,
            min_value,
            max_value,
            min_radix,
            max_radix,
            output,
            json,
        }),
    }
}
