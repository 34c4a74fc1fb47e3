use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pathtree=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let tree = input::load_tree(&cli.input, cli.policy.into())?;
    let format = OutputFormat::from(cli.format);

    match &cli.command {
        Commands::Get(args) => commands::get::run(&tree, args, format),
        Commands::Set(args) => commands::set::run(tree, args),
        Commands::Filter(args) => commands::filter::run(&tree, args),
    }
}
