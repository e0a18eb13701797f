mod cli;
mod commands;
mod emit;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            category,
        } => {
            commands::process::handle(&input, &output, category.as_deref())?;
        }

        Commands::Check { input, category } => {
            commands::process::check(&input, category.as_deref())?;
        }

        Commands::Spec { category } => {
            commands::spec::handle(category.as_deref())?;
        }
    }

    Ok(())
}
