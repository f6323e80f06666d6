mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seoforge")]
#[command(version, about = "The fastest way to add SEO to your Next.js project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize SEO configuration for your project
    Init,

    /// Generate SEO assets based on your configuration
    Generate {
        /// Skip confirmation prompts and pre-flight failures
        #[arg(long)]
        force: bool,
    },

    /// Run pre-flight checks without generating anything
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute()?,
        Commands::Generate { force } => commands::generate::execute(force)?,
        Commands::Check => commands::check::execute()?,
    }

    Ok(())
}
