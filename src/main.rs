use clap::{Parser, Subcommand};
use keyshift::config::RegistryArgs;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    registry: RegistryArgs,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print layout grids, top row first
    Layouts(cmd::layouts::LayoutsArgs),
    /// Show where a binding lands on every registered layout
    Resolve(cmd::resolve::ResolveArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let registry = match cli.registry.load() {
        Ok(r) => Arc::new(r),
        Err(e) => {
            error!("Failed to load layouts: {}", e);
            process::exit(1);
        }
    };
    info!("Loaded {} layouts", registry.len());

    let result = match cli.command {
        Commands::Layouts(args) => cmd::layouts::run(args, &registry),
        Commands::Resolve(args) => cmd::resolve::run(args, registry),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
