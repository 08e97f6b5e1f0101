
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{area, index};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Area(args) => area::run(&cli, args),
        Commands::Index(args) => index::run(&cli, args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();
}

fn main() -> anyhow::Result<()> { run() }
