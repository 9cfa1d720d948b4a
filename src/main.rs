mod aggregator;
mod calculator;
mod cli;
mod error;
mod fmt;
mod grading;
mod models;
mod settings;
mod store;

use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_file = settings::SettingsFile::locate();
    let settings = settings_file.load();
    let store = settings.open_store();

    let result = match cli.command {
        None => cli::shell::run(&store),
        Some(Commands::Init { data_dir }) => cli::init::run(&settings_file, data_dir),
        Some(Commands::Load { path }) => cli::load::run(&settings_file, &path),
        Some(Commands::Status) => cli::status::run(&settings_file, &settings, &store),
        Some(Commands::Results { matric }) => cli::results::run(&store, matric.as_deref()),
        Some(Commands::Lookup { matric }) => cli::lookup::run(&store, &matric),
        Some(Commands::Transcript { matric }) => cli::transcript::run(&store, &matric),
        Some(Commands::Backup { output }) => cli::backup::run(&store, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
