use anyhow::Result;
use clap::Parser;

use workshop_console::cli::{commands, Cli, Commands};
use workshop_console::{initial_workshops, seed, WorkshopCatalog, WorkshopConsoleConfig};

fn main() -> Result<()> {
    let _ = WorkshopConsoleConfig::load_env_file();
    let config = WorkshopConsoleConfig::load()?;
    workshop_console::init_telemetry(&config.observability.log_level)?;

    let cli = Cli::parse();

    let seed_workshops = match &config.catalog.seed_file {
        Some(path) => seed::load_from_file(path)?,
        None => initial_workshops(),
    };
    let mut catalog = WorkshopCatalog::with_seed(seed_workshops);

    match cli.command {
        // Default behavior: no subcommand - explain how to use the console
        None => commands::show_how_to_use(),
        Some(Commands::Console) => {
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            commands::console::run(&mut catalog, stdin, stdout)
        }
        Some(Commands::List { category }) => commands::list::run(&catalog, &category),
        Some(Commands::Stats) => commands::stats::run(&catalog),
    }
}
