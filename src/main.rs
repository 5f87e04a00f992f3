use clap::{CommandFactory, Parser};
use colored::Colorize;

use gitprof::{
    cli::{Cli, Commands},
    error::AppError,
    menu,
    store::{self, ProfileStore},
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        println!("{}", err.to_string().red());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let store = ProfileStore::new(store::default_path()?);

    match command {
        Commands::Generate => {
            let path = store.generate()?;
            println!("{} {}", "created profiles file:".green(), path.display());
        }
        Commands::Switch => menu::run_switch(&store)?,
        Commands::Add { key, name, email } => {
            store.add(&key, &name, &email)?;
            println!("{} {}", "added profile:".green(), key);
        }
        Commands::Update { key, name, email } => {
            store.update(&key, &name, &email)?;
            println!("{} {}", "updated profile:".green(), key);
        }
        Commands::Delete { key } => {
            store.delete(&key)?;
            println!("{} {}", "deleted profile:".green(), key);
        }
        Commands::View => {
            print!("{}", store.view()?);
        }
    }

    Ok(())
}
