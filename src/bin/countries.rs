use clap::{Parser, Subcommand};
use iso3166::{
    commands::{self, CommandError},
    registry::Registry,
    settings::get_settings,
    telemetry::{error, init_tracing, LogKey},
};
use std::process::ExitCode;

/// Look up ISO 3166-1 country records
#[derive(Parser)]
#[command(name = "countries", version)]
struct Cli {
    /// Dataset file (.json, .yaml or .yml) to use instead of the bundled table
    #[arg(long, global = true)]
    dataset: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the record matching a key as JSON
    Lookup {
        /// Field to match: name, alpha2, alpha3 or numeric
        #[arg(long, default_value = "alpha2")]
        by: String,
        value: String,
    },
    /// Print one `key<TAB>short name` line per record
    List {
        #[arg(long, default_value = "alpha2")]
        key: String,
    },
    /// Print the number of records
    Count,
    /// Print every record as a JSON array
    Export,
}

fn run(command: Command, registry: &Registry) -> Result<(), CommandError> {
    match command {
        Command::Lookup { by, value } => println!("{}", commands::lookup(registry, &by, &value)?),
        Command::List { key } => {
            for line in commands::list(registry, &key)? {
                println!("{}", line);
            }
        }
        Command::Count => println!("{}", commands::count(registry)),
        Command::Export => println!("{}", commands::export(registry)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = get_settings();
    init_tracing(&settings.log_level, std::io::stderr);

    let dataset = cli.dataset.or(settings.dataset);
    let result = commands::load_registry(dataset.as_deref())
        .and_then(|registry| run(cli.command, &registry));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            let log_key = match e {
                CommandError::Dataset(_) => LogKey::DatasetLoadFailed,
                _ => LogKey::Cli,
            };
            error(&log_key, "Command failed", Some(Box::new(e)));
            ExitCode::FAILURE
        }
    }
}
