//! # modiste
//!
//! Command-line companion of the Modiste directive: replay scenario files
//! against the directive and convert modifier names between casings.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modiste")]
#[command(about = "Toggle CSS modifier classes from reactive state", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay scenario files against the directive
    #[command(visible_alias = "atelier")]
    Apply(commands::apply::ApplyArgs),

    /// Convert modifier names between kebab-case and camelCase
    Case(commands::case::CaseArgs),

    /// Print the JSON Schema of modiste.config.json
    Schema,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Case(args) => {
            commands::case::run(args);
            Ok(())
        }
        Commands::Schema => {
            println!("{}", modiste::config::MODISTE_CONFIG_SCHEMA);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\x1b[31mError:\x1b[0m {}", e);
        std::process::exit(1);
    }
}
