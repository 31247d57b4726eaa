use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "journey")]
#[command(about = "Journey CLI - derive customer journeys from contact event exports", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by JOURNEY_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Input options shared by every analysis subcommand.
#[derive(Args)]
struct InputArgs {
    /// Contact events as CSV or JSON (`.json`)
    input: PathBuf,

    /// CSV field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive journeys and print an overview
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Write journeys, employee, flow and JSON files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Print the full report as JSON instead of the overview
        #[arg(long)]
        json: bool,
    },
    /// Print the flow graph of contact-type transitions
    Flow {
        #[command(flatten)]
        input: InputArgs,

        /// Override the number of edges kept
        #[arg(long)]
        top: Option<usize>,
    },
    /// Print per-employee statistics, optionally writing one journeys file per employee
    Employees {
        #[command(flatten)]
        input: InputArgs,

        /// Write per-employee journey files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::logging::init(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Analyze {
            input,
            out_dir,
            json,
        } => commands::analyze::run(config, &input.input, input.delimiter, out_dir.as_deref(), json)?,
        Commands::Flow { input, top } => {
            commands::flow::run(config, &input.input, input.delimiter, top)?
        }
        Commands::Employees { input, out_dir } => {
            commands::employees::run(config, &input.input, input.delimiter, out_dir.as_deref())?
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(config, force)?,
            ConfigAction::Show => commands::config::show(config)?,
            ConfigAction::Path => commands::config::path(config)?,
        },
    }

    Ok(())
}
