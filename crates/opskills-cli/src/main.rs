//! opskills CLI: score operator skills quiz answer sheets from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "opskills", version, about = "Operator skills quiz scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score answer sheets against the answer key
    Score {
        /// Path to a .toml answer sheet or a directory of them
        #[arg(long)]
        sheet: PathBuf,

        /// Output format: text, json, markdown (default from config)
        #[arg(long)]
        format: Option<String>,

        /// Write a session record JSON for a single sheet
        #[arg(long)]
        export: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List selectable skills by category
    Catalog {
        /// Only show one category (e.g. "technical", "Collab/Comm")
        #[arg(long)]
        category: Option<String>,
    },

    /// List sectors and roles
    Contexts,

    /// Show the answer key for a sector and role
    Answers {
        /// Sector title, name or id (e.g. "FOOD SECTOR", "food", 1)
        #[arg(long)]
        sector: String,

        /// Role title or id (e.g. "TECH SOLVER", 3)
        #[arg(long)]
        role: String,
    },

    /// Check the reference tables for data-quality defects
    Audit {
        /// Exit code 1 if any findings are reported
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Create starter config and example answer sheet
    Init,
}

fn main() {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Score { config, .. } => config.clone(),
        _ => None,
    };
    // Only `score` reads the output settings; the log filter falls back to
    // the default when the config cannot be loaded.
    let config = config::load_config_from(config_path.as_deref());

    let directive = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_filter.clone())
        .unwrap_or_else(|| "opskills=info".to_string());
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("Warning: ignoring log_filter {directive:?}: {e}"),
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Score {
            sheet,
            format,
            export,
            config: _,
        } => config.and_then(|config| commands::score::execute(sheet, format, export, &config)),
        Commands::Catalog { category } => commands::catalog::execute(category),
        Commands::Contexts => commands::contexts::execute(),
        Commands::Answers { sector, role } => commands::answers::execute(sector, role),
        Commands::Audit { fail_on_findings } => commands::audit::execute(fail_on_findings),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
