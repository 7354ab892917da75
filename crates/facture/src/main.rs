//! Facture Unified Launcher
//!
//! Single binary for the invoice validation cockpit:
//! - **TUI** (default): worklist plus validation cockpit over the demo queue
//! - **CLI Commands**: scriptable worklist / record / config inspection
//!
//! Logging goes to a daily rolling file under the Facture home directory.
//! In TUI mode the console layer is clamped to errors so tracing output
//! cannot corrupt the alternate screen.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "facture", about = "Invoice validation cockpit for AP review")]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive worklist and validation cockpit (the default)
    Tui {
        #[command(flatten)]
        args: cli::tui::TuiArgs,
    },

    /// List the invoice worklist
    Worklist {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one record with per-field extraction confidence
    Show {
        /// Record id, e.g. INV-2024-001
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn is_tui_mode(command: &Option<Commands>) -> bool {
    matches!(command, None | Some(Commands::Tui { .. }))
}

fn command_wants_json(command: &Option<Commands>) -> bool {
    match command {
        Some(Commands::Worklist { json }) => *json,
        Some(Commands::Show { json, .. }) => *json,
        Some(Commands::Config { json }) => *json,
        _ => false,
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_else(|| Commands::Tui {
        args: cli::tui::TuiArgs::default(),
    });

    match command {
        Commands::Tui { args } => cli::tui::run(args),
        Commands::Worklist { json } => cli::worklist::run(cli::worklist::WorklistArgs { json }),
        Commands::Show { id, json } => cli::show::run(cli::show::ShowArgs { id, json }),
        Commands::Config { json } => cli::config::run(cli::config::ConfigArgs { json }),
    }
}

fn print_json_error(err: &anyhow::Error) {
    let payload = serde_json::json!({ "error": format!("{:#}", err) });
    eprintln!("{}", payload);
}

fn main() -> ExitCode {
    // Parse CLI first to check if we're in TUI mode
    let cli = Cli::parse();

    // Suppress console logs in TUI mode to avoid corrupting the display
    let is_tui = is_tui_mode(&cli.command);
    let json_mode = command_wants_json(&cli.command);
    let default_filter = if cli.verbose {
        "facture=debug,facture_erp=debug,facture_schema=debug"
    } else {
        "facture=info,facture_erp=info,facture_schema=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let mut _log_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = match cli::config::ensure_logs_dir() {
        Ok(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "facture.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            _log_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(env_filter),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {}", err);
            None
        }
    };

    let console_filter = if is_tui {
        tracing_subscriber::EnvFilter::new("error")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into())
    };
    let console_writer = if is_tui || json_mode {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr)
    } else {
        tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stdout)
    };
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}
