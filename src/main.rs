use anyhow::Result;
use awaremap::cli::{Cli, Commands};
use awaremap::commands::{self, EvaluateConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Evaluate {
            responses,
            format,
            output,
            config,
            batch,
            no_advice,
            narrator,
        } => commands::evaluate_responses(EvaluateConfig {
            responses,
            format,
            output,
            config,
            batch,
            no_advice,
            narrator,
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Rubric { format, config } => commands::show_rubric(format, config.as_deref()),
    }
}

// RUST_LOG wins over -v.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("awaremap={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
