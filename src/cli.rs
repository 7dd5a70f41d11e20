use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "awaremap")]
#[command(about = "Cybersecurity awareness questionnaire evaluator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score questionnaire responses
    Evaluate {
        /// JSON file with responses (`-` reads stdin)
        responses: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .awaremap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input is a JSON array of submissions
        #[arg(long)]
        batch: bool,

        /// Only print scores, without interpretation and recommendations
        #[arg(long = "no-advice")]
        no_advice: bool,

        /// External program that turns the prompt on stdin into personalized advice
        #[arg(long, env = "AWAREMAP_NARRATOR")]
        narrator: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show the active indicator catalog
    Rubric {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Configuration file (defaults to the nearest .awaremap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from([
            "awaremap", "-vv", "evaluate", "-", "--format", "json", "--batch",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Evaluate {
                responses,
                format,
                batch,
                no_advice,
                ..
            } => {
                assert_eq!(responses, PathBuf::from("-"));
                assert_eq!(format, OutputFormat::Json);
                assert!(batch);
                assert!(!no_advice);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
