//! CLI command implementations for awaremap.
//!
//! - **evaluate**: score one submission or a batch and render the report
//! - **init**: write a default `.awaremap.toml`
//! - **rubric**: show the indicator catalog in effect

pub mod evaluate;
pub mod init;
pub mod rubric;

pub use evaluate::{evaluate_responses, EvaluateConfig};
pub use init::init_config;
pub use rubric::show_rubric;

use crate::config::{load_config, load_config_from_path, AwaremapConfig};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Strict when a path is given, otherwise the nearest `.awaremap.toml` or defaults.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<AwaremapConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Invalid configuration in {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Stdout, or a file without ANSI colors.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
