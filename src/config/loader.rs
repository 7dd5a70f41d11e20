use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AwaremapConfig;
use crate::core::ConfigError;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".awaremap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AwaremapConfig, ConfigError> {
    let config = toml::from_str::<AwaremapConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration file, failing on any read, parse or validation error
pub fn load_config_from_path(path: &Path) -> Result<AwaremapConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AwaremapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "file not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a configuration file.
///
/// Unreadable or invalid files are skipped with a warning; defaults are
/// returned when nothing usable is found.
pub fn load_config_from(start: PathBuf) -> AwaremapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AwaremapConfig::default()
        })
}

pub fn load_config() -> AwaremapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AwaremapConfig::default()
        }
    }
}
