//! Configuration for awaremap.
//!
//! The rubric, level thresholds, interpretation cut-offs and the text
//! generator retry policy are all plain data loaded from `.awaremap.toml`.
//! Every section has defaults, so an absent or empty file yields the
//! standard 43-question rubric.

mod core;
mod loader;
pub mod retry;
pub mod rubric;
mod thresholds;

pub use self::core::AwaremapConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use retry::{RetryConfig, RetryStrategy};
pub use rubric::{IndicatorDef, LikertScale, Rubric};
pub use thresholds::{InterpretationThresholds, LevelThresholds};
