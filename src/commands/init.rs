use crate::config::{AwaremapConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let contents = AwaremapConfig::default().to_toml()?;
    io::write_file(config_path, &contents)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
