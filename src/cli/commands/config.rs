//! `adforge config`: show, locate, and initialize configuration.

use crate::cli::output::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

pub fn show(as_json: bool) -> Result<()> {
    ConfigLoader::show_config(as_json)
}

pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

pub fn init(global: bool, force: bool) -> Result<()> {
    let out = Output::new();

    let dir = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project()?
    };
    out.success(&format!("Initialized configuration in {}", dir.display()));

    Ok(())
}
