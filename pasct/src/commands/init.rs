//! Init command implementation.
//!
//! Writes a default `pasct.toml` so the report settings can be edited.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::traits::{self, Command};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{PasctError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn target_dir(&self) -> Result<PathBuf> {
        match &self.args.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            info!(path = %path.display(), "creating directory");
            std::fs::create_dir_all(path).map_err(|e| PasctError::file(path, e))?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(PasctError::Config(format!(
                "Target is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    fn run(&self) -> Result<PathBuf> {
        let target = self.target_dir()?;
        Self::validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(PasctError::OutputExists(config_path));
        }

        Config::default().save_to_path(&config_path)?;
        info!(path = %config_path.display(), "wrote configuration");
        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    traits::run::<InitCommand>(args)
}
