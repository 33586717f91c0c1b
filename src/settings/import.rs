use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{AppError, AppResult};

pub const DEFAULT_REGEDIT: &str = "regedit";

pub trait RegistryImporter {
    fn import(&self, path: &Path) -> AppResult<()>;
}

// Runs Wine's regedit with WINEPREFIX pointing at the selected prefix.
#[derive(Debug, Clone)]
pub struct RegeditImporter {
    program: String,
    prefix: PathBuf,
}

impl RegeditImporter {
    pub fn new(program: impl Into<String>, prefix: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            prefix: prefix.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl RegistryImporter for RegeditImporter {
    fn import(&self, path: &Path) -> AppResult<()> {
        info!(
            program = %self.program,
            prefix = %self.prefix.display(),
            path = %path.display(),
            "importing registry file"
        );

        let status = Command::new(&self.program)
            .arg(path)
            .env("WINEPREFIX", &self.prefix)
            .status()
            .map_err(|err| AppError::Import(format!("failed to launch {}: {err}", self.program)))?;

        if status.success() {
            return Ok(());
        }

        Err(AppError::Import(format!(
            "{} exited unsuccessfully ({status}) for {}",
            self.program,
            path.display()
        )))
    }
}
