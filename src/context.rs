use std::path::PathBuf;

use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::output::Output;
use crate::settings::{RegeditImporter, SettingsRecord};

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub importer: RegeditImporter,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(prefix: Option<PathBuf>, regedit: String, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover(prefix)?;
        let importer = RegeditImporter::new(regedit, paths.prefix());
        let output = Output::new(json);

        Ok(Self {
            paths,
            importer,
            output,
        })
    }

    pub fn load_settings(&self) -> AppResult<SettingsRecord> {
        config::load_settings(&self.paths)
    }
}
