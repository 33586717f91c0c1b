pub mod buffer_sizes;
pub mod paths;
pub mod reset;
pub mod set;
pub mod show;

use serde::Serialize;

use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::settings::{RegistryImporter, SettingsRecord};

#[derive(Debug, Serialize)]
pub struct SaveResult {
    pub settings: SettingsRecord,
    pub import_file: String,
    pub imported: bool,
    pub warning: Option<String>,
}

pub fn persist<I: RegistryImporter + ?Sized>(
    ctx: &AppContext,
    record: &SettingsRecord,
    importer: &I,
) -> AppResult<SaveResult> {
    let import_file = ctx.paths.import_file().display().to_string();

    let warning = match config::save_settings(&ctx.paths, record, importer) {
        Ok(()) => None,
        Err(AppError::Import(message)) => {
            let warning = format!("{message}. settings were written to {import_file} but not imported");
            ctx.output.warning(&warning);
            Some(warning)
        }
        Err(err) => return Err(err),
    };

    Ok(SaveResult {
        settings: *record,
        imported: warning.is_none(),
        import_file,
        warning,
    })
}

pub fn describe_save(result: &SaveResult) -> String {
    if result.imported {
        format!("settings imported from {}", result.import_file)
    } else {
        format!("settings written to {} (not imported)", result.import_file)
    }
}
