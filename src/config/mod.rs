pub mod paths;

pub use paths::AppPaths;

use crate::error::AppResult;
use crate::settings::codec::{self, STORE_SECTION};
use crate::settings::{RegistryImporter, SettingsRecord};

pub fn load_settings(paths: &AppPaths) -> AppResult<SettingsRecord> {
    codec::load(paths.store_file(), STORE_SECTION)
}

pub fn save_settings<I: RegistryImporter + ?Sized>(
    paths: &AppPaths,
    record: &SettingsRecord,
    importer: &I,
) -> AppResult<()> {
    codec::save(record, paths.import_file(), importer)
}
