use std::cell::Cell;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use wineasio_settings::commands::{describe_save, persist};
use wineasio_settings::config::AppPaths;
use wineasio_settings::context::AppContext;
use wineasio_settings::error::{AppError, AppResult};
use wineasio_settings::output::Output;
use wineasio_settings::settings::{RegeditImporter, RegistryImporter, SettingsRecord};

struct CountingImporter {
    calls: Cell<usize>,
    result: fn() -> AppResult<()>,
}

impl RegistryImporter for CountingImporter {
    fn import(&self, _path: &Path) -> AppResult<()> {
        self.calls.set(self.calls.get() + 1);
        (self.result)()
    }
}

fn context_in(dir: &Path) -> AppContext {
    let prefix = dir.join("prefix");
    AppContext {
        paths: AppPaths::new(prefix.clone(), dir.join("import.reg")),
        importer: RegeditImporter::new("regedit", prefix),
        output: Output::new(true),
    }
}

#[test]
fn successful_import_is_reported() {
    let dir = tempdir().expect("tempdir");
    let ctx = context_in(dir.path());
    let importer = CountingImporter {
        calls: Cell::new(0),
        result: || Ok(()),
    };

    let result = persist(&ctx, &SettingsRecord::default(), &importer).expect("persist");
    assert!(result.imported);
    assert!(result.warning.is_none());
    assert_eq!(importer.calls.get(), 1);
    assert!(describe_save(&result).starts_with("settings imported from"));
}

#[test]
fn failed_import_becomes_a_warning() {
    let dir = tempdir().expect("tempdir");
    let ctx = context_in(dir.path());
    let importer = CountingImporter {
        calls: Cell::new(0),
        result: || Err(AppError::Import("regedit exited unsuccessfully".to_string())),
    };

    let result = persist(&ctx, &SettingsRecord::default(), &importer).expect("persist");
    assert!(!result.imported);
    let warning = result.warning.as_deref().expect("warning present");
    assert!(warning.contains("regedit exited unsuccessfully"));
    assert!(fs::read_to_string(ctx.paths.import_file())
        .expect("import file written")
        .starts_with("REGEDIT4\n"));
    assert!(describe_save(&result).ends_with("(not imported)"));
}

#[test]
fn loads_from_prefix_store() {
    let dir = tempdir().expect("tempdir");
    let ctx = context_in(dir.path());
    fs::create_dir_all(ctx.paths.prefix()).expect("prefix dir");
    fs::write(
        ctx.paths.store_file(),
        "[Software\\\\Wine\\\\WineASIO] 1\n\"Number of outputs\"=dword:00000020\n",
    )
    .expect("write store");

    let settings = ctx.load_settings().expect("load");
    assert_eq!(settings.outputs, 32);
    assert_eq!(settings.inputs, 16);
}
