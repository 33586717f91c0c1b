use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct PathsView {
    prefix: String,
    store_file: String,
    import_file: String,
    regedit: String,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let view = PathsView {
        prefix: ctx.paths.prefix().display().to_string(),
        store_file: ctx.paths.store_file().display().to_string(),
        import_file: ctx.paths.import_file().display().to_string(),
        regedit: ctx.importer.program().to_string(),
    };

    let text = format!(
        "prefix: {}\nstore file: {}\nimport file: {}\nregedit: {}",
        view.prefix, view.store_file, view.import_file, view.regedit
    );
    ctx.output.emit(&text, &view)
}
