use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::settings::SettingsRecord;

#[derive(Debug, Serialize)]
struct ShowResult {
    store_file: String,
    settings: SettingsRecord,
    buffer_size_supported: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let settings = ctx.load_settings()?;
    let result = ShowResult {
        store_file: ctx.paths.store_file().display().to_string(),
        buffer_size_supported: settings.buffer_size_index().is_some(),
        settings,
    };

    ctx.output.emit(&format_settings(&settings), &result)
}

pub fn format_settings(settings: &SettingsRecord) -> String {
    let buffer_note = if settings.buffer_size_index().is_some() {
        ""
    } else {
        " (not a supported size)"
    };

    [
        format!("inputs: {}", settings.inputs),
        format!("outputs: {}", settings.outputs),
        format!("connect to hardware: {}", on_off(settings.connect_to_hardware)),
        format!("autostart server: {}", on_off(settings.autostart_server)),
        format!("fixed buffer size: {}", on_off(settings.fixed_buffer_size)),
        format!(
            "preferred buffer size: {}{buffer_note}",
            settings.preferred_buffer_size
        ),
    ]
    .join("\n")
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
