use crate::context::AppContext;
use crate::error::AppResult;
use crate::settings::SettingsRecord;

use super::{describe_save, persist};

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let result = persist(ctx, &SettingsRecord::default(), &ctx.importer)?;
    let text = format!("defaults restored; {}", describe_save(&result));
    ctx.output.emit(&text, &result)
}
