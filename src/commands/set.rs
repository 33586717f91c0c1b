use crate::cli::SetArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::settings::SettingsRecord;
use crate::settings::record::{
    MIN_INPUTS, MIN_OUTPUTS, validate_buffer_size, validate_ports,
};

use super::{describe_save, persist};

pub fn run(ctx: &AppContext, args: SetArgs) -> AppResult<()> {
    validate_args(&args)?;

    let mut settings = ctx.load_settings()?;
    if !apply_changes(&mut settings, &args) {
        return ctx.output.emit("no changes", &settings);
    }

    let result = persist(ctx, &settings, &ctx.importer)?;
    ctx.output.emit(&describe_save(&result), &result)
}

fn validate_args(args: &SetArgs) -> AppResult<()> {
    if let Some(inputs) = args.inputs {
        validate_ports("--inputs", inputs, MIN_INPUTS)?;
    }
    if let Some(outputs) = args.outputs {
        validate_ports("--outputs", outputs, MIN_OUTPUTS)?;
    }
    if let Some(size) = args.buffer_size {
        validate_buffer_size(size)?;
    }
    Ok(())
}

fn apply_changes(settings: &mut SettingsRecord, args: &SetArgs) -> bool {
    let before = *settings;

    if let Some(inputs) = args.inputs {
        settings.inputs = inputs;
    }
    if let Some(outputs) = args.outputs {
        settings.outputs = outputs;
    }
    if let Some(connect) = args.connect_hw {
        settings.connect_to_hardware = connect;
    }
    if let Some(autostart) = args.autostart {
        settings.autostart_server = autostart;
    }
    if let Some(fixed) = args.fixed_buffer {
        settings.fixed_buffer_size = fixed;
    }
    if let Some(size) = args.buffer_size {
        settings.preferred_buffer_size = size;
    }

    *settings != before
}
