use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::settings::BUFFER_SIZES;

#[derive(Debug, Serialize)]
struct BufferSizesView {
    sizes: Vec<u32>,
    selected: Option<u32>,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let settings = ctx.load_settings()?;
    let selected = settings
        .buffer_size_index()
        .map(|index| BUFFER_SIZES[index]);

    let view = BufferSizesView {
        sizes: BUFFER_SIZES.to_vec(),
        selected,
    };
    ctx.output.emit(&format_sizes(selected), &view)
}

fn format_sizes(selected: Option<u32>) -> String {
    BUFFER_SIZES
        .iter()
        .map(|&size| {
            let marker = if Some(size) == selected { "*" } else { " " };
            format!("{marker} {size}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
