pub mod json;
pub mod text;

use serde::Serialize;
use tracing::warn;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_block: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_block(text_block),
            OutputMode::Json => json::print(json_value),
        }
    }

    // stderr in both modes so JSON on stdout stays parseable
    pub fn warning(&self, message: &str) {
        warn!("{message}");
        text::print_warning(message);
    }
}
