use serde::Serialize;

use crate::error::{AppError, AppResult};

pub const BUFFER_SIZES: [u32; 10] = [16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192];

pub const MIN_INPUTS: u32 = 0;
pub const MIN_OUTPUTS: u32 = 2;
pub const MAX_PORTS: u32 = 128;
pub const PORT_STEP: u32 = 2;

pub const DEFAULT_PORTS: u32 = 16;
pub const DEFAULT_BUFFER_SIZE: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsRecord {
    pub inputs: u32,
    pub outputs: u32,
    pub connect_to_hardware: bool,
    pub autostart_server: bool,
    pub fixed_buffer_size: bool,
    pub preferred_buffer_size: u32,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_PORTS,
            outputs: DEFAULT_PORTS,
            connect_to_hardware: true,
            autostart_server: false,
            fixed_buffer_size: true,
            preferred_buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SettingsRecord {
    pub fn buffer_size_index(&self) -> Option<usize> {
        buffer_size_index(self.preferred_buffer_size)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_ports("inputs", self.inputs, MIN_INPUTS)?;
        validate_ports("outputs", self.outputs, MIN_OUTPUTS)?;
        validate_buffer_size(self.preferred_buffer_size)
    }
}

pub fn buffer_size_index(size: u32) -> Option<usize> {
    BUFFER_SIZES.iter().position(|&candidate| candidate == size)
}

pub fn validate_ports(label: &str, value: u32, min: u32) -> AppResult<()> {
    if value < min || value > MAX_PORTS {
        return Err(AppError::InvalidInput(format!(
            "{label} must be between {min} and {MAX_PORTS}, got {value}"
        )));
    }

    if value % PORT_STEP != 0 {
        return Err(AppError::InvalidInput(format!(
            "{label} must be a multiple of {PORT_STEP}, got {value}"
        )));
    }

    Ok(())
}

pub fn validate_buffer_size(size: u32) -> AppResult<()> {
    if buffer_size_index(size).is_some() {
        return Ok(());
    }

    let supported = BUFFER_SIZES
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::InvalidInput(format!(
        "preferred buffer size {size} is not one of {supported}"
    )))
}
