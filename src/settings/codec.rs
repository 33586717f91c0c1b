use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use super::import::RegistryImporter;
use super::record::SettingsRecord;
use super::registry::RegSection;

pub const STORE_SECTION: &str = r"Software\\Wine\\WineASIO";
pub const IMPORT_SECTION: &str = r"HKEY_CURRENT_USER\Software\Wine\WineASIO";

const REGEDIT_HEADER: &str = "REGEDIT4";

pub const KEY_INPUTS: &str = "Number of inputs";
pub const KEY_OUTPUTS: &str = "Number of outputs";
pub const KEY_CONNECT_HW: &str = "Connect to hardware";
pub const KEY_AUTOSTART: &str = "Autostart server";
pub const KEY_FIXED_BUFFER: &str = "Fixed buffersize";
pub const KEY_BUFFER_SIZE: &str = "Preferred buffersize";

pub fn load(store_path: &Path, section: &str) -> AppResult<SettingsRecord> {
    let content = match fs::read_to_string(store_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %store_path.display(), "store file missing, using defaults");
            return Ok(SettingsRecord::default());
        }
        Err(source) => {
            return Err(AppError::Store {
                path: store_path.to_path_buf(),
                source,
            });
        }
    };

    parse(&content, section)
}

pub fn parse(content: &str, section: &str) -> AppResult<SettingsRecord> {
    let name = section_name(section);
    let Some(values) = RegSection::parse(content, name) else {
        debug!(section = name, "section missing, using defaults");
        return Ok(SettingsRecord::default());
    };

    let defaults = SettingsRecord::default();
    Ok(SettingsRecord {
        inputs: read_hex(&values, KEY_INPUTS, defaults.inputs)?,
        outputs: read_hex(&values, KEY_OUTPUTS, defaults.outputs)?,
        connect_to_hardware: read_flag(&values, KEY_CONNECT_HW, defaults.connect_to_hardware)?,
        autostart_server: read_flag(&values, KEY_AUTOSTART, defaults.autostart_server)?,
        fixed_buffer_size: read_flag(&values, KEY_FIXED_BUFFER, defaults.fixed_buffer_size)?,
        preferred_buffer_size: read_hex(&values, KEY_BUFFER_SIZE, defaults.preferred_buffer_size)?,
    })
}

pub fn serialize(record: &SettingsRecord) -> AppResult<String> {
    record.validate()?;

    let lines = [
        REGEDIT_HEADER.to_string(),
        String::new(),
        format!("[{IMPORT_SECTION}]"),
        flag_line(KEY_AUTOSTART, record.autostart_server),
        flag_line(KEY_CONNECT_HW, record.connect_to_hardware),
        flag_line(KEY_FIXED_BUFFER, record.fixed_buffer_size),
        hex_line(KEY_INPUTS, record.inputs, 2),
        hex_line(KEY_OUTPUTS, record.outputs, 2),
        hex_line(KEY_BUFFER_SIZE, record.preferred_buffer_size, 4),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

// The import file is left in place when the import fails.
pub fn save<I: RegistryImporter + ?Sized>(
    record: &SettingsRecord,
    target: &Path,
    importer: &I,
) -> AppResult<()> {
    let payload = serialize(record)?;
    fs::write(target, payload)?;
    info!(path = %target.display(), "wrote registry import file");

    importer.import(target)
}

fn section_name(section: &str) -> &str {
    let trimmed = section.trim();
    trimmed
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(trimmed)
}

fn read_hex(values: &RegSection, key: &'static str, default: u32) -> AppResult<u32> {
    let Some(raw) = values.get(key) else {
        debug!(key, default, "key missing, using default");
        return Ok(default);
    };

    u32::from_str_radix(raw, 16).map_err(|_| AppError::MalformedValue {
        key,
        raw: raw.to_string(),
    })
}

fn read_flag(values: &RegSection, key: &'static str, default: bool) -> AppResult<bool> {
    let Some(raw) = values.get(key) else {
        debug!(key, default, "key missing, using default");
        return Ok(default);
    };

    raw.parse::<u32>()
        .map(|value| value != 0)
        .map_err(|_| AppError::MalformedValue {
            key,
            raw: raw.to_string(),
        })
}

fn flag_line(key: &str, value: bool) -> String {
    format!("\"{key}\"=dword:0000000{}", u8::from(value))
}

fn hex_line(key: &str, value: u32, width: usize) -> String {
    let padding = "0".repeat(8 - width);
    format!("\"{key}\"=dword:{padding}{value:0width$x}")
}
