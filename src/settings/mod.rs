pub mod codec;
pub mod import;
pub mod record;
pub mod registry;

pub use import::{RegeditImporter, RegistryImporter};
pub use record::{BUFFER_SIZES, SettingsRecord};
pub use registry::RegSection;
