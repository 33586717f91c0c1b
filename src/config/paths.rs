use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const PREFIX_ENV: &str = "WINEPREFIX";
const DEFAULT_PREFIX_DIR: &str = ".wine";
const STORE_FILE: &str = "user.reg";
const IMPORT_FILE: &str = "wineasio-settings.reg";

#[derive(Debug, Clone)]
pub struct AppPaths {
    prefix: PathBuf,
    store_file: PathBuf,
    import_file: PathBuf,
}

impl AppPaths {
    pub fn discover(prefix_override: Option<PathBuf>) -> AppResult<Self> {
        let prefix = resolve_prefix(
            prefix_override,
            std::env::var_os(PREFIX_ENV),
            dirs::home_dir(),
        )?;
        let import_file = std::env::temp_dir().join(IMPORT_FILE);

        Ok(Self::new(prefix, import_file))
    }

    pub fn new(prefix: PathBuf, import_file: PathBuf) -> Self {
        let store_file = prefix.join(STORE_FILE);
        Self {
            prefix,
            store_file,
            import_file,
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn import_file(&self) -> &Path {
        &self.import_file
    }
}

fn resolve_prefix(
    prefix_override: Option<PathBuf>,
    env_prefix: Option<OsString>,
    home: Option<PathBuf>,
) -> AppResult<PathBuf> {
    if let Some(prefix) = prefix_override.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(prefix);
    }

    if let Some(prefix) = env_prefix.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(prefix));
    }

    let home = home
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(DEFAULT_PREFIX_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_environment() {
        let prefix = resolve_prefix(
            Some(PathBuf::from("/opt/prefix")),
            Some(OsString::from("/env/prefix")),
            Some(PathBuf::from("/home/dev")),
        )
        .expect("prefix should resolve");
        assert_eq!(prefix, PathBuf::from("/opt/prefix"));
    }

    #[test]
    fn environment_beats_home() {
        let prefix = resolve_prefix(
            None,
            Some(OsString::from("/env/prefix")),
            Some(PathBuf::from("/home/dev")),
        )
        .expect("prefix should resolve");
        assert_eq!(prefix, PathBuf::from("/env/prefix"));
    }

    #[test]
    fn empty_environment_falls_back_to_home() {
        let prefix = resolve_prefix(None, Some(OsString::new()), Some(PathBuf::from("/home/dev")))
            .expect("prefix should resolve");
        assert_eq!(prefix, PathBuf::from("/home/dev/.wine"));
    }

    #[test]
    fn missing_home_is_config_error() {
        let result = resolve_prefix(None, None, None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn store_file_lives_in_prefix() {
        let paths = AppPaths::new(PathBuf::from("/p"), PathBuf::from("/tmp/x.reg"));
        assert_eq!(paths.store_file(), Path::new("/p/user.reg"));
        assert_eq!(paths.import_file(), Path::new("/tmp/x.reg"));
    }
}
