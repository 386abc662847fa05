//! Configuration file location and persistence
//!
//! The file lives at `<home>/.mendix-pvm.json`. The `MX_PVM_CONFIG`
//! environment variable overrides the full path.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Config;
use crate::error::{self, PvmError, Result};
use crate::launcher::Launcher;

/// Configuration file name under the user's home directory
pub const CONFIG_FILE_NAME: &str = ".mendix-pvm.json";

/// Environment variable overriding the configuration file path
pub const CONFIG_PATH_ENV: &str = "MX_PVM_CONFIG";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(PvmError::HomeDirUnavailable)
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    Ok(home_dir()?.join(CONFIG_FILE_NAME))
}

/// Load and validate the configuration
///
/// A missing file is created with platform defaults first.
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

/// Make sure the configuration file exists and return its path
pub fn ensure_file() -> Result<PathBuf> {
    let path = config_path()?;
    read_or_create(&path)?;
    Ok(path)
}

/// Open the configuration file with the system handler
///
/// Does not validate, so a broken configuration can always be repaired.
pub fn open(launcher: &dyn Launcher) -> Result<PathBuf> {
    let path = ensure_file()?;
    launcher.launch(&path)?;
    Ok(path)
}

pub(crate) fn load_from(path: &Path) -> Result<Config> {
    let config = read_or_create(path)?;
    config.validate()?;
    Ok(config)
}

fn read_or_create(path: &Path) -> Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("Loaded configuration from {}", path.display());
            Config::from_json(&content).map_err(|e| match e {
                PvmError::ConfigParseFailed { reason, .. } => {
                    error::config::parse_failed(path.display().to_string(), reason)
                }
                other => other,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = Config::platform_default(&home_dir()?);
            save(path, &config)?;
            info!("Created default configuration at {}", path.display());
            Ok(config)
        }
        Err(e) => Err(error::config::read_failed(
            path.display().to_string(),
            e.to_string(),
        )),
    }
}

/// Write the configuration to `path`, creating parent directories
pub fn save(path: &Path, config: &Config) -> Result<()> {
    let write_failed = |e: std::io::Error| {
        error::config::write_failed(path.display().to_string(), e.to_string())
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    std::fs::write(path, config.to_json()?).map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::tests::RecordingLauncher;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_config(path: &Path, versions: &Path, projects: &Path) {
        let config = Config {
            version_directory: versions.to_path_buf(),
            project_directory: projects.to_path_buf(),
        };
        save(path, &config).unwrap();
    }

    #[test]
    fn test_load_from_valid_file() {
        let temp = TempDir::new().unwrap();
        let versions = temp.path().join("versions");
        let projects = temp.path().join("projects");
        std::fs::create_dir_all(&versions).unwrap();
        std::fs::create_dir_all(&projects).unwrap();
        let path = temp.path().join("config.json");
        write_config(&path, &versions, &projects);

        let config = load_from(&path).unwrap();

        assert_eq!(config.version_directory, versions);
        assert_eq!(config.project_directory, projects);
    }

    #[test]
    fn test_load_from_invalid_roots() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        write_config(&path, &temp.path().join("a"), &temp.path().join("b"));

        let err = load_from(&path).unwrap_err();

        assert!(matches!(err, PvmError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_from_malformed_json_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ \"VersionDirectory\": ").unwrap();

        let err = load_from(&path).unwrap_err();

        match err {
            PvmError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with("config.json"));
            }
            other => panic!("Expected ConfigParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_read_or_create_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let config = read_or_create(&path).unwrap();

        assert!(path.exists());
        let written = Config::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, config);
        assert!(config.project_directory.ends_with("Mendix"));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        let original = std::env::var_os(CONFIG_PATH_ENV);
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &path);
        }

        let resolved = config_path().unwrap();

        unsafe {
            match original {
                Some(o) => std::env::set_var(CONFIG_PATH_ENV, o),
                None => std::env::remove_var(CONFIG_PATH_ENV),
            }
        }
        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_open_creates_file_and_launches_it() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        let original = std::env::var_os(CONFIG_PATH_ENV);
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &path);
        }

        let launcher = RecordingLauncher::default();
        let opened = open(&launcher);

        unsafe {
            match original {
                Some(o) => std::env::set_var(CONFIG_PATH_ENV, o),
                None => std::env::remove_var(CONFIG_PATH_ENV),
            }
        }
        assert_eq!(opened.unwrap(), path);
        assert!(path.exists());
        assert_eq!(launcher.launched(), vec![path]);
    }
}
