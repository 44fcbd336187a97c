use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialnorm_core::{CoreError, SeedList};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialnorm";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub db_path: Option<PathBuf>,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
    pub numbers: SeedList,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            numbers: SeedList::default(),
        }
    }
}

impl AppConfig {
    /// Seed values to use on an empty store; empty when seeding is off.
    pub fn seed_list(&self) -> SeedList {
        if self.seed.enabled {
            self.seed.numbers.clone()
        } else {
            SeedList::disabled()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid db_path value: {0}")]
    InvalidDbPath(PathBuf),
    #[error("invalid seed.numbers: {0}")]
    InvalidSeedNumbers(#[source] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    db_path: Option<PathBuf>,
    seed: Option<SeedFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    enabled: Option<bool>,
    numbers: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(db_path) = parsed.db_path {
        if db_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDbPath(db_path));
        }
        config.db_path = Some(db_path);
    }

    if let Some(seed) = parsed.seed {
        if let Some(enabled) = seed.enabled {
            config.seed.enabled = enabled;
        }
        if let Some(numbers) = seed.numbers {
            config.seed.numbers =
                SeedList::new(numbers).map_err(ConfigError::InvalidSeedNumbers)?;
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, SeedFile};
    use dialnorm_core::{CoreError, DEFAULT_SEED_NUMBERS};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn defaults_seed_with_builtin_numbers() {
        let merged = merge_config(ConfigFile {
            db_path: None,
            seed: None,
        })
        .expect("merge");
        assert!(merged.db_path.is_none());
        assert!(merged.seed.enabled);
        assert_eq!(merged.seed_list().len(), DEFAULT_SEED_NUMBERS.len());
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            db_path: Some(PathBuf::from("/tmp/phones.sqlite3")),
            seed: Some(SeedFile {
                enabled: Some(true),
                numbers: Some(vec!["(555) 010-0000".to_string()]),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.db_path, Some(PathBuf::from("/tmp/phones.sqlite3")));
        assert_eq!(merged.seed_list().as_slice(), ["(555) 010-0000"]);
    }

    #[test]
    fn disabled_seed_yields_empty_list() {
        let parsed = ConfigFile {
            db_path: None,
            seed: Some(SeedFile {
                enabled: Some(false),
                numbers: None,
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(merged.seed_list().is_empty());
    }

    #[test]
    fn merge_config_rejects_blank_seed_numbers() {
        let parsed = ConfigFile {
            db_path: None,
            seed: Some(SeedFile {
                enabled: None,
                numbers: Some(vec!["555".to_string(), " ".to_string()]),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeedNumbers(CoreError::BlankSeedNumber(1))
        ));
    }

    #[test]
    fn merge_config_rejects_repeated_seed_numbers() {
        let parsed = ConfigFile {
            db_path: None,
            seed: Some(SeedFile {
                enabled: None,
                numbers: Some(vec!["555 0100".to_string(), "555 0100".to_string()]),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeedNumbers(CoreError::DuplicateSeedNumber(1))
        ));
    }

    #[test]
    fn merge_config_rejects_empty_db_path() {
        let parsed = ConfigFile {
            db_path: Some(PathBuf::new()),
            seed: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDbPath(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "db_path = \"phones.sqlite3\"\n[seed]\nnumbers = [\"555 0100\", \"555-0101\"]\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.db_path, Some(PathBuf::from("phones.sqlite3")));
        assert_eq!(config.seed_list().as_slice(), ["555 0100", "555-0101"]);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "host = \"localhost\"\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }
}
