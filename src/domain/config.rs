use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::storage::StoreOptions;

/// The name of the configuration file in the directory root.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Configuration for an employee directory.
///
/// This struct controls where the roster is stored, and whether writes are
/// mirrored back onto a seed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The runtime copy of the roster.
    ///
    /// This is the file that is read and written during normal operation.
    /// Relative paths are resolved against the directory root.
    data_file: PathBuf,

    /// The seed copy of the roster, if any.
    ///
    /// When the runtime copy does not exist, it is initialised from the seed.
    /// Relative paths are resolved against the directory root.
    seed_file: Option<PathBuf>,

    /// Whether successful writes are copied back onto the seed file.
    ///
    /// This has no effect unless a seed file is configured.
    pub mirror_to_seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_file: None,
            mirror_to_seed: false,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration from the directory root, falling back to the
    /// defaults if no configuration file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read or
    /// parsed.
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        match Self::load(&path) {
            Err(ConfigError::Read(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// The configured runtime data file, as written in the configuration.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// The configured seed file, if any, as written in the configuration.
    #[must_use]
    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }

    /// Sets the runtime data file.
    pub fn set_data_file(&mut self, path: PathBuf) {
        self.data_file = path;
    }

    /// Sets (or clears) the seed file.
    pub fn set_seed_file(&mut self, path: Option<PathBuf>) {
        self.seed_file = path;
    }

    /// Build store options for this configuration, resolving relative paths
    /// against `root`.
    #[must_use]
    pub fn store_options(&self, root: &Path) -> StoreOptions {
        StoreOptions {
            path: root.join(&self.data_file),
            seed: self.seed_file.as_ref().map(|seed| root.join(seed)),
            mirror_to_seed: self.mirror_to_seed,
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("runtime-data.json")
}

/// Failure to read or write the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] io::Error),

    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] io::Error),

    /// The configuration file is not valid TOML, or has invalid fields.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed_file: Option<PathBuf>,

        #[serde(default)]
        mirror_to_seed: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                seed_file,
                mirror_to_seed,
            } => Self {
                data_file,
                seed_file,
                mirror_to_seed,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            seed_file: config.seed_file,
            mirror_to_seed: config.mirror_to_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndata_file = \"live.json\"\nseed_file = \"seed/data.json\"\nmirror_to_seed = true\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_file(), Path::new("live.json"));
        assert_eq!(config.seed_file(), Some(Path::new("seed/data.json")));
        assert!(config.mirror_to_seed);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmirror_to_seed = \"yes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn load_or_default_without_file_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(tmp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.set_seed_file(Some(PathBuf::from("seed.json")));
        config.mirror_to_seed = true;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn store_options_resolve_against_root() {
        let mut config = Config::default();
        config.set_seed_file(Some(PathBuf::from("seed.json")));

        let options = config.store_options(Path::new("/srv/roster"));

        assert_eq!(options.path, Path::new("/srv/roster/runtime-data.json"));
        assert_eq!(options.seed.as_deref(), Some(Path::new("/srv/roster/seed.json")));
        assert!(!options.mirror_to_seed);
    }
}
