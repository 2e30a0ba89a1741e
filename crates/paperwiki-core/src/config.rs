//! Configuration for paperwiki
//!
//! Configuration lives in a single TOML file. The location is resolved from
//! the `--config` flag, then the `PAPERWIKI_CONFIG` environment variable,
//! then `paperwiki/config.toml` under the platform config directory. A
//! missing file yields the defaults; commands that need an unset value
//! report it at the point of use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PaperwikiError, Result};

/// Default extension for wiki note files
pub const DEFAULT_EXTENSION: &str = "wiki";

/// Top-level configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub editor: EditorConfig,
}

/// Where wiki notes and the paper library live
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding wiki note files
    pub wiki_dir: Option<PathBuf>,

    /// YAML file listing the papers selectable by filter
    pub library: Option<PathBuf>,

    /// Extension for wiki note files (without the dot)
    pub extension: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            wiki_dir: None,
            library: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// How the editor is invoked
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command: program followed by leading arguments
    pub command: Vec<String>,

    /// Open all notes in a single editor invocation
    pub batch: bool,

    /// Register the wiki directory with VimWiki via `-c` on each invocation
    pub register_wiki: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            command: Vec::new(),
            batch: true,
            register_wiki: false,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PaperwikiError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the active configuration.
    ///
    /// An explicitly given path must exist; the default location may be
    /// absent, in which case the defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paperwiki").join("config.toml"))
    }

    /// The wiki directory, with `~` expanded.
    ///
    /// Commands that resolve note paths call this before doing anything else.
    pub fn wiki_dir(&self) -> Result<PathBuf> {
        self.storage
            .wiki_dir
            .as_deref()
            .map(expand_tilde)
            .ok_or(PaperwikiError::WikiDirNotConfigured)
    }

    /// The paper library path, with `~` expanded.
    pub fn library_path(&self) -> Result<PathBuf> {
        self.storage
            .library
            .as_deref()
            .map(expand_tilde)
            .ok_or(PaperwikiError::LibraryNotConfigured)
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.wiki_dir.is_none());
        assert!(config.storage.library.is_none());
        assert_eq!(config.storage.extension, "wiki");
        assert!(config.editor.command.is_empty());
        assert!(config.editor.batch);
        assert!(!config.editor.register_wiki);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            storage: StorageConfig {
                wiki_dir: Some(PathBuf::from("/wiki/papers")),
                library: Some(PathBuf::from("/papers/library.yaml")),
                extension: "md".to_string(),
            },
            editor: EditorConfig {
                command: vec!["vim".to_string(), "-p".to_string()],
                batch: false,
                register_wiki: true,
            },
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage]\nwiki_dir = \"/wiki\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.storage.wiki_dir, Some(PathBuf::from("/wiki")));
        assert_eq!(loaded.storage.extension, "wiki");
        assert!(loaded.editor.batch);
    }

    #[test]
    fn test_resolve_explicit_missing_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing)).is_err());
    }

    #[test]
    fn test_wiki_dir_not_configured() {
        let config = Config::default();
        assert!(matches!(
            config.wiki_dir(),
            Err(PaperwikiError::WikiDirNotConfigured)
        ));
    }

    #[test]
    fn test_library_not_configured() {
        let config = Config::default();
        assert!(matches!(
            config.library_path(),
            Err(PaperwikiError::LibraryNotConfigured)
        ));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde(Path::new("~/wiki"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("wiki"));
        }

        let absolute = expand_tilde(Path::new("/wiki"));
        assert_eq!(absolute, PathBuf::from("/wiki"));
    }
}
