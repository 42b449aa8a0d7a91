//! Configuration loading and discovery.
//!
//! Configuration comes from (lowest to highest precedence): built-in
//! defaults, the user config in the XDG config directory, project
//! config files found by walking up from the working directory
//! (stopping at a `.git` boundary), explicit `--config` files, and
//! `WORDWATCH_*` environment variables. TOML, YAML, and JSON are all
//! accepted; discovery looks for `wordwatch.<ext>` and
//! `.wordwatch.<ext>`.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::word_lists::ListPaths;

/// Default bound on the interesting-word list.
pub const DEFAULT_INTERESTING_WORDS: usize = 10;

/// Default debounce window for coalescing rapid saves, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// The configuration for wordwatch.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to stderr if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Endpoint URL reports are POSTed to. Unset means stdout.
    pub endpoint: Option<String>,
    /// Path to the general vocabulary list (plain format).
    pub vocabulary_list: Option<Utf8PathBuf>,
    /// Path to the advanced word list (plain format).
    pub fancy_list: Option<Utf8PathBuf>,
    /// Path to the academic word list (categorized format).
    pub academic_list: Option<Utf8PathBuf>,
    /// Upper bound on the interesting-word list.
    pub interesting_words: usize,
    /// Debounce window for coalescing rapid saves, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            endpoint: None,
            vocabulary_list: None,
            fancy_list: None,
            academic_list: None,
            interesting_words: DEFAULT_INTERESTING_WORDS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Resolve the three word-list paths, if all are configured.
    pub fn list_paths(&self) -> Option<ListPaths> {
        Some(ListPaths {
            vocabulary: self.vocabulary_list.clone()?,
            fancy: self.fancy_list.clone()?,
            academic: self.academic_list.clone()?,
        })
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "wordwatch";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/wordwatch/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load. Later files win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest): environment, explicit files,
    /// project config (closest to search root), user config, defaults.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // WORDWATCH_ENDPOINT=http://..., WORDWATCH_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("WORDWATCH_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            endpoint = ?config.endpoint,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching files from the closest directory that has
    /// any match: dotfiles before regular files (figment merges
    /// last-wins).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_dir = proj_dirs.config_dir();

    for ext in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("config.{ext}"));
        if config_path.is_file() {
            return Utf8PathBuf::from_path_buf(config_path).ok();
        }
    }

    None
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.interesting_words, DEFAULT_INTERESTING_WORDS);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(config.endpoint.is_none());
        assert!(config.list_paths().is_none());
    }

    #[test]
    fn loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"log_level = "debug"
endpoint = "http://localhost:9200/stats"
interesting_words = 25
"#,
        )
        .unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:9200/stats")
        );
        assert_eq!(config.interesting_words, 25);
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, r#"log_level = "warn""#).unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, r#"log_level = "error""#).unwrap();

        let base = Utf8PathBuf::try_from(base).unwrap();
        let over = Utf8PathBuf::try_from(over).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn project_config_discovery_walks_up() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        let deep = project.join("src").join("deep");
        fs::create_dir_all(&deep).unwrap();
        fs::write(project.join(".wordwatch.toml"), r#"log_level = "debug""#).unwrap();

        let deep = Utf8PathBuf::try_from(deep).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&deep)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!sources.project_files.is_empty());
    }

    #[test]
    fn boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".wordwatch.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn regular_file_overrides_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".wordwatch.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("wordwatch.toml"), r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn yaml_config_discovered() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wordwatch.yaml"), "log_level: debug\n").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn list_paths_requires_all_three() {
        let mut config = Config {
            vocabulary_list: Some(Utf8PathBuf::from("vocab.txt")),
            fancy_list: Some(Utf8PathBuf::from("fancy.txt")),
            ..Config::default()
        };
        assert!(config.list_paths().is_none());
        config.academic_list = Some(Utf8PathBuf::from("awl.txt"));
        let paths = config.list_paths().unwrap();
        assert_eq!(paths.vocabulary.as_str(), "vocab.txt");
    }
}
