//! Configuration loading and discovery.
//!
//! Sources are layered with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `<config dir>/terato/config.<ext>`
//! 3. Project config: `.terato.<ext>` then `terato.<ext>`, in the closest
//!    ancestor directory that holds one (the walk stops at a `.git` boundary)
//! 4. Explicit files, in the order given
//! 5. `TERATO_*` environment variables
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`. When several files
//! exist in the same directory they are all merged, later extensions winning.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use terato_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("{:?} from {:?}", config.enable, sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::checks::Check;
use crate::error::{ConfigError, ConfigResult, LintResult};
use crate::lint::DEFAULT_CONTEXT_WORDS;
use crate::registry::CheckRegistry;

/// Default cap on input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for terato.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application.
    pub log_level: LogLevel,
    /// Where daily JSON-lines logs go; the platform data directory when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Run only these checks.
    pub enable: Option<Vec<Check>>,
    /// Run every check except these. Cannot be combined with `enable`.
    pub disable: Option<Vec<Check>>,
    /// Track pages: form feeds (and Markdown thematic breaks) start a new page.
    pub paging: bool,
    /// Tokens quoted as context for each finding (default 6).
    pub context_words: Option<usize>,
    /// Fail the `check` command when more findings than this are reported.
    pub max_findings: Option<usize>,
    /// Largest manuscript accepted, in bytes. 5 MiB when unset.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely; `max_input_bytes` is then ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// The check selection described by `enable` and `disable`.
    pub fn registry(&self) -> LintResult<CheckRegistry> {
        CheckRegistry::from_lists(self.enable.as_deref(), self.disable.as_deref())
    }

    /// Effective context size, at least one word.
    pub fn context_words(&self) -> usize {
        self.context_words.unwrap_or(DEFAULT_CONTEXT_WORDS).max(1)
    }

    /// Effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit).then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Minimum level of logged events.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-word trace events.
    Trace,
    /// Verbose output for debugging.
    Debug,
    /// Progress and summaries. The default.
    #[default]
    Info,
    /// Skipped patterns, unusable log files and similar.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files, ordered low to high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (`--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "terato";

/// Environment variable prefix for configuration keys.
pub const ENV_PREFIX: &str = "TERATO_";

/// Collects and merges configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader with user config on and a `.git` boundary.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config.
    #[must_use]
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    #[must_use]
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward walk at a directory containing `marker`.
    #[must_use]
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Walk all the way to the filesystem root.
    #[must_use]
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file; later files take precedence.
    #[must_use]
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load and merge every source.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
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

        // TERATO_PAGING=true, TERATO_DISABLE=[overused,mente], ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files of the closest directory that has any, low to high
    /// precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start);

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| dir.join(format!("{stem}.{ext}")))
                })
                .filter(|path| path.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }

            // Checked after the files so a config next to the marker still counts.
            if let Some(ref marker) = self.boundary_marker
                && dir != start
                && dir.join(marker).exists()
            {
                break;
            }

            current = dir.parent();
        }

        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| config_dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// The user config directory (`~/.config/terato/` on Linux).
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

/// The user data directory (`~/.local/share/terato/` on Linux), home of the
/// default log directory.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    let dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf()).ok()
}
