use std::{
    fs,
    path::{Path, PathBuf},
};

use optional_struct::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::default_config,
    error::Error,
    pattern::{Overflow, PatternOptions},
};

pub const HOME_CONFIG_FILE: &str = "life.ron";
pub const PROJECT_CONFIG_FILE: &str = ".life.ron";

/// Returns the path to the configuration directory, if a home directory can be found.
pub fn home_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("life"))
}

/// Deserialize a RON string into a ConfigFile.
pub fn parse_config_file(ron_str: &str) -> crate::Result<ConfigFile> {
    let options =
        ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    options
        .from_str(ron_str)
        .map_err(|e| Error::Config(format!("Failed to parse RON: {}", e)))
}

/// Merges the defaults, the home config and the project config, in that order. Empty strings are
/// skipped.
pub fn parse_config(home_config: &str, project_config: &str) -> crate::Result<Config> {
    let mut cnf = ConfigFile::default();

    if !home_config.is_empty() {
        let home_config = parse_config_file(home_config)
            .map_err(|e| Error::Config(format!("Failed to parse home config file: {}", e)))?;
        cnf = cnf.apply(home_config);
    }

    if !project_config.is_empty() {
        let project_config = parse_config_file(project_config)
            .map_err(|e| Error::Config(format!("Failed to parse project config file: {}", e)))?;
        cnf = cnf.apply(project_config);
    }
    Ok(cnf.build(default_config()))
}

fn read_if_exists(path: &Path) -> crate::Result<String> {
    if path.exists() {
        debug!("reading config file {}", path.display());
        fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })
    } else {
        Ok(String::new())
    }
}

/// Loads the configuration from an optional home config directory and a project directory.
pub fn load_config_from(home_dir: Option<&Path>, project_dir: &Path) -> crate::Result<Config> {
    let home_config = match home_dir {
        Some(dir) => read_if_exists(&dir.join(HOME_CONFIG_FILE))?,
        None => String::new(),
    };
    let project_config = read_if_exists(&project_dir.join(PROJECT_CONFIG_FILE))?;
    parse_config(&home_config, &project_config)
}

/// Loads the configuration by merging defaults, `~/.config/life/life.ron` and `.life.ron` in the
/// current directory.
pub fn load_config() -> crate::Result<Config> {
    let cwd = std::env::current_dir()?;
    load_config_from(home_config_dir().as_deref(), &cwd)
}

#[optional_struct(ConfigFile)]
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// The character marking a live cell in patterns.
    pub alive: char,

    /// What to do with patterns that have more lines than the grid has rows.
    pub overflow: Overflow,

    /// How many generations to run.
    pub generations: u64,
}

impl Config {
    pub fn to_ron(&self) -> crate::Result<String> {
        let pretty_config = ron::ser::PrettyConfig::default();
        ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| Error::Config(format!("Failed to serialize to RON: {}", e)))
    }

    /// Pattern parsing options derived from this configuration.
    pub fn pattern_options(&self) -> PatternOptions {
        PatternOptions::default()
            .with_alive(self.alive)
            .with_overflow(self.overflow)
    }
}
