use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::VersepagerConfig;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".versepager.toml";

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config document from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<VersepagerConfig, ConfigError> {
    toml::from_str::<VersepagerConfig>(contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a config file that the user named explicitly. Missing or malformed
/// files are errors.
pub fn load_config_from(path: &Path) -> Result<VersepagerConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|e| ConfigError::read(path, e))?;
    parse_config(&contents, path)
}

/// Try one candidate path during discovery; anything unusable is skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<VersepagerConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents, config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only real failures are worth a warning, not a file that isn't there
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/versepager/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("versepager").join("config.toml"))
}

/// Candidate files in lookup order starting from `start`
pub fn config_candidates(start: PathBuf) -> Vec<PathBuf> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .collect()
}

/// Discover the nearest config file, falling back to defaults.
pub fn load_config() -> VersepagerConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return VersepagerConfig::default();
        }
    };

    config_candidates(current)
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            log::debug!("No config file found. Using default config.");
            VersepagerConfig::default()
        })
}
