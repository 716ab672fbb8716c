use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::NumStrConfig;
use super::validation::validate_config_result;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".numstr.toml";

/// How many parent directories are searched above the starting directory.
const MAX_PARENT_DIRECTORIES: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<NumStrConfig> {
    let config = toml::from_str::<NumStrConfig>(contents)?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load a config file named on the command line; errors are not swallowed.
pub fn load_config_file(path: &Path) -> Result<NumStrConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Configuration { message, .. } => Error::configuration_at(message, path),
        Error::Toml(toml_err) => Error::configuration_at(
            format!("Failed to parse {}: {}", path.display(), toml_err),
            path,
        ),
        other => other,
    })
}

/// Discovered config files are optional: unreadable or invalid files are
/// reported and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<NumStrConfig> {
    let contents = fs::read_to_string(config_path)
        .map_err(|e| report_read_error(config_path, &e))
        .ok()?;

    parse_and_validate_config(&contents)
        .inspect(|_| log::debug!("Using {}", config_path.display()))
        .map_err(|e| log::warn!("Ignoring {}: {}", config_path.display(), e))
        .ok()
}

fn report_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != ErrorKind::NotFound {
        log::warn!("Cannot read {}: {}", config_path.display(), error);
    }
}

/// `start` followed by its parents, at most `max_depth` directories in total
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Search `start` and its ancestors for `.numstr.toml`.
pub fn load_config_from(start: PathBuf) -> NumStrConfig {
    let searched = MAX_PARENT_DIRECTORIES + 1;
    directory_ancestors(start, searched)
        .find_map(|dir| try_load_config_from_path(&dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| {
            log::debug!("No {CONFIG_FILE_NAME} in {searched} directories; using defaults");
            NumStrConfig::default()
        })
}

pub fn load_config() -> NumStrConfig {
    std::env::current_dir()
        .map(load_config_from)
        .unwrap_or_else(|e| {
            log::warn!("Current directory unavailable ({e}); using defaults");
            NumStrConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_directory_ancestors_stops_at_root() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_parse_and_validate_rejects_unknown_preset() {
        let result = parse_and_validate_config("[format]\npreset = \"mars\"\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_parse_and_validate_rejects_invalid_values() {
        let result = parse_and_validate_config("[format]\ndecimal_separator = \"\"\n");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
