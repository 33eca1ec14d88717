/// User settings
///
/// Settings are read from a JSON file in the user's config directory:
/// - Linux: ~/.config/photo-portfolio/config.json
/// - macOS: ~/Library/Application Support/photo-portfolio/config.json
/// - Windows: %APPDATA%\photo-portfolio\config.json
///
/// `PHOTO_PORTFOLIO_CONFIG` overrides the location. Every field is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::router::Route;
use crate::state::scroll::DEFAULT_SCROLL_THRESHOLD;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "PHOTO_PORTFOLIO_CONFIG";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Route shown at startup ("/" or "/gallery")
    pub start_path: String,
    /// Home page scroll offset at which the header turns solid
    pub scroll_threshold: f32,
    /// JSON catalog replacing the built-in photos
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: Route::Home.path().to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the config file should be
    pub fn get_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-portfolio");
        path.push("config.json");
        Some(path)
    }

    /// The route to open first, falling back to Home for unknown paths
    pub fn start_route(&self) -> Route {
        Route::from_path(&self.start_path).unwrap_or_else(|| {
            tracing::warn!("⚠️  Unknown start path {:?}, opening home", self.start_path);
            Route::Home
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.start_route(), Route::Home);
        assert_eq!(config.scroll_threshold, 50.0);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_json(
            r#"{ "start_path": "/gallery", "catalog_path": "/srv/photos/catalog.json" }"#,
        )
        .unwrap();

        assert_eq!(config.start_route(), Route::Gallery);
        assert_eq!(config.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/photos/catalog.json"))
        );
    }

    #[test]
    fn test_unknown_start_path_opens_home() {
        let config = Config::from_json(r#"{ "start_path": "/contact" }"#).unwrap();
        assert_eq!(config.start_route(), Route::Home);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/photo-portfolio.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        // A directory exists but can't be read as a file
        let result = Config::load_from(&std::env::temp_dir());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            Config::from_json(r#"{ "scroll_threshold": "high" }"#),
            Err(Error::Json(_))
        ));
    }
}
