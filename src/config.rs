//! Process configuration: environment switches and the optional build
//! settings file shipped in the resource bundle.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::resources::ResourceBundle;

pub const WINDOW_VAR: &str = "TUTORIAL_WINDOW";
pub const RESOURCES_VAR: &str = "TUTORIAL_RESOURCES";
pub const BUILD_SETTINGS: &str = "build_settings.json";

/// Which top-level window the application shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowKind {
    /// Label plus a "Next quote >" button.
    #[default]
    Quote,
    /// The bundled `success.jpg`.
    Image,
    /// A bare "Hello World!" surface.
    Hello,
}

impl FromStr for WindowKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "quote" => Ok(Self::Quote),
            "image" => Ok(Self::Image),
            "hello" => Ok(Self::Hello),
            other => Err(AppError::Config(format!(
                "{WINDOW_VAR}={other:?}; expected quote, image or hello"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub window: WindowKind,
    pub resource_root: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(WINDOW_VAR).ok(),
            env::var_os(RESOURCES_VAR).map(PathBuf::from),
        )
    }

    fn from_vars(window: Option<String>, resource_root: Option<PathBuf>) -> Result<Self> {
        let window = match window {
            Some(value) => value.parse()?,
            None => WindowKind::default(),
        };
        Ok(Self {
            window,
            resource_root: resource_root.filter(|p| !p.as_os_str().is_empty()),
        })
    }
}

/// Application metadata read from `build_settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub app_name: String,
    pub author: String,
    pub version: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            app_name: "Tutorial".to_owned(),
            author: String::new(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl BuildSettings {
    /// Load settings from the bundle. A missing file means defaults; a
    /// malformed one is an error.
    pub fn load(bundle: &ResourceBundle) -> Result<Self> {
        if !bundle.contains(BUILD_SETTINGS) {
            log::debug!("{BUILD_SETTINGS} not bundled, using defaults");
            return Ok(Self::default());
        }
        let text = bundle.read_to_string(BUILD_SETTINGS)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn window_kind_parsing() {
        assert_eq!("quote".parse::<WindowKind>().unwrap(), WindowKind::Quote);
        assert_eq!(" Image ".parse::<WindowKind>().unwrap(), WindowKind::Image);
        assert_eq!("HELLO".parse::<WindowKind>().unwrap(), WindowKind::Hello);
        assert_eq!("".parse::<WindowKind>().unwrap(), WindowKind::Quote);
        assert!(matches!(
            "splash".parse::<WindowKind>(),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn unset_variables_give_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.window, WindowKind::Quote);
        assert!(config.resource_root.is_none());
    }

    #[test]
    fn empty_resource_override_is_ignored() {
        let config = Config::from_vars(Some("image".into()), Some(PathBuf::new())).unwrap();
        assert_eq!(config.window, WindowKind::Image);
        assert!(config.resource_root.is_none());
    }

    #[test]
    fn build_settings_fill_missing_fields() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(BUILD_SETTINGS),
            r#"{ "app_name": "Quotes", "author": "Jane" }"#,
        )
        .unwrap();

        let settings = BuildSettings::load(&ResourceBundle::layered(dir.path())).unwrap();
        assert_eq!(settings.app_name, "Quotes");
        assert_eq!(settings.author, "Jane");
        assert_eq!(settings.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn missing_build_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let settings = BuildSettings::load(&ResourceBundle::layered(dir.path())).unwrap();
        assert_eq!(settings, BuildSettings::default());
    }

    #[test]
    fn malformed_build_settings_are_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(BUILD_SETTINGS), "{ app_name: ").unwrap();

        let result = BuildSettings::load(&ResourceBundle::layered(dir.path()));
        assert!(matches!(result, Err(AppError::Settings(_))));
    }
}
