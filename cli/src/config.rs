//! Configuration for sqlfmt
//!
//! Settings come from an optional `sqlfmt.toml`, then command-line flags
//! override individual keys. The merged result is validated before any
//! input is read.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use coltypes_core::{PrettyCfg, PrettyCfgError};

pub const CONFIG_FILE: &str = "sqlfmt.toml";

/// Contents of a `sqlfmt.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub use_tabs: Option<bool>,

    #[serde(default)]
    pub line_width: Option<i32>,

    #[serde(default)]
    pub tab_width: Option<i32>,

    #[serde(default)]
    pub simplify: Option<bool>,

    #[serde(default)]
    pub align: Option<bool>,

    #[serde(default)]
    pub json_fmt: Option<bool>,
}

/// Values given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub use_tabs: Option<bool>,
    pub line_width: Option<i32>,
    pub tab_width: Option<i32>,
    pub no_simplify: bool,
    pub no_align: bool,
}

impl Config {
    /// Load from the default config file, if present
    pub fn load() -> Result<Self, Error> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))
    }

    /// Merge file settings with flag overrides and validate the result
    pub fn resolve(&self, overrides: &Overrides) -> Result<PrettyCfg, Error> {
        let defaults = PrettyCfg::default();
        let cfg = PrettyCfg {
            use_tabs: overrides
                .use_tabs
                .or(self.use_tabs)
                .unwrap_or(defaults.use_tabs),
            line_width: overrides
                .line_width
                .or(self.line_width)
                .unwrap_or(defaults.line_width),
            tab_width: overrides
                .tab_width
                .or(self.tab_width)
                .unwrap_or(defaults.tab_width),
            simplify: !overrides.no_simplify && self.simplify.unwrap_or(defaults.simplify),
            align: !overrides.no_align && self.align.unwrap_or(defaults.align),
            json_fmt: self.json_fmt.unwrap_or(defaults.json_fmt),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] PrettyCfgError),
}

pub type ConfigError = Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default().resolve(&Overrides::default()).unwrap();
        assert_eq!(cfg, PrettyCfg::default());
    }

    #[test]
    fn file_keys_are_camel_case() {
        let config: Config = toml::from_str(
            r#"
            useTabs = true
            lineWidth = 100
            tabWidth = 2
            jsonFmt = false
        "#,
        )
        .unwrap();
        let cfg = config.resolve(&Overrides::default()).unwrap();
        assert!(cfg.use_tabs);
        assert_eq!(cfg.line_width, 100);
        assert_eq!(cfg.tab_width, 2);
        assert!(!cfg.json_fmt);
        assert!(cfg.simplify);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("width = 3").is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = Config {
            line_width: Some(100),
            use_tabs: Some(true),
            ..Config::default()
        };
        let overrides = Overrides {
            line_width: Some(20),
            use_tabs: Some(false),
            no_align: true,
            ..Overrides::default()
        };
        let cfg = config.resolve(&overrides).unwrap();
        assert_eq!(cfg.line_width, 20);
        assert!(!cfg.use_tabs);
        assert!(!cfg.align);
    }

    #[test]
    fn invalid_widths() {
        let overrides = Overrides {
            line_width: Some(0),
            ..Overrides::default()
        };
        let err = Config::default().resolve(&overrides).unwrap_err();
        assert_eq!(err.to_string(), "line length must be > 0: 0");

        let config = Config {
            tab_width: Some(-1),
            ..Config::default()
        };
        let err = config.resolve(&Overrides::default()).unwrap_err();
        assert_eq!(err.to_string(), "tab width must be > 0: -1");
    }

    #[test]
    fn missing_file() {
        let err = Config::load_from(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
