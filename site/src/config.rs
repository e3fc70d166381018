//! Site configuration.
//!
//! Loaded from an optional TOML file; every key has a default, so an empty
//! file (or no file) yields [`SiteConfig::default`].
//!
//! ```toml
//! title = "Pension & ISA"
//! lang = "en"
//! out_dir = "dist"
//! inline_css = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::components::Stylesheet;
use crate::error::{Result, SiteError};

pub const DEFAULT_TITLE: &str = "Pension & ISA";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name used in every `<title>`
    pub title: String,
    /// `lang` attribute of the documents
    pub lang: String,
    /// Where `build` writes the exported site
    pub out_dir: PathBuf,
    /// Inline the stylesheet into each document instead of linking `styles.css`
    pub inline_css: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lang: "en".to_string(),
            out_dir: PathBuf::from("dist"),
            inline_css: true,
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw, path)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Parses and validates config text that did not come from a file.
    pub fn from_toml(raw: &str) -> Result<Self> {
        Self::parse(raw, Path::new("<inline>"))
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        let config: SiteConfig = toml::from_str(raw).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SiteError::InvalidConfig("title must not be empty".into()));
        }
        if self.lang.trim().is_empty() {
            return Err(SiteError::InvalidConfig("lang must not be empty".into()));
        }
        Ok(())
    }

    pub fn stylesheet(&self) -> Stylesheet {
        if self.inline_css {
            Stylesheet::Inline
        } else {
            Stylesheet::Linked
        }
    }
}
