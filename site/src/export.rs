//! Static export: one HTML document per route, written under `out_dir`.
//!
//! ```text
//! dist/
//! ├── index.html            /
//! ├── features/index.html   /features
//! ├── 404.html              wildcard
//! └── styles.css            only when CSS is linked
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::routes::Page;
use crate::styles::{SITE_CSS, STYLESHEET_FILE};

/// A file written by [`export_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    /// Page rendered into the file; `None` for the stylesheet
    pub page: Option<Page>,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Location of a page's document relative to the export root.
pub fn document_path(page: Page) -> PathBuf {
    match page {
        Page::Home => PathBuf::from("index.html"),
        Page::Features => Path::new("features").join("index.html"),
        Page::NotFound => PathBuf::from("404.html"),
    }
}

/// Renders every route and writes the result to `config.out_dir`.
///
/// Existing files are overwritten; nothing else in the directory is touched.
pub fn export_site(config: &SiteConfig) -> Result<Vec<ExportedFile>> {
    config.validate()?;
    let out_dir = &config.out_dir;
    info!(out_dir = %out_dir.display(), "exporting site");

    let mut written = Vec::with_capacity(Page::ALL.len() + 1);
    for page in Page::ALL {
        let html = crate::render_document(page, config);
        let path = out_dir.join(document_path(page));
        write_file(&path, &html)?;
        debug!(route = page.pattern(), path = %path.display(), "wrote page");
        written.push(ExportedFile {
            page: Some(page),
            path,
            bytes: html.len(),
        });
    }

    if !config.inline_css {
        let path = out_dir.join(STYLESHEET_FILE);
        write_file(&path, SITE_CSS)?;
        written.push(ExportedFile {
            page: None,
            path,
            bytes: SITE_CSS.len(),
        });
    }

    info!(files = written.len(), "export complete");
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path, inline_css: bool) -> SiteConfig {
        SiteConfig {
            out_dir: dir.join("dist"),
            inline_css,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn writes_one_document_per_route() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);

        let files = export_site(&config).unwrap();

        assert_eq!(files.len(), 3);
        for page in Page::ALL {
            let path = config.out_dir.join(document_path(page));
            let html = std::fs::read_to_string(&path).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{}", path.display());
        }
        assert!(!config.out_dir.join(STYLESHEET_FILE).exists());
    }

    #[test]
    fn not_found_document_has_no_cards() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);
        export_site(&config).unwrap();

        let html = std::fs::read_to_string(config.out_dir.join("404.html")).unwrap();
        assert!(html.contains("404 - Page Not Found"));
        assert!(!html.contains("feature-card"));
    }

    #[test]
    fn linked_css_writes_stylesheet_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), false);

        let files = export_site(&config).unwrap();

        assert_eq!(files.len(), 4);
        let css = files.iter().find(|file| file.page.is_none()).unwrap();
        assert_eq!(std::fs::read_to_string(&css.path).unwrap(), SITE_CSS);
        let home = std::fs::read_to_string(config.out_dir.join("index.html")).unwrap();
        assert!(home.contains(r#"href="/styles.css""#));
        assert!(!home.contains("<style>"));
    }

    #[test]
    fn export_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);

        let first = export_site(&config).unwrap();
        let second = export_site(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reports_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("dist");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = config_in(dir.path(), true);

        let err = export_site(&config).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
