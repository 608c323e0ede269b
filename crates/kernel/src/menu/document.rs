//! Menu documents - menus stored as files in a directory.
//!
//! Each menu lives in its own file named after the menu: `main.yml`,
//! `footer.json`, `admin.toml`. The file holds the root node; children are
//! nested under `children`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::error::DocumentError;
use crate::models::Menu;

/// Maximum menu document size (1 MB). Larger files are rejected to keep a
/// malformed document from exhausting memory.
const MAX_DOCUMENT_SIZE: u64 = 1024 * 1024;

/// Characters that are invalid in filenames on Windows/NTFS.
const WINDOWS_INVALID_CHARS: &[char] = &[':', '*', '?', '"', '<', '>', '|'];

/// Supported document formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Extensions tried when looking up a menu, in lookup order.
    const EXTENSIONS: &'static [&'static str] = &["yml", "yaml", "json", "toml"];

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a menu from document content.
    pub fn parse(self, content: &str) -> Result<Menu> {
        let menu = match self {
            Self::Yaml => serde_yml::from_str(content).context("invalid menu YAML")?,
            Self::Json => serde_json::from_str(content).context("invalid menu JSON")?,
            Self::Toml => toml::from_str(content).context("invalid menu TOML")?,
        };
        Ok(menu)
    }
}

/// A directory of menu documents.
#[derive(Debug, Clone)]
pub struct MenuDocuments {
    dir: PathBuf,
}

impl MenuDocuments {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory documents are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all menus in the directory, sorted.
    ///
    /// Files with unknown extensions are ignored.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read menu directory {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.context("failed to read menu directory entry")?.path();
            if !path.is_file() || DocumentFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Load a menu by name.
    ///
    /// If the menu document does not set a name, the menu takes the
    /// document's name.
    pub fn load(&self, name: &str) -> Result<Menu> {
        validate_menu_name(name)?;

        let Some(path) = self.find(name) else {
            return Err(DocumentError::MenuNotFound {
                name: name.to_string(),
                dir: self.dir.clone(),
            }
            .into());
        };

        let mut menu = Self::load_file(&path)?;
        if menu.name.is_empty() {
            menu.set_name(name);
        } else if menu.name != name {
            warn!(
                file = %path.display(),
                menu = %menu.name,
                "menu name differs from document name"
            );
        }
        Ok(menu)
    }

    /// Load a menu from a single document file.
    pub fn load_file(path: &Path) -> Result<Menu> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            DocumentError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let size = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        if size > MAX_DOCUMENT_SIZE {
            anyhow::bail!(
                "menu document {} is too large ({size} bytes, limit {MAX_DOCUMENT_SIZE})",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let menu = format
            .parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        debug!(file = %path.display(), menu = %menu.name, "menu document loaded");
        Ok(menu)
    }

    /// Find the document for a menu, trying each known extension in order.
    fn find(&self, name: &str) -> Option<PathBuf> {
        DocumentFormat::EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
    }
}

/// Validate that a menu name is safe for use in a filename.
fn validate_menu_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("menu name is empty");
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        anyhow::bail!("menu name contains path separator or null byte: {name}");
    }
    if name.contains("..") {
        anyhow::bail!("menu name contains '..': {name}");
    }
    if let Some(c) = name.chars().find(|c| WINDOWS_INVALID_CHARS.contains(c)) {
        anyhow::bail!("menu name contains character '{c}' invalid on Windows: {name}");
    }
    Ok(())
}
