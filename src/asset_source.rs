//! Access to source assets
//!
//! The generator never touches asset files directly. It asks an [`AssetSource`]
//! for the text of an asset and for a parsed markup tree, which keeps the
//! pipeline testable without a file system and lets other hosts plug in their
//! own asset loading.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, GeneratorResult, IoContext};
use crate::uxml::{ElementNode, parse_markup};

/// Loads asset content for the generator
pub trait AssetSource {
    /// Full text of the asset at `path`
    fn read_asset_text(&self, path: &Path) -> GeneratorResult<String>;

    /// Parse UXML text into an element tree
    fn parse_markup(&self, text: &str) -> ElementNode {
        parse_markup(text)
    }
}

/// Reads assets from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn read_asset_text(&self, path: &Path) -> GeneratorResult<String> {
        fs::read_to_string(path).with_io_context(&format!("Failed to read asset {}", path.display()))
    }
}

/// Asset source backed by a map of path to text
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetSource {
    assets: HashMap<PathBuf, String>,
}

impl InMemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.assets.insert(path.into(), text.into());
        self
    }
}

impl AssetSource for InMemoryAssetSource {
    fn read_asset_text(&self, path: &Path) -> GeneratorResult<String> {
        self.assets.get(path).cloned().ok_or_else(|| GeneratorError::Io {
            message: format!("Failed to read asset {}", path.display()),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "asset not found"),
        })
    }
}

/// Name of an asset as Unity shows it: the file name without extension
pub fn asset_name(path: &Path) -> GeneratorResult<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| GeneratorError::MissingAssetName {
            path: path.to_path_buf(),
        })
}
