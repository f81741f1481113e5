//! Catalog data sources.
//!
//! A provider hands out raw resource data: for each category key, three
//! index-aligned sequences (names, addresses, descriptions) plus label and
//! icon references, and a string table for labels. The bundled catalog is
//! compiled into the binary; an alternate file in the same format can be
//! loaded at startup.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{CategoryKey, IconRef, LabelRef};

/// Catalog shipped with the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../resources/catalog.toml");

/// Raw per-category resource data, borrowed from the provider.
#[derive(Debug, Clone, Copy)]
pub struct CategoryEntries<'a> {
    pub label: &'a LabelRef,
    pub icon: &'a IconRef,
    pub names: &'a [String],
    pub addresses: &'a [String],
    pub descriptions: &'a [String],
}

/// Source of category and string-table data.
pub trait CatalogProvider {
    /// Category keys in display order.
    fn category_keys(&self) -> Vec<CategoryKey>;

    /// Raw sequences for a category, or `None` for an unknown key.
    fn entries(&self, key: &CategoryKey) -> Option<CategoryEntries<'_>>;

    /// Look up a string-table entry.
    fn string(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    strings: HashMap<String, String>,
    #[serde(default, rename = "category")]
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    key: CategoryKey,
    label: LabelRef,
    icon: IconRef,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    addresses: Vec<String>,
    #[serde(default)]
    descriptions: Vec<String>,
}

/// TOML-backed catalog.
#[derive(Debug)]
pub struct StaticCatalog {
    strings: HashMap<String, String>,
    categories: Vec<CategoryRecord>,
}

impl StaticCatalog {
    /// Parse the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUNDLED_CATALOG, "<bundled>")
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse catalog TOML. `origin` only appears in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| CatalogError::ParseError {
            origin: origin.to_string(),
            source: e,
        })?;
        Ok(Self {
            strings: file.strings,
            categories: file.categories,
        })
    }
}

impl CatalogProvider for StaticCatalog {
    fn category_keys(&self) -> Vec<CategoryKey> {
        self.categories.iter().map(|c| c.key.clone()).collect()
    }

    fn entries(&self, key: &CategoryKey) -> Option<CategoryEntries<'_>> {
        self.categories
            .iter()
            .find(|c| &c.key == key)
            .map(|c| CategoryEntries {
                label: &c.label,
                icon: &c.icon,
                names: &c.names,
                addresses: &c.addresses,
                descriptions: &c.descriptions,
            })
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}
