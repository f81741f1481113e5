use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::types::CategoryKey;

/// Errors raised while loading a catalog.
///
/// These only occur at startup; once a registry exists, lookups never fail
/// except for [`LookupError`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{origin}': {source}")]
    ParseError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Category '{key}' is listed more than once")]
    DuplicateKey { key: CategoryKey },

    #[error("Category '{key}' has no items in the catalog")]
    MissingEntries { key: CategoryKey },

    #[error(
        "Category '{key}' has misaligned sequences: {names} names, {addresses} addresses, {descriptions} descriptions"
    )]
    Misaligned {
        key: CategoryKey,
        names: usize,
        addresses: usize,
        descriptions: usize,
    },
}

/// Errors from resolving an item inside a loaded registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Item {index} is out of range for '{category}' ({len} items)")]
    IndexOutOfRange {
        category: CategoryKey,
        index: usize,
        len: usize,
    },
}
