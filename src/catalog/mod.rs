//! Static points-of-interest catalog.
//!
//! Data is loaded once at startup and never mutated; callers share the
//! registry through an `Arc`.

mod error;
mod provider;
mod registry;
mod types;

pub use error::{CatalogError, LookupError};
pub use provider::{CatalogProvider, CategoryEntries, StaticCatalog, BUNDLED_CATALOG};
pub use registry::{CategoryRegistry, TITLE_LABEL};
pub use types::{
    Category, CategoryKey, IconRef, Item, LabelRef, ResolvedCategory, RESERVED_KEY_CHARS,
};
