//! Category registry and catalog lookup.

use std::collections::HashSet;

use crate::catalog::error::{CatalogError, LookupError};
use crate::catalog::provider::CatalogProvider;
use crate::catalog::types::{Category, CategoryKey, Item, LabelRef, ResolvedCategory};

/// String-table entry holding the city title.
pub const TITLE_LABEL: &str = "ciudad";

/// Immutable set of categories, built once at startup.
///
/// Labels stay references into the provider's string table and are resolved
/// on demand.
pub struct CategoryRegistry {
    categories: Vec<Category>,
    provider: Box<dyn CatalogProvider + Send + Sync>,
}

impl std::fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryRegistry")
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl CategoryRegistry {
    /// Fold the provider's parallel sequences into one item list per category.
    ///
    /// Fails if a key repeats, has no items, or its three sequences differ
    /// in length.
    pub fn load<P>(provider: P) -> Result<Self, CatalogError>
    where
        P: CatalogProvider + Send + Sync + 'static,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();

        for key in provider.category_keys() {
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateKey { key });
            }
            let Some(entries) = provider.entries(&key) else {
                return Err(CatalogError::MissingEntries { key });
            };
            let names = entries.names.len();
            if entries.addresses.len() != names || entries.descriptions.len() != names {
                return Err(CatalogError::Misaligned {
                    key,
                    names,
                    addresses: entries.addresses.len(),
                    descriptions: entries.descriptions.len(),
                });
            }
            if names == 0 {
                return Err(CatalogError::MissingEntries { key });
            }

            let items = entries
                .names
                .iter()
                .zip(entries.addresses)
                .zip(entries.descriptions)
                .map(|((name, address), description)| Item {
                    name: name.clone(),
                    address: address.clone(),
                    description: description.clone(),
                })
                .collect();

            categories.push(Category {
                label: entries.label.clone(),
                icon: entries.icon.clone(),
                key,
                items,
            });
        }

        tracing::info!(categories = categories.len(), "Catalog loaded");

        Ok(Self {
            categories,
            provider: Box::new(provider),
        })
    }

    /// Categories in display order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| &c.key == key)
    }

    /// Display position of a category.
    pub fn position_of(&self, key: &CategoryKey) -> Option<usize> {
        self.categories.iter().position(|c| &c.key == key)
    }

    /// Resolve a label reference, falling back to the reference itself.
    pub fn label(&self, label: &LabelRef) -> String {
        self.provider
            .string(&label.0)
            .map(str::to_string)
            .unwrap_or_else(|| label.0.clone())
    }

    /// City title shown on the landing screen.
    pub fn title(&self) -> String {
        self.label(&LabelRef(TITLE_LABEL.to_string()))
    }

    /// Resolve a category by key. Unknown keys yield an empty category.
    pub fn resolve_category(&self, key: &CategoryKey) -> ResolvedCategory<'_> {
        match self.category(key) {
            Some(category) => ResolvedCategory {
                label: self.label(&category.label),
                icon: Some(&category.icon),
                items: &category.items,
            },
            None => {
                tracing::debug!(category = %key, "Unknown category key, resolving to empty");
                ResolvedCategory::empty(key)
            }
        }
    }

    /// Resolve one item by category key and index.
    pub fn resolve_item(&self, key: &CategoryKey, index: usize) -> Result<&Item, LookupError> {
        let items = self.resolve_category(key).items;
        items.get(index).ok_or_else(|| LookupError::IndexOutOfRange {
            category: key.clone(),
            index,
            len: items.len(),
        })
    }
}
