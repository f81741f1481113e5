use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters a category key may never contain.
///
/// `/` separates route segments; `,` was the delimiter used to join item
/// lists into a single route argument.
pub const RESERVED_KEY_CHARS: [char; 2] = ['/', ','];

/// Stable identity of a category (e.g. "Restaurantes").
///
/// Keys travel through route strings, so they are checked on construction
/// and guaranteed to round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Build a key, rejecting empty strings and reserved characters.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() || key.contains(RESERVED_KEY_CHARS) {
            return None;
        }
        Some(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CategoryKey::new(raw.clone()).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid category key '{}'", raw))
        })
    }
}

/// Reference into the catalog string table (e.g. "restaurantes").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelRef(pub String);

/// Icon identifier as provided by the catalog (e.g. "parque").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One point of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub address: String,
    pub description: String,
}

/// A category together with the items it owns, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryKey,
    pub label: LabelRef,
    pub icon: IconRef,
    pub items: Vec<Item>,
}

/// Result of looking a category up by key.
///
/// Unknown keys resolve to [`ResolvedCategory::empty`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory<'a> {
    /// Display label, already resolved through the string table.
    pub label: String,
    pub icon: Option<&'a IconRef>,
    pub items: &'a [Item],
}

impl ResolvedCategory<'_> {
    pub fn empty(key: &CategoryKey) -> Self {
        Self {
            label: key.as_str().to_string(),
            icon: None,
            items: &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
