//! Presentation-ready screen models.
//!
//! A [`ScreenModel`] is resolved from a [`NavigationTarget`] against the
//! registry each time a screen is entered. The category list and the item
//! list share one list template.

use serde::Serialize;
use std::fmt;

use crate::catalog::{CategoryRegistry, Item};
use crate::navigation::NavigationTarget;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenModel {
    List(ListScreen),
    Detail(DetailScreen),
    NotFound(NotFoundScreen),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListScreen {
    pub title: String,
    pub icon: Option<String>,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub label: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailScreen {
    pub title: String,
    pub icon: Option<String>,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundScreen {
    pub title: String,
    pub message: String,
}

impl ScreenModel {
    pub fn resolve(registry: &CategoryRegistry, target: &NavigationTarget) -> Self {
        match target {
            NavigationTarget::CategoryList => Self::List(ListScreen {
                title: registry.title(),
                icon: None,
                rows: registry
                    .list_categories()
                    .iter()
                    .map(|category| ListRow {
                        label: registry.label(&category.label),
                        icon: Some(category.icon.as_str().to_string()),
                    })
                    .collect(),
            }),
            NavigationTarget::CategoryDetail { category } => {
                let resolved = registry.resolve_category(category);
                let icon = resolved.icon.map(|i| i.as_str().to_string());
                Self::List(ListScreen {
                    rows: resolved
                        .items
                        .iter()
                        .map(|item| ListRow {
                            label: item.name.clone(),
                            icon: icon.clone(),
                        })
                        .collect(),
                    title: resolved.label,
                    icon,
                })
            }
            NavigationTarget::ItemDetail { category, index } => {
                let resolved = registry.resolve_category(category);
                match registry.resolve_item(category, *index) {
                    Ok(item) => Self::Detail(DetailScreen {
                        icon: resolved.icon.map(|i| i.as_str().to_string()),
                        title: resolved.label,
                        item: item.clone(),
                    }),
                    Err(err) => {
                        tracing::warn!(route = %target, error = %err, "Item not found");
                        Self::NotFound(NotFoundScreen {
                            title: resolved.label,
                            message: err.to_string(),
                        })
                    }
                }
            }
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::List(screen) => &screen.title,
            Self::Detail(screen) => &screen.title,
            Self::NotFound(screen) => &screen.title,
        }
    }

    /// Number of selectable rows; zero for non-list screens.
    pub fn row_count(&self) -> usize {
        match self {
            Self::List(screen) => screen.rows.len(),
            _ => 0,
        }
    }
}

/// Plain-text rendering used by `--print`.
impl fmt::Display for ScreenModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", "=".repeat(self.title().chars().count()))?;
        match self {
            Self::List(screen) => {
                for (index, row) in screen.rows.iter().enumerate() {
                    writeln!(f, "{:>3}. {}", index, row.label)?;
                }
            }
            Self::Detail(screen) => {
                writeln!(f, "{}", screen.item.name)?;
                writeln!(f, "{}", screen.item.address)?;
                writeln!(f, "{}", screen.item.description)?;
            }
            Self::NotFound(screen) => {
                writeln!(f, "Not found: {}", screen.message)?;
            }
        }
        Ok(())
    }
}

/// Labels for each entry of a back-stack, root first.
pub fn breadcrumb(registry: &CategoryRegistry, stack: &[NavigationTarget]) -> Vec<String> {
    stack
        .iter()
        .map(|target| match target {
            NavigationTarget::CategoryList => registry.title(),
            NavigationTarget::CategoryDetail { category } => {
                registry.resolve_category(category).label
            }
            NavigationTarget::ItemDetail { category, index } => registry
                .resolve_item(category, *index)
                .map(|item| item.name.clone())
                .unwrap_or_else(|_| format!("#{index}")),
        })
        .collect()
}
