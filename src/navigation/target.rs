use crate::catalog::CategoryKey;

/// Screen to show, with the addressing parameters it needs.
///
/// Targets carry keys and indices only; every screen re-resolves its data
/// from the registry when it is entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NavigationTarget {
    /// Landing screen listing every category.
    #[default]
    CategoryList,
    /// Items of one category.
    CategoryDetail { category: CategoryKey },
    /// One item of a category, by position.
    ItemDetail { category: CategoryKey, index: usize },
}

impl NavigationTarget {
    pub fn category_detail(category: CategoryKey) -> Self {
        Self::CategoryDetail { category }
    }

    pub fn item_detail(category: CategoryKey, index: usize) -> Self {
        Self::ItemDetail { category, index }
    }

    /// Category this target addresses, if any.
    pub fn category(&self) -> Option<&CategoryKey> {
        match self {
            Self::CategoryList => None,
            Self::CategoryDetail { category } | Self::ItemDetail { category, .. } => {
                Some(category)
            }
        }
    }

    /// Screen that "back" leads to from this target.
    pub fn parent(&self) -> Option<NavigationTarget> {
        match self {
            Self::CategoryList => None,
            Self::CategoryDetail { .. } => Some(Self::CategoryList),
            Self::ItemDetail { category, .. } => Some(Self::CategoryDetail {
                category: category.clone(),
            }),
        }
    }

    /// Canonical path from the root to this target, both ends included.
    pub fn ancestry(&self) -> Vec<NavigationTarget> {
        let mut path = vec![self.clone()];
        while let Some(parent) = path.last().and_then(NavigationTarget::parent) {
            path.push(parent);
        }
        path.reverse();
        path
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::CategoryList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> CategoryKey {
        CategoryKey::new(raw).unwrap()
    }

    #[test]
    fn root_is_default() {
        assert_eq!(NavigationTarget::default(), NavigationTarget::CategoryList);
        assert!(NavigationTarget::default().is_root());
    }

    #[test]
    fn parent_chain() {
        let item = NavigationTarget::item_detail(key("Parques"), 2);
        assert_eq!(
            item.parent(),
            Some(NavigationTarget::category_detail(key("Parques")))
        );
        assert_eq!(
            NavigationTarget::category_detail(key("Parques")).parent(),
            Some(NavigationTarget::CategoryList)
        );
        assert_eq!(NavigationTarget::CategoryList.parent(), None);
    }

    #[test]
    fn ancestry_starts_at_root() {
        let item = NavigationTarget::item_detail(key("Hoteles"), 0);
        assert_eq!(
            item.ancestry(),
            vec![
                NavigationTarget::CategoryList,
                NavigationTarget::category_detail(key("Hoteles")),
                item.clone(),
            ]
        );
        assert_eq!(
            NavigationTarget::CategoryList.ancestry(),
            vec![NavigationTarget::CategoryList]
        );
    }
}
