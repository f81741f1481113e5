//! Route strings: the deep-link form of a [`NavigationTarget`].
//!
//! ```text
//! category_list
//! category_detail/<categoryKey>
//! item_detail/<categoryKey>/<itemIndex>
//! ```
//!
//! Keys never contain `/`; indices are plain base-10 digits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::CategoryKey;
use crate::navigation::target::NavigationTarget;

pub const ROUTE_SEPARATOR: char = '/';
pub const CATEGORY_LIST: &str = "category_list";
pub const CATEGORY_DETAIL: &str = "category_detail";
pub const ITEM_DETAIL: &str = "item_detail";

/// Errors from parsing a route string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Route is empty")]
    Empty,

    #[error("Unknown screen '{0}'")]
    UnknownScreen(String),

    #[error("Route '{route}' is missing its {segment}")]
    MissingSegment {
        route: String,
        segment: &'static str,
    },

    #[error("Route has unexpected trailing segment '{0}'")]
    TrailingSegment(String),

    #[error("Invalid category key '{0}'")]
    InvalidKey(String),

    #[error("Invalid item index '{0}'")]
    InvalidIndex(String),
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryList => f.write_str(CATEGORY_LIST),
            Self::CategoryDetail { category } => {
                write!(f, "{CATEGORY_DETAIL}{ROUTE_SEPARATOR}{category}")
            }
            Self::ItemDetail { category, index } => write!(
                f,
                "{ITEM_DETAIL}{ROUTE_SEPARATOR}{category}{ROUTE_SEPARATOR}{index}"
            ),
        }
    }
}

impl FromStr for NavigationTarget {
    type Err = RouteError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        if route.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut segments = route.split(ROUTE_SEPARATOR);
        let screen = segments.next().unwrap_or_default();
        let mut next = |segment: &'static str| {
            segments.next().ok_or_else(|| RouteError::MissingSegment {
                route: route.to_string(),
                segment,
            })
        };

        let target = match screen {
            CATEGORY_LIST => NavigationTarget::CategoryList,
            CATEGORY_DETAIL => NavigationTarget::CategoryDetail {
                category: parse_key(next("category key")?)?,
            },
            ITEM_DETAIL => {
                let category = parse_key(next("category key")?)?;
                let index = parse_index(next("item index")?)?;
                NavigationTarget::ItemDetail { category, index }
            }
            other => return Err(RouteError::UnknownScreen(other.to_string())),
        };

        if let Some(extra) = segments.next() {
            return Err(RouteError::TrailingSegment(extra.to_string()));
        }
        Ok(target)
    }
}

fn parse_key(segment: &str) -> Result<CategoryKey, RouteError> {
    CategoryKey::new(segment).ok_or_else(|| RouteError::InvalidKey(segment.to_string()))
}

fn parse_index(segment: &str) -> Result<usize, RouteError> {
    // `usize::from_str` accepts a leading '+'; routes only allow digits.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RouteError::InvalidIndex(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| RouteError::InvalidIndex(segment.to_string()))
}

impl Serialize for NavigationTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NavigationTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> CategoryKey {
        CategoryKey::new(raw).unwrap()
    }

    #[test]
    fn formats_each_screen() {
        assert_eq!(NavigationTarget::CategoryList.to_string(), "category_list");
        assert_eq!(
            NavigationTarget::category_detail(key("Parques")).to_string(),
            "category_detail/Parques"
        );
        assert_eq!(
            NavigationTarget::item_detail(key("Parques"), 12).to_string(),
            "item_detail/Parques/12"
        );
    }

    #[test]
    fn category_keys_round_trip() {
        for raw in ["Restaurantes", "Gasolineras", "Cafés del Centro", "a b c", "ñ-ü_0"] {
            let target = NavigationTarget::category_detail(key(raw));
            let parsed: NavigationTarget = target.to_string().parse().unwrap();
            assert_eq!(parsed, target);
            assert_eq!(parsed.category().map(CategoryKey::as_str), Some(raw));
        }
    }

    #[test]
    fn generated_keys_round_trip() {
        let fragments = [
            "a", " ", "%", "?", "#", "&", "=", "\\", ":", ".", "ñ", "é", "中", "🏞", "\t", "0",
        ];
        let mut checked = 0;
        for first in fragments {
            for second in fragments {
                for third in ["", " ", "x", "ü"] {
                    let raw = format!("{first}{second}{third}");
                    let target = NavigationTarget::item_detail(key(&raw), checked);
                    let route = target.to_string();
                    assert_eq!(route.parse::<NavigationTarget>(), Ok(target), "{route:?}");
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, fragments.len() * fragments.len() * 4);

        for raw in ["  leading", "trailing  ", " both ", "   "] {
            let target = NavigationTarget::category_detail(key(raw));
            let parsed: NavigationTarget = target.to_string().parse().unwrap();
            assert_eq!(parsed.category().map(CategoryKey::as_str), Some(raw));
        }
    }

    #[test]
    fn item_routes_round_trip() {
        let target = NavigationTarget::item_detail(key("Hoteles"), 0);
        assert_eq!(target.to_string().parse::<NavigationTarget>(), Ok(target));
    }

    #[test]
    fn unknown_key_still_parses() {
        let parsed: NavigationTarget = "category_detail/Unknown".parse().unwrap();
        assert_eq!(parsed, NavigationTarget::category_detail(key("Unknown")));
    }

    #[test]
    fn rejects_malformed_routes() {
        assert_eq!("".parse::<NavigationTarget>(), Err(RouteError::Empty));
        assert_eq!(
            "settings".parse::<NavigationTarget>(),
            Err(RouteError::UnknownScreen("settings".into()))
        );
        assert!(matches!(
            "category_detail".parse::<NavigationTarget>(),
            Err(RouteError::MissingSegment { segment: "category key", .. })
        ));
        assert!(matches!(
            "item_detail/Parques".parse::<NavigationTarget>(),
            Err(RouteError::MissingSegment { segment: "item index", .. })
        ));
        assert_eq!(
            "category_detail/".parse::<NavigationTarget>(),
            Err(RouteError::InvalidKey(String::new()))
        );
        assert_eq!(
            "category_detail/Parques/extra".parse::<NavigationTarget>(),
            Err(RouteError::TrailingSegment("extra".into()))
        );
        assert_eq!(
            "category_list/".parse::<NavigationTarget>(),
            Err(RouteError::TrailingSegment(String::new()))
        );
    }

    #[test]
    fn rejects_signed_or_non_numeric_indices() {
        for bad in ["+1", "-1", "1.0", "x", " 1", ""] {
            let route = format!("item_detail/Parques/{bad}");
            assert_eq!(
                route.parse::<NavigationTarget>(),
                Err(RouteError::InvalidIndex(bad.to_string())),
                "{route}"
            );
        }
    }

    #[test]
    fn rejects_list_delimiter_in_key() {
        assert_eq!(
            "category_detail/a,b".parse::<NavigationTarget>(),
            Err(RouteError::InvalidKey("a,b".into()))
        );
    }

    #[test]
    fn serde_uses_route_string() {
        let target = NavigationTarget::item_detail(key("Parques"), 3);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, "\"item_detail/Parques/3\"");
        let back: NavigationTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
        assert!(serde_json::from_str::<NavigationTarget>("\"nope\"").is_err());
    }
}
