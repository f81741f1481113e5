//! Terminal directory of a city's points of interest.
//!
//! Three screens over a static catalog: category list, the items of one
//! category, and one item's detail. Navigation is a reducer-managed
//! back-stack of typed [`navigation::NavigationTarget`]s that serialize to
//! route strings for deep links.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod shutdown;
pub mod ui;
