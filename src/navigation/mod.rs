//! Navigation targets and their route-string form.

mod route;
mod target;

pub use route::{RouteError, CATEGORY_DETAIL, CATEGORY_LIST, ITEM_DETAIL, ROUTE_SEPARATOR};
pub use target::NavigationTarget;
