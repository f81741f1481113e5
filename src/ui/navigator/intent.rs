use crate::navigation::NavigationTarget;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavigationIntent {
    /// Push a target. Navigating to the root clears the stack instead.
    Navigate(NavigationTarget),
    /// Pop one entry. Does nothing at the root.
    Back,
    /// Drop everything above the root.
    Reset,
    /// Replace the stack with the canonical path to a target (deep links).
    Restore(NavigationTarget),
}

impl Intent for NavigationIntent {}
