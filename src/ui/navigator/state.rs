use crate::navigation::NavigationTarget;
use crate::ui::mvi::UiState;

static ROOT: NavigationTarget = NavigationTarget::CategoryList;

/// Back-stack of visited screens.
///
/// Never empty; the bottom entry is always [`NavigationTarget::CategoryList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    stack: Vec<NavigationTarget>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: vec![NavigationTarget::CategoryList],
        }
    }
}

impl UiState for NavigationState {}

impl NavigationState {
    /// Build a state from the canonical path to `target`.
    pub fn restored(target: &NavigationTarget) -> Self {
        Self {
            stack: target.ancestry(),
        }
    }

    pub fn current(&self) -> &NavigationTarget {
        self.stack.last().unwrap_or(&ROOT)
    }

    pub fn stack(&self) -> &[NavigationTarget] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push `target`, filling in any ancestors missing above the current top
    /// so that back always lands on the target's parent.
    pub(super) fn push(mut self, target: NavigationTarget) -> Self {
        if target.is_root() {
            return Self::default();
        }
        let ancestry = target.ancestry();
        let start = ancestry
            .iter()
            .position(|step| step == self.current())
            .map_or(1, |pos| pos + 1);
        self.stack.extend(ancestry.into_iter().skip(start));
        self
    }

    pub(super) fn pop(mut self) -> Self {
        if self.can_go_back() {
            self.stack.pop();
        }
        self
    }
}
