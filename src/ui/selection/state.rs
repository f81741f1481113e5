use crate::ui::mvi::UiState;

/// Cursor over the rows of the current list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub cursor: usize,
    pub len: usize,
}

impl UiState for SelectionState {}

impl SelectionState {
    /// Row under the cursor, or `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        (self.cursor < self.len).then_some(self.cursor)
    }
}
