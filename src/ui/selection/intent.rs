use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// A new list was entered: set its length and place the cursor.
    Reset { len: usize, cursor: usize },
    MoveUp,
    MoveDown,
    First,
    Last,
}

impl Intent for SelectionIntent {}
