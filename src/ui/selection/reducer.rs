use crate::ui::mvi::Reducer;
use crate::ui::selection::intent::SelectionIntent;
use crate::ui::selection::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Reset { len, cursor } => SelectionState {
                cursor: cursor.min(len.saturating_sub(1)),
                len,
            },
            _ if state.len == 0 => SelectionState::default(),
            SelectionIntent::MoveUp => {
                let cursor = if state.cursor == 0 {
                    state.len - 1
                } else {
                    state.cursor - 1
                };
                SelectionState { cursor, ..state }
            }
            SelectionIntent::MoveDown => {
                let cursor = if state.cursor + 1 >= state.len {
                    0
                } else {
                    state.cursor + 1
                };
                SelectionState { cursor, ..state }
            }
            SelectionIntent::First => SelectionState { cursor: 0, ..state },
            SelectionIntent::Last => SelectionState {
                cursor: state.len - 1,
                ..state
            },
        }
    }
}
