use crate::ui::mvi::Reducer;
use crate::ui::navigator::intent::NavigationIntent;
use crate::ui::navigator::state::NavigationState;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Navigate(target) => state.push(target),
            NavigationIntent::Back => state.pop(),
            NavigationIntent::Reset => NavigationState::default(),
            NavigationIntent::Restore(target) => NavigationState::restored(&target),
        }
    }
}
