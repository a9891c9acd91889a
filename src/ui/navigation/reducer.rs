use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavigationIntent;
use crate::ui::navigation::state::NavigationState;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let target = match intent {
            NavigationIntent::GoTo(target) => target,
            NavigationIntent::Next => {
                if state.is_at_last() {
                    return state;
                }
                state.current() + 1
            }
            NavigationIntent::Previous => {
                if state.is_at_first() {
                    return state;
                }
                state.current() - 1
            }
            NavigationIntent::First => 1,
            NavigationIntent::Last => state.total(),
        };

        if state.accepts(target) {
            state.with_current(target)
        } else {
            state
        }
    }
}
