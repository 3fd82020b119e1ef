use crate::{Effect, Msg, StoreState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: StoreState, msg: Msg) -> (StoreState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            // A refresh while a fetch is in flight is not guarded; both
            // requests run and the later completion wins each field.
            state.begin_fetch();
            vec![Effect::FetchRecommendedJobs]
        }
        Msg::FetchSettled { outcome } => {
            state.apply_fetch_outcome(outcome);
            Vec::new()
        }
    };

    (state, effects)
}
