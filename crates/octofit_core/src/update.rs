use crate::{CollectionState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CollectionState, msg: Msg) -> (CollectionState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            if state.activate() {
                vec![Effect::FetchCollection {
                    resource: state.resource(),
                    url: state.url().to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::Deactivated => {
            state.deactivate();
            Vec::new()
        }
        Msg::LoadSucceeded(records) => {
            state.apply_outcome(Ok(records));
            Vec::new()
        }
        Msg::LoadFailed(message) => {
            state.apply_outcome(Err(message));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
