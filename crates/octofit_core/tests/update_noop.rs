use octofit_core::{update, CollectionState, Environment, Msg, Resource};

#[test]
fn update_is_noop() {
    let state = CollectionState::new(Resource::Users, &Environment::local());
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
