use storyfeed_core::{query_url, update, AppState, Effect, Msg};

fn init_logging() {
    feed_logging::initialize_for_tests();
}

#[test]
fn restored_term_fetches_without_writing_back() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchRestored("React".to_string()));

    // The restore path runs the initial fetch but never echoes the term
    // back into the preference store it just came from.
    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            request: 1,
            url: query_url("React"),
        }]
    );
    assert_eq!(state.search_input(), "React");
    assert_eq!(state.history(), vec![query_url("React")]);
}

#[test]
fn typed_input_is_mirrored_to_the_store() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchRestored("React".to_string()));

    let (_state, effects) = update(state, Msg::InputChanged("Redux".to_string()));

    assert_eq!(
        effects,
        vec![Effect::PersistSearchTerm("Redux".to_string())]
    );
}

#[test]
fn restoring_an_empty_term_is_a_noop() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchRestored(String::new()));

    assert!(effects.is_empty());
    assert!(state.history().is_empty());
}
