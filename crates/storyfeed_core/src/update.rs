use crate::query::query_url;
use crate::{AppState, Effect, Msg, StoriesEvent};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(term) => {
            state.set_search_input(term.clone());
            vec![Effect::PersistSearchTerm(term)]
        }
        Msg::SearchSubmitted => submit_search(&mut state),
        Msg::LastSearchClicked(term) => {
            state.set_search_input(term.clone());
            let mut effects = submit_search(&mut state);
            effects.push(Effect::PersistSearchTerm(term));
            effects
        }
        Msg::SearchRestored(term) => {
            // The term came from the preference store, so it is not written
            // back; this is the one submit path without a persist effect.
            state.set_search_input(term);
            submit_search(&mut state)
        }
        Msg::StoriesFetched { request, payload } => {
            if state.is_current(request) {
                state.apply_stories_event(StoriesEvent::FetchSuccess(payload));
            } else {
                // A newer search superseded this one. Applying it would
                // let the last arrival win over the last submission and
                // could resurrect dismissed stories.
                state.record_discarded();
            }
            Vec::new()
        }
        Msg::FetchFailed { request } => {
            if state.is_current(request) {
                state.apply_stories_event(StoriesEvent::FetchFailure);
            } else {
                state.record_discarded();
            }
            Vec::new()
        }
        Msg::StoryDismissed(story) => {
            state.apply_stories_event(StoriesEvent::RemoveStory(story));
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.set_sort(sort);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Issues a search for the current input. An empty input is a no-op, the
/// same way the original form refuses an empty submit.
fn submit_search(state: &mut AppState) -> Vec<Effect> {
    if state.search_input().is_empty() {
        return Vec::new();
    }
    let url = query_url(state.search_input());
    let request = state.begin_search(url.clone());
    vec![Effect::FetchStories { request, url }]
}
