use crate::query::extract_search_term;
use crate::{SortMode, Stories, Story};

/// Number of past searches surfaced for one-key replay.
pub const LAST_SEARCH_COUNT: usize = 5;

/// Flat snapshot handed to the renderer. Built fresh by
/// [`crate::AppState::view`]; holds copies, never references into state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_input: String,
    pub is_loading: bool,
    pub is_error: bool,
    pub sort: SortMode,
    /// The current list, already sorted per `sort`.
    pub stories: Stories,
    pub total_comments: u64,
    /// Replayable past terms, oldest first.
    pub last_searches: Vec<String>,
    pub dirty: bool,
}

/// Sum of comment counts over the list. Zero for the empty list.
pub fn sum_comments(stories: &[Story]) -> u64 {
    stories.iter().map(|story| story.num_comments).sum()
}

/// Returns a sorted copy of `stories`; the input is never mutated.
///
/// Sorting is stable: stories with equal keys keep their fetch order.
pub fn sorted(stories: &[Story], sort: SortMode) -> Stories {
    let mut view = stories.to_vec();
    match sort {
        SortMode::None => {}
        SortMode::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortMode::Author => view.sort_by(|a, b| a.author.cmp(&b.author)),
        SortMode::Comments => view.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortMode::Points => view.sort_by(|a, b| b.points.cmp(&a.points)),
    }
    view
}

/// The last [`LAST_SEARCH_COUNT`] issued searches, oldest first, mapped back
/// to their bare terms. Shorter histories come back whole; duplicates are
/// preserved as issued.
pub fn last_searches(history: &[String]) -> Vec<String> {
    let start = history.len().saturating_sub(LAST_SEARCH_COUNT);
    history[start..]
        .iter()
        .filter_map(|url| extract_search_term(url))
        .collect()
}
