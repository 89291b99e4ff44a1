use crate::view_model::{last_searches, sorted, sum_comments, AppViewModel};

/// One search result record.
///
/// Identified by `id`; two stories with identical content but different ids
/// are distinct. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub num_comments: u64,
    pub points: i64,
}

/// An ordered list of stories as returned by one search.
pub type Stories = Vec<Story>;

/// Monotonic generation counter for issued searches. Completions carry the
/// id they were issued under, so superseded responses can be told apart.
pub type RequestId = u64;

/// Sort mode for the derived story view.
///
/// Title and author sort ascending, comments and points descending;
/// `None` keeps fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

/// Fetch lifecycle event. The set is closed: an unrecognized event kind is
/// unrepresentable rather than a runtime abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesEvent {
    /// A search was issued; previous data stays visible while it runs.
    FetchInit,
    /// The search resolved; its payload replaces the list wholesale.
    FetchSuccess(Stories),
    /// The search failed.
    FetchFailure,
    /// The user dismissed one story.
    RemoveStory(Story),
}

/// Snapshot of the fetch lifecycle: the current list plus loading/error flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Stories,
    pub is_loading: bool,
    pub is_error: bool,
}

impl StoriesState {
    /// Pure transition: the same state and event always yield the same
    /// output, with no side effects.
    pub fn apply(mut self, event: StoriesEvent) -> Self {
        match event {
            StoriesEvent::FetchInit => {
                self.is_loading = true;
                self.is_error = false;
            }
            StoriesEvent::FetchSuccess(payload) => {
                self.is_loading = false;
                self.is_error = false;
                self.data = payload;
            }
            StoriesEvent::FetchFailure => {
                self.is_loading = false;
                self.is_error = true;
            }
            StoriesEvent::RemoveStory(story) => {
                // Equality is by id only; relative order of survivors is kept.
                self.data.retain(|candidate| candidate.id != story.id);
            }
        }
        self
    }
}

/// Owned application state. All mutation goes through [`crate::update`];
/// consumers get value snapshots via [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    stories: StoriesState,
    search_input: String,
    sort: SortMode,
    history: Vec<String>,
    current_request: RequestId,
    discarded_responses: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Every query URL issued so far, oldest first. Append-only; replays of
    /// a past term append a fresh entry rather than reordering.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Generation of the most recently issued search. Only completions
    /// carrying this id may settle the stories state.
    pub fn current_request(&self) -> RequestId {
        self.current_request
    }

    /// Completions that arrived after a newer search superseded them.
    pub fn discarded_responses(&self) -> usize {
        self.discarded_responses
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_input: self.search_input.clone(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            sort: self.sort,
            stories: sorted(&self.stories.data, self.sort),
            total_comments: sum_comments(&self.stories.data),
            last_searches: last_searches(&self.history),
            dirty: self.dirty,
        }
    }

    /// Hands the dirty flag to the shell and clears it, so renders coalesce
    /// to one per batch of state changes.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_input(&mut self, term: String) {
        self.search_input = term;
        self.mark_dirty();
    }

    pub(crate) fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.mark_dirty();
    }

    /// Records the issued query URL, bumps the request generation, and marks
    /// the fetch as in flight. Returns the new generation.
    pub(crate) fn begin_search(&mut self, url: String) -> RequestId {
        self.history.push(url);
        self.current_request += 1;
        self.apply_stories_event(StoriesEvent::FetchInit);
        self.current_request
    }

    pub(crate) fn is_current(&self, request: RequestId) -> bool {
        request == self.current_request
    }

    pub(crate) fn record_discarded(&mut self) {
        // Nothing user-visible changed; the dirty flag stays untouched.
        self.discarded_responses += 1;
    }

    pub(crate) fn apply_stories_event(&mut self, event: StoriesEvent) {
        self.stories = std::mem::take(&mut self.stories).apply(event);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
