#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box (full replacement text).
    InputChanged(String),
    /// User submitted the current search input.
    SearchSubmitted,
    /// User picked one of the last-searches buttons to replay a past term.
    LastSearchClicked(String),
    /// Restore the persisted search term on startup and run the initial
    /// fetch. Unlike [`Msg::InputChanged`], this does not write the term
    /// back to the preference store.
    SearchRestored(String),
    /// A search completed successfully.
    StoriesFetched {
        request: crate::RequestId,
        payload: crate::Stories,
    },
    /// A search failed. Network errors, bad statuses, and malformed bodies
    /// all arrive as this one message.
    FetchFailed { request: crate::RequestId },
    /// User dismissed a story from the list.
    StoryDismissed(crate::Story),
    /// User selected a sort mode.
    SortChanged(crate::SortMode),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
