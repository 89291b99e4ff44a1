//! Storyfeed core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use query::{extract_search_term, query_url, SEARCH_ENDPOINT};
pub use state::{AppState, RequestId, SortMode, Stories, StoriesEvent, StoriesState, Story};
pub use update::update;
pub use view_model::{last_searches, sorted, sum_comments, AppViewModel, LAST_SEARCH_COUNT};
