//! Storyfeed engine: the HTTP search client and preference-store IO.
mod engine;
mod fetch;
mod persist;
mod types;

pub use engine::{EngineHandle, SearchSender};
pub use fetch::{FetchSettings, ReqwestFetcher, SearchBackend};
pub use persist::{ensure_config_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId, SearchResponse, StoryHit};
