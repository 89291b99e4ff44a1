use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use feed_logging::{feed_info, feed_warn};
use storyfeed_core::{Effect, Msg, Story};
use storyfeed_engine::{EngineEvent, EngineHandle, FetchSettings, SearchSender, StoryHit};

use crate::persistence;

/// Executes effects produced by the core and pumps engine completions back
/// into the shell's message channel.
pub struct EffectRunner {
    searcher: SearchSender,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(FetchSettings::default());
        let searcher = engine.searcher();
        spawn_event_loop(engine, msg_tx);
        Self { searcher }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request, url } => {
                    feed_info!("FetchStories request={} url={}", request, url);
                    self.searcher.search(request, url);
                }
                Effect::PersistSearchTerm(term) => {
                    persistence::save_search_term(&term);
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            match event {
                EngineEvent::SearchCompleted { request, result } => {
                    let msg = match result {
                        Ok(hits) => Msg::StoriesFetched {
                            request,
                            payload: hits.into_iter().map(map_story).collect(),
                        },
                        Err(err) => {
                            feed_warn!("search request {} failed: {}", request, err);
                            Msg::FetchFailed { request }
                        }
                    };
                    if msg_tx.send(msg).is_err() {
                        // Shell is gone; stop pumping.
                        return;
                    }
                }
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

/// Wire hit to core story. Hits with null fields render as blanks, the same
/// way the search site itself renders them.
fn map_story(hit: StoryHit) -> Story {
    Story {
        id: hit.object_id,
        url: hit.url.unwrap_or_default(),
        title: hit.title.unwrap_or_default(),
        author: hit.author.unwrap_or_default(),
        num_comments: hit.num_comments.unwrap_or_default(),
        points: hit.points.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_story_defaults_null_fields() {
        let hit = StoryHit {
            object_id: "42".to_string(),
            url: None,
            title: Some("Ask HN: who is hiring?".to_string()),
            author: None,
            num_comments: None,
            points: Some(7),
        };

        let story = map_story(hit);

        assert_eq!(story.id, "42");
        assert_eq!(story.url, "");
        assert_eq!(story.title, "Ask HN: who is hiring?");
        assert_eq!(story.author, "");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 7);
    }
}
