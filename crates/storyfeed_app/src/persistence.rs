use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use feed_logging::{feed_error, feed_info, feed_warn};
use serde::{Deserialize, Serialize};
use storyfeed_engine::AtomicFileWriter;

/// Search term used when no preference has been stored yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

const PREFS_FILENAME: &str = ".storyfeed_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    search_term: String,
    saved_at: String,
}

pub fn load_search_term() -> String {
    load_search_term_from(&prefs_dir())
}

pub fn save_search_term(term: &str) {
    save_search_term_in(&prefs_dir(), term);
}

/// The preference file lives next to the log file, in the working directory.
fn prefs_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn load_search_term_from(dir: &Path) -> String {
    let path = dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return DEFAULT_SEARCH_TERM.to_string();
        }
        Err(err) => {
            feed_warn!("Failed to read preferences from {:?}: {}", path, err);
            return DEFAULT_SEARCH_TERM.to_string();
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            feed_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return DEFAULT_SEARCH_TERM.to_string();
        }
    };

    if prefs.search_term.is_empty() {
        // An empty term would suppress the initial fetch.
        return DEFAULT_SEARCH_TERM.to_string();
    }

    feed_info!("Restored search term from {:?}", path);
    prefs.search_term
}

fn save_search_term_in(dir: &Path, term: &str) {
    let prefs = PersistedPrefs {
        search_term: term.to_string(),
        saved_at: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            feed_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    if let Err(err) = writer.write(PREFS_FILENAME, &content) {
        feed_error!("Failed to write preferences to {:?}: {}", dir, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_the_search_term() {
        let temp = TempDir::new().unwrap();
        save_search_term_in(temp.path(), "Redux");
        assert_eq!(load_search_term_from(temp.path()), "Redux");
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_search_term_from(temp.path()), DEFAULT_SEARCH_TERM);
    }

    #[test]
    fn unparsable_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "not ron at all").unwrap();
        assert_eq!(load_search_term_from(temp.path()), DEFAULT_SEARCH_TERM);
    }

    #[test]
    fn empty_stored_term_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        save_search_term_in(temp.path(), "");
        assert_eq!(load_search_term_from(temp.path()), DEFAULT_SEARCH_TERM);
    }

    #[test]
    fn newer_save_replaces_older() {
        let temp = TempDir::new().unwrap();
        save_search_term_in(temp.path(), "React");
        save_search_term_in(temp.path(), "Redux");
        assert_eq!(load_search_term_from(temp.path()), "Redux");
    }
}
