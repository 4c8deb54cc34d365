//! Per-subject tracking of recipe suggestions already shown to the user.
//!
//! Each subject the user searches for maps, under a normalized key, to the
//! ordered list of suggestion names returned so far. A reroll for the same
//! subject sends that list as the exclusion set, so the backend never repeats
//! itself within a session. The list is append-only and lives in memory only;
//! logging out drops all of it.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Subjects differing only in case or surrounding whitespace share one
/// exclusion list.
pub fn normalize_key(subject: &str) -> String {
    subject.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct SuggestionSessions {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    seen: HashMap<String, Vec<String>>,
    in_flight: HashSet<String>,
}

impl SuggestionSessions {
    /// Start a request for `key`. Returns a snapshot of the names to exclude,
    /// or `None` if a request for the same key is already outstanding.
    /// Same-key requests must serialize so the second one sees the first's
    /// results in its exclusion list.
    ///
    /// Every `Some` return must be paired with a later `record` or `abort`.
    pub fn begin(&self, key: &str) -> Option<Vec<String>> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.in_flight.insert(key.to_string()) {
            return None;
        }
        Some(inner.seen.get(key).cloned().unwrap_or_default())
    }

    /// Record the names a successful request returned, in response order,
    /// and release the key. Short batches are recorded as-is.
    pub fn record(&self, key: &str, names: impl IntoIterator<Item = String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight.remove(key);
        inner.seen.entry(key.to_string()).or_default().extend(names);
    }

    /// Release the key after a failed request, leaving the exclusion list
    /// exactly as it was.
    pub fn abort(&self, key: &str) {
        self.inner.lock().unwrap().in_flight.remove(key);
    }

    /// Forget one subject, e.g. when the user starts over.
    pub fn reset(&self, key: &str) {
        self.inner.lock().unwrap().seen.remove(key);
    }

    /// Forget everything. Called on logout.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.seen.clear();
        inner.in_flight.clear();
    }

    pub fn exclusions(&self, key: &str) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .seen
            .get(key)
            .cloned()
            .unwrap_or_default()
    }
}
