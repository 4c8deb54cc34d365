//! Session-scoped cache of the user's allergy profile.
//!
//! The backend owns the profile; every analysis surface refuses to dispatch
//! until this cache holds one. It is filled from `GET /profile/allergy` at
//! login and refreshed from the backend's response on every save.

use crate::api::types::AllergyProfile;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct ProfileStore(Mutex<Option<AllergyProfile>>);

impl ProfileStore {
    pub fn get(&self) -> Option<AllergyProfile> {
        self.0.lock().unwrap().clone()
    }

    pub fn set(&self, profile: Option<AllergyProfile>) {
        *self.0.lock().unwrap() = profile;
    }

    pub fn is_set(&self) -> bool {
        self.0.lock().unwrap().is_some()
    }
}

/// Split a comma-separated form field into clean list entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
