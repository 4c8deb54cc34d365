use crate::api::types::{AllergyProfile, RecipeBatch};
use crate::api::ApiClient;
use crate::error::Error;
use crate::profile::ProfileStore;
use crate::session::{normalize_key, SuggestionSessions};
use tauri::State;
use tracing::debug;

/// One recipe search. The session supplies the names already shown for this
/// subject as the exclusion list; only a successful response grows it.
pub async fn run_recipe_search(
    api: &ApiClient,
    profile: Option<&AllergyProfile>,
    sessions: &SuggestionSessions,
    subject: &str,
) -> Result<RecipeBatch, Error> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(Error::validation("Please enter a dish or food item"));
    }
    if profile.is_none() {
        return Err(Error::MissingProfile);
    }

    let key = normalize_key(subject);
    let excluded = sessions.begin(&key).ok_or_else(|| Error::Busy(key.clone()))?;
    debug!("recipe search for {key:?} excluding {} names", excluded.len());

    match api.find_recipes(subject, &excluded).await {
        Ok(batch) => {
            sessions.record(&key, batch.recipes.iter().map(|r| r.name.clone()));
            Ok(batch)
        }
        Err(e) => {
            sessions.abort(&key);
            Err(e.into())
        }
    }
}

#[tauri::command]
pub async fn search_recipes(
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    sessions: State<'_, SuggestionSessions>,
    subject: String,
) -> Result<RecipeBatch, Error> {
    let profile = profiles.get();
    run_recipe_search(&api, profile.as_ref(), &sessions, &subject).await
}

/// Same call as `search_recipes`; the exclusion list the session has grown
/// is what makes the results different. Without a prior search it degrades
/// to a plain search.
#[tauri::command]
pub async fn reroll_recipes(
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    sessions: State<'_, SuggestionSessions>,
    subject: String,
) -> Result<RecipeBatch, Error> {
    let profile = profiles.get();
    run_recipe_search(&api, profile.as_ref(), &sessions, &subject).await
}

/// Forget what was shown for one subject, e.g. when the user starts over.
#[tauri::command]
pub fn reset_recipe_session(sessions: State<'_, SuggestionSessions>, subject: String) {
    sessions.reset(&normalize_key(&subject));
}
