use crate::api::types::AllergyProfile;
use crate::api::{ApiClient, ApiError};
use crate::error::Error;
use crate::profile::{parse_list, ProfileStore};
use serde::Deserialize;
use tauri::State;

/// Raw form fields as the webview collects them: comma-separated lists plus
/// free-text notes.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub religion_restrictions: String,
    #[serde(default)]
    pub skin_sensitivities: String,
    #[serde(default)]
    pub severity_notes: String,
}

impl ProfileForm {
    fn into_profile(self) -> Result<AllergyProfile, Error> {
        let profile = AllergyProfile {
            allergies: parse_list(&self.allergies),
            dietary_restrictions: parse_list(&self.dietary_restrictions),
            religion_restrictions: parse_list(&self.religion_restrictions),
            skin_sensitivities: parse_list(&self.skin_sensitivities),
            severity_notes: self.severity_notes.trim().to_string(),
        };
        if profile.allergies.is_empty()
            && profile.dietary_restrictions.is_empty()
            && profile.religion_restrictions.is_empty()
            && profile.skin_sensitivities.is_empty()
        {
            return Err(Error::validation(
                "Add at least one allergy or restriction",
            ));
        }
        Ok(profile)
    }
}

/// `Ok(None)` means the user has not created a profile yet; the frontend
/// shows the setup form.
pub async fn run_load_profile(
    api: &ApiClient,
    store: &ProfileStore,
) -> Result<Option<AllergyProfile>, Error> {
    match api.get_profile().await {
        Ok(profile) => {
            store.set(Some(profile.clone()));
            Ok(Some(profile))
        }
        Err(ApiError::Api { status: 404, .. }) => {
            store.set(None);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn run_save_profile(
    api: &ApiClient,
    store: &ProfileStore,
    form: ProfileForm,
) -> Result<AllergyProfile, Error> {
    let profile = form.into_profile()?;
    let saved = if store.is_set() {
        api.update_profile(&profile).await?
    } else {
        api.create_profile(&profile).await?
    };
    // Cache what the backend actually stored, not what was sent.
    store.set(Some(saved.clone()));
    Ok(saved)
}

#[tauri::command]
pub async fn load_profile(
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
) -> Result<Option<AllergyProfile>, Error> {
    run_load_profile(&api, &profiles).await
}

#[tauri::command]
pub async fn save_profile(
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    form: ProfileForm,
) -> Result<AllergyProfile, Error> {
    run_save_profile(&api, &profiles, form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_splits_lists_and_trims_notes() {
        let form = ProfileForm {
            allergies: "Peanuts, Tree nuts".to_string(),
            dietary_restrictions: "Vegan".to_string(),
            severity_notes: "  carries an epipen  ".to_string(),
            ..Default::default()
        };
        let profile = form.into_profile().unwrap();
        assert_eq!(profile.allergies, vec!["Peanuts", "Tree nuts"]);
        assert_eq!(profile.dietary_restrictions, vec!["Vegan"]);
        assert_eq!(profile.severity_notes, "carries an epipen");
    }

    #[test]
    fn form_with_no_restrictions_at_all_is_rejected() {
        let form = ProfileForm {
            severity_notes: "nothing to report".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            form.into_profile(),
            Err(Error::Validation(_))
        ));
    }
}
