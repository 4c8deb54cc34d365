use super::notify_history_changed;
use crate::api::types::{
    AllergyProfile, AnalysisResult, AnalysisType, ImageAnalysisResult, MenuAnalysisResult,
};
use crate::api::ApiClient;
use crate::error::Error;
use crate::history::HistoryKind;
use crate::profile::ProfileStore;
use std::path::Path;
use tauri::{AppHandle, State};

pub async fn run_text_analysis(
    api: &ApiClient,
    profile: Option<&AllergyProfile>,
    query: &str,
    analysis_type: AnalysisType,
) -> Result<AnalysisResult, Error> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::validation("Please enter something to analyze"));
    }
    if profile.is_none() {
        return Err(Error::MissingProfile);
    }
    Ok(api.analyze(query, analysis_type).await?)
}

pub async fn run_image_analysis(
    api: &ApiClient,
    profile: Option<&AllergyProfile>,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<ImageAnalysisResult, Error> {
    if bytes.is_empty() {
        return Err(Error::validation("Please choose a photo"));
    }
    if profile.is_none() {
        return Err(Error::MissingProfile);
    }
    Ok(api.analyze_image(file_name, bytes).await?)
}

pub async fn run_menu_url_analysis(
    api: &ApiClient,
    profile: Option<&AllergyProfile>,
    url: &str,
) -> Result<MenuAnalysisResult, Error> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::validation("Please enter a menu URL"));
    }
    if profile.is_none() {
        return Err(Error::MissingProfile);
    }
    Ok(api.analyze_menu_url(url).await?)
}

pub async fn run_menu_photo_analysis(
    api: &ApiClient,
    profile: Option<&AllergyProfile>,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<MenuAnalysisResult, Error> {
    if bytes.is_empty() {
        return Err(Error::validation("Please upload a menu photo"));
    }
    if profile.is_none() {
        return Err(Error::MissingProfile);
    }
    Ok(api.analyze_menu_photo(file_name, bytes).await?)
}

fn read_photo(path: &str) -> Result<(String, Vec<u8>), Error> {
    if path.trim().is_empty() {
        return Err(Error::validation("Please choose a photo"));
    }
    let path = Path::new(path);
    let bytes = std::fs::read(path)
        .map_err(|e| Error::validation(format!("Could not read photo: {e}")))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo.jpg")
        .to_string();
    Ok((file_name, bytes))
}

#[tauri::command]
pub async fn analyze_text(
    app: AppHandle,
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    query: String,
    analysis_type: AnalysisType,
) -> Result<AnalysisResult, Error> {
    let profile = profiles.get();
    let result = run_text_analysis(&api, profile.as_ref(), &query, analysis_type).await?;
    notify_history_changed(&app, HistoryKind::Text);
    Ok(result)
}

#[tauri::command]
pub async fn analyze_image(
    app: AppHandle,
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    path: String,
) -> Result<ImageAnalysisResult, Error> {
    let profile = profiles.get();
    let (file_name, bytes) = read_photo(&path)?;
    let result = run_image_analysis(&api, profile.as_ref(), &file_name, bytes).await?;
    notify_history_changed(&app, HistoryKind::Image);
    Ok(result)
}

#[tauri::command]
pub async fn analyze_menu_url(
    app: AppHandle,
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    url: String,
) -> Result<MenuAnalysisResult, Error> {
    let profile = profiles.get();
    let result = run_menu_url_analysis(&api, profile.as_ref(), &url).await?;
    notify_history_changed(&app, HistoryKind::Menu);
    Ok(result)
}

#[tauri::command]
pub async fn analyze_menu_photo(
    app: AppHandle,
    api: State<'_, ApiClient>,
    profiles: State<'_, ProfileStore>,
    path: String,
) -> Result<MenuAnalysisResult, Error> {
    let profile = profiles.get();
    let (file_name, bytes) = read_photo(&path)?;
    let result = run_menu_photo_analysis(&api, profile.as_ref(), &file_name, bytes).await?;
    notify_history_changed(&app, HistoryKind::Menu);
    Ok(result)
}
