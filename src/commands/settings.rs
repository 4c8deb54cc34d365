use crate::db::Database;
use std::collections::HashMap;
use tauri::State;

/// `api_base_url` is read once at startup when the client is built, so a
/// change applies on next launch.
const SETTING_KEYS: &[&str] = &["api_base_url", "session_token", "theme"];

#[tauri::command]
pub fn get_settings(db: State<'_, Database>) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();
    for key in SETTING_KEYS {
        if let Some(value) = db.get_setting(key).map_err(|e| e.to_string())? {
            // Mask the session token for display
            if *key == "session_token" && value.len() > 8 {
                let masked = format!("{}...{}", &value[..4], &value[value.len() - 4..]);
                map.insert(key.to_string(), masked);
            } else {
                map.insert(key.to_string(), value);
            }
        }
    }
    Ok(map)
}

#[tauri::command]
pub fn set_setting(db: State<'_, Database>, key: String, value: String) -> Result<(), String> {
    if !SETTING_KEYS.contains(&key.as_str()) {
        return Err(format!("Unknown setting key: {}", key));
    }
    db.set_setting(&key, &value).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_setting(db: State<'_, Database>, key: String) -> Result<(), String> {
    db.delete_setting(&key).map_err(|e| e.to_string())
}
