pub mod api;
pub mod commands;
pub mod db;
pub mod error;
pub mod history;
pub mod profile;
pub mod session;

use api::ApiClient;
use db::Database;
use profile::ProfileStore;
use session::SuggestionSessions;
use tauri::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safe_eats_lib=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_dir = app.path().app_data_dir()?;
            let database =
                Database::new(&app_dir).expect("Failed to initialize database");

            let base_url = database
                .get_setting("api_base_url")
                .ok()
                .flatten()
                .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string());
            let api = ApiClient::new(base_url)?;
            // A token cached from a previous run keeps the user signed in.
            if let Ok(Some(token)) = database.get_setting(commands::auth::SESSION_TOKEN_KEY) {
                api.set_token(Some(token));
            }

            app.manage(database);
            app.manage(api);
            app.manage(ProfileStore::default());
            app.manage(SuggestionSessions::default());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::auth::current_user,
            commands::auth::establish_session,
            commands::auth::logout,
            commands::profile::load_profile,
            commands::profile::save_profile,
            commands::analyze::analyze_text,
            commands::analyze::analyze_image,
            commands::analyze::analyze_menu_url,
            commands::analyze::analyze_menu_photo,
            commands::recipes::search_recipes,
            commands::recipes::reroll_recipes,
            commands::recipes::reset_recipe_session,
            commands::history::load_history,
            commands::history::clear_history,
            commands::settings::get_settings,
            commands::settings::set_setting,
            commands::settings::delete_setting,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
