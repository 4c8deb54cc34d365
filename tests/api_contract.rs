use safe_eats_lib::api::types::{AllergyProfile, AnalysisType};
use safe_eats_lib::api::ApiClient;
use safe_eats_lib::commands::analyze::run_text_analysis;
use safe_eats_lib::commands::auth::run_current_user;
use safe_eats_lib::commands::profile::{run_load_profile, run_save_profile, ProfileForm};
use safe_eats_lib::commands::recipes::run_recipe_search;
use safe_eats_lib::error::Error;
use safe_eats_lib::history::{self, HistoryKind};
use safe_eats_lib::profile::ProfileStore;
use safe_eats_lib::session::SuggestionSessions;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri()).expect("client")
}

fn test_profile() -> AllergyProfile {
    AllergyProfile {
        allergies: vec!["Peanuts".to_string()],
        dietary_restrictions: vec![],
        religion_restrictions: vec![],
        skin_sensitivities: vec![],
        severity_notes: String::new(),
    }
}

fn recipe_names(batch: &safe_eats_lib::api::types::RecipeBatch) -> Vec<&str> {
    batch.recipes.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn reroll_excludes_exactly_the_names_already_shown() {
    let server = MockServer::start().await;
    let api = client(&server);
    let sessions = SuggestionSessions::default();
    let profile = test_profile();

    Mock::given(method("POST"))
        .and(path("/api/recipe-finder"))
        .and(body_json(json!({"food_item": "Cookies", "exclude_recipes": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{"name": "A"}, {"name": "B"}, {"name": "C"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/recipe-finder"))
        .and(body_json(
            json!({"food_item": "cookies", "exclude_recipes": ["A", "B", "C"]}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{"name": "D"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let first = run_recipe_search(&api, Some(&profile), &sessions, "Cookies")
        .await
        .unwrap();
    assert_eq!(recipe_names(&first), ["A", "B", "C"]);

    // Case/whitespace variants of the subject share the exclusion key.
    let second = run_recipe_search(&api, Some(&profile), &sessions, "  cookies  ")
        .await
        .unwrap();
    assert_eq!(recipe_names(&second), ["D"]);

    assert_eq!(sessions.exclusions("cookies"), ["A", "B", "C", "D"]);
}

#[tokio::test]
async fn failed_recipe_search_leaves_exclusions_unchanged() {
    let server = MockServer::start().await;
    let api = client(&server);
    let sessions = SuggestionSessions::default();
    let profile = test_profile();

    Mock::given(method("POST"))
        .and(path("/api/recipe-finder"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Recipe search failed"})),
        )
        .mount(&server)
        .await;

    let err = run_recipe_search(&api, Some(&profile), &sessions, "cookies")
        .await
        .unwrap_err();
    let serialized = serde_json::to_value(&err).unwrap();
    assert_eq!(serialized["kind"], "api");
    assert_eq!(serialized["message"], "Recipe search failed");
    assert!(sessions.exclusions("cookies").is_empty());

    // The key is released again: a retry reaches the backend.
    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/recipe-finder"))
        .and(body_json(json!({"food_item": "cookies", "exclude_recipes": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{"name": "A"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let retry = run_recipe_search(&api, Some(&profile), &sessions, "cookies")
        .await
        .unwrap();
    assert_eq!(recipe_names(&retry), ["A"]);
}

#[tokio::test]
async fn missing_profile_blocks_dispatch_before_any_backend_call() {
    let server = MockServer::start().await;
    let api = client(&server);
    let sessions = SuggestionSessions::default();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_text_analysis(&api, None, "peanut butter", AnalysisType::Food)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingProfile));

    let err = run_recipe_search(&api, None, &sessions, "cookies")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingProfile));
}

#[tokio::test]
async fn empty_input_is_rejected_locally() {
    let server = MockServer::start().await;
    let api = client(&server);
    let profile = test_profile();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_text_analysis(&api, Some(&profile), "   ", AnalysisType::Food)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn analyze_round_trips_the_typed_result() {
    let server = MockServer::start().await;
    let api = client(&server);
    let profile = test_profile();

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(
            json!({"query": "peanut butter", "analysis_type": "food"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "peanut butter",
            "analysis_type": "food",
            "is_safe": false,
            "result": "Contains peanuts.",
            "warnings": ["Peanut allergy listed in your profile"],
            "alternatives": ["Sunflower seed butter"],
            "timestamp": "2025-10-12T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = run_text_analysis(&api, Some(&profile), "peanut butter", AnalysisType::Food)
        .await
        .unwrap();
    assert!(!result.is_safe);
    assert_eq!(result.warnings, ["Peanut allergy listed in your profile"]);
    assert_eq!(result.alternatives, ["Sunflower seed butter"]);
}

#[tokio::test]
async fn backend_detail_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    let api = client(&server);
    let profile = test_profile();

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Please set up your allergy profile first"
        })))
        .mount(&server)
        .await;

    let err = run_text_analysis(&api, Some(&profile), "tofu", AnalysisType::Food)
        .await
        .unwrap_err();
    let serialized = serde_json::to_value(&err).unwrap();
    assert_eq!(
        serialized["message"],
        "Please set up your allergy profile first"
    );
}

#[tokio::test]
async fn signed_out_session_reads_as_none() {
    let server = MockServer::start().await;
    let api = client(&server);

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&server)
        .await;

    let user = run_current_user(&api).await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn session_token_is_attached_as_bearer_credential() {
    let server = MockServer::start().await;
    let api = client(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/session"))
        .and(header("X-Session-ID", "sess_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "u1", "email": "sam@example.com", "name": "Sam"},
            "session_token": "tok_123"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1", "email": "sam@example.com", "name": "Sam"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = api.create_session("sess_abc").await.unwrap();
    api.set_token(Some(session.session_token));

    let user = api.me().await.unwrap();
    assert_eq!(user.email, "sam@example.com");
}

#[tokio::test]
async fn history_merge_degrades_a_failed_feed_to_empty() {
    let server = MockServer::start().await;
    let api = client(&server);

    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "query": "oat milk",
                "analysis_type": "food",
                "is_safe": true,
                "result": "ok",
                "timestamp": "2025-10-12T09:00:00Z"
            },
            {
                "query": "peanut butter",
                "analysis_type": "food",
                "is_safe": false,
                "result": "contains peanuts",
                "timestamp": "2025-10-12T14:00:00Z"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/image-history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/menu-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "restaurant_name": "Trattoria",
                "summary": "one safe dish",
                "safe_dishes": [{"name": "Margherita"}],
                "unsafe_dishes": [],
                "timestamp": "2025-10-12T11:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let merged = history::load_combined(&api).await;

    let kinds: Vec<HistoryKind> = merged.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        [HistoryKind::Text, HistoryKind::Menu, HistoryKind::Text]
    );
    let queries: Vec<&str> = merged.iter().map(|i| i.query.as_str()).collect();
    assert_eq!(queries, ["peanut butter", "Trattoria", "oat milk"]);
}

#[tokio::test]
async fn profile_load_and_save_keep_the_cache_in_sync() {
    let server = MockServer::start().await;
    let api = client(&server);
    let store = ProfileStore::default();

    Mock::given(method("GET"))
        .and(path("/api/profile/allergy"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Profile not found"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/profile/allergy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "allergies": ["Peanuts", "Dairy"],
            "dietary_restrictions": ["Vegan"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/profile/allergy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "allergies": ["Peanuts"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // No profile yet: load reports None and the first save goes via POST.
    assert!(run_load_profile(&api, &store).await.unwrap().is_none());
    assert!(!store.is_set());

    let form = ProfileForm {
        allergies: "Peanuts, Dairy".to_string(),
        dietary_restrictions: "Vegan".to_string(),
        ..Default::default()
    };
    let saved = run_save_profile(&api, &store, form).await.unwrap();
    assert_eq!(saved.allergies, ["Peanuts", "Dairy"]);
    assert!(store.is_set());

    // Profile exists now: the next save goes via PUT and the cache follows
    // the backend's response.
    let form = ProfileForm {
        allergies: "Peanuts".to_string(),
        ..Default::default()
    };
    run_save_profile(&api, &store, form).await.unwrap();
    assert_eq!(store.get().unwrap().allergies, ["Peanuts"]);
}
