use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of thing a text query describes. Matches the backend's
/// `analysis_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Food,
    Product,
    Skincare,
    Fragrance,
    Ingredient,
}

/// The user's restriction lists. Owned by the backend; the client keeps a
/// read/write cache (see `ProfileStore`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergyProfile {
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub religion_restrictions: Vec<String>,
    #[serde(default)]
    pub skin_sensitivities: Vec<String>,
    #[serde(default)]
    pub severity_notes: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub query: &'a str,
    pub analysis_type: AnalysisType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub query: String,
    pub analysis_type: AnalysisType,
    pub is_safe: bool,
    pub result: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Label-scan result. The backend OCRs the photo and reports what it read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    #[serde(default)]
    pub product_name: Option<String>,
    pub is_safe: bool,
    pub result: String,
    #[serde(default)]
    pub detected_allergens: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDish {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub modifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuAnalysisResult {
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub safe_dishes: Vec<MenuDish>,
    #[serde(default)]
    pub unsafe_dishes: Vec<MenuDish>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default = "default_safe")]
    pub safe_for_user: bool,
    #[serde(default)]
    pub allergen_warnings: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

fn default_safe() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBatch {
    #[serde(default)]
    pub recipes: Vec<RecipeSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct RecipeQuery<'a> {
    pub food_item: &'a str,
    pub exclude_recipes: &'a [String],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: User,
    pub session_token: String,
}
