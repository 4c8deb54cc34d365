use super::types::{RecipeBatch, RecipeQuery};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Ask for recipe suggestions, telling the backend which names the user
    /// has already seen so a reroll comes back with different ones.
    pub async fn find_recipes(
        &self,
        food_item: &str,
        exclude_recipes: &[String],
    ) -> Result<RecipeBatch, ApiError> {
        let body = RecipeQuery {
            food_item,
            exclude_recipes,
        };
        self.send_json(self.post("/recipe-finder").json(&body)).await
    }
}
