use super::types::AllergyProfile;
use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn get_profile(&self) -> Result<AllergyProfile, ApiError> {
        self.send_json(self.get("/profile/allergy")).await
    }

    /// First save. The backend replaces any existing profile for the user.
    pub async fn create_profile(
        &self,
        profile: &AllergyProfile,
    ) -> Result<AllergyProfile, ApiError> {
        self.send_json(self.post("/profile/allergy").json(profile))
            .await
    }

    pub async fn update_profile(
        &self,
        profile: &AllergyProfile,
    ) -> Result<AllergyProfile, ApiError> {
        self.send_json(self.put("/profile/allergy").json(profile))
            .await
    }
}
