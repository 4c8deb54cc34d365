use super::types::{SessionResponse, User};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Who the current session belongs to. `Unauthorized` means signed out.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.send_json(self.get("/auth/me")).await
    }

    /// Exchange the session id handed back in the OAuth redirect fragment
    /// for a user record and a session token.
    pub async fn create_session(&self, session_id: &str) -> Result<SessionResponse, ApiError> {
        self.send_json(self.post("/auth/session").header("X-Session-ID", session_id))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_ok(self.post("/auth/logout")).await
    }
}
