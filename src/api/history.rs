use super::types::{AnalysisResult, ImageAnalysisResult, MenuAnalysisResult};
use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn analysis_history(&self) -> Result<Vec<AnalysisResult>, ApiError> {
        self.send_json(self.get("/history")).await
    }

    pub async fn image_history(&self) -> Result<Vec<ImageAnalysisResult>, ApiError> {
        self.send_json(self.get("/image-history")).await
    }

    pub async fn menu_history(&self) -> Result<Vec<MenuAnalysisResult>, ApiError> {
        self.send_json(self.get("/menu-history")).await
    }

    pub async fn clear_analysis_history(&self) -> Result<(), ApiError> {
        self.send_ok(self.delete("/history")).await
    }

    pub async fn clear_image_history(&self) -> Result<(), ApiError> {
        self.send_ok(self.delete("/image-history")).await
    }

    pub async fn clear_menu_history(&self) -> Result<(), ApiError> {
        self.send_ok(self.delete("/menu-history")).await
    }
}
