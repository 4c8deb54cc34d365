use super::types::{
    AnalysisResult, AnalysisType, AnalyzeRequest, ImageAnalysisResult, MenuAnalysisResult,
};
use super::{ApiClient, ApiError};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

#[derive(Serialize)]
struct MenuUrlRequest<'a> {
    url: &'a str,
}

fn photo_form(file_name: &str, bytes: Vec<u8>) -> Form {
    Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()))
}

impl ApiClient {
    pub async fn analyze(
        &self,
        query: &str,
        analysis_type: AnalysisType,
    ) -> Result<AnalysisResult, ApiError> {
        let body = AnalyzeRequest {
            query,
            analysis_type,
        };
        self.send_json(self.post("/analyze").json(&body)).await
    }

    pub async fn analyze_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageAnalysisResult, ApiError> {
        self.send_json(self.post("/analyze-image").multipart(photo_form(file_name, bytes)))
            .await
    }

    pub async fn analyze_menu_url(&self, url: &str) -> Result<MenuAnalysisResult, ApiError> {
        self.send_json(self.post("/analyze-menu-url").json(&MenuUrlRequest { url }))
            .await
    }

    pub async fn analyze_menu_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<MenuAnalysisResult, ApiError> {
        self.send_json(
            self.post("/analyze-menu-photo")
                .multipart(photo_form(file_name, bytes)),
        )
        .await
    }
}
