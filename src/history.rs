//! Unified view over the three backend history feeds.
//!
//! Text, image and menu history live on separate endpoints with different
//! shapes. Each entry is tagged with its kind and projected onto a common
//! display shape, then the lot is sorted newest-first. One endpoint failing
//! degrades to an empty list for that kind; the merge itself never fails.

use crate::api::types::{AnalysisResult, ImageAnalysisResult, MenuAnalysisResult};
use crate::api::{ApiClient, ApiError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Text,
    Image,
    Menu,
}

impl HistoryKind {
    pub fn label(self) -> &'static str {
        match self {
            HistoryKind::Text => "Text analysis",
            HistoryKind::Image => "Label scan",
            HistoryKind::Menu => "Menu check",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            HistoryKind::Text => "search",
            HistoryKind::Image => "camera",
            HistoryKind::Menu => "utensils",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub kind: HistoryKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub query: String,
    pub is_safe: bool,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    fn new(kind: HistoryKind, query: String, is_safe: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            label: kind.label(),
            icon: kind.icon(),
            query,
            is_safe,
            timestamp,
        }
    }
}

impl From<AnalysisResult> for HistoryItem {
    fn from(entry: AnalysisResult) -> Self {
        Self::new(HistoryKind::Text, entry.query, entry.is_safe, entry.timestamp)
    }
}

impl From<ImageAnalysisResult> for HistoryItem {
    fn from(entry: ImageAnalysisResult) -> Self {
        let query = entry
            .product_name
            .unwrap_or_else(|| HistoryKind::Image.label().to_string());
        Self::new(HistoryKind::Image, query, entry.is_safe, entry.timestamp)
    }
}

impl From<MenuAnalysisResult> for HistoryItem {
    fn from(entry: MenuAnalysisResult) -> Self {
        // A menu check is "safe" when it found anything safe to order.
        let is_safe = !entry.safe_dishes.is_empty();
        let query = entry
            .restaurant_name
            .or(entry.source_url)
            .unwrap_or_else(|| "Menu".to_string());
        Self::new(HistoryKind::Menu, query, is_safe, entry.timestamp)
    }
}

pub fn merge(
    text: Vec<AnalysisResult>,
    image: Vec<ImageAnalysisResult>,
    menu: Vec<MenuAnalysisResult>,
) -> Vec<HistoryItem> {
    let mut items: Vec<HistoryItem> = text
        .into_iter()
        .map(HistoryItem::from)
        .chain(image.into_iter().map(HistoryItem::from))
        .chain(menu.into_iter().map(HistoryItem::from))
        .collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

fn or_empty<T>(kind: HistoryKind, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to load {} history: {e}", kind.label());
            Vec::new()
        }
    }
}

/// Fetch all three feeds concurrently and merge whatever came back.
pub async fn load_combined(api: &ApiClient) -> Vec<HistoryItem> {
    let (text, image, menu) = futures::join!(
        api.analysis_history(),
        api.image_history(),
        api.menu_history()
    );
    merge(
        or_empty(HistoryKind::Text, text),
        or_empty(HistoryKind::Image, image),
        or_empty(HistoryKind::Menu, menu),
    )
}
