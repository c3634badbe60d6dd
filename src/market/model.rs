use serde::{Deserialize, Serialize};

/// A marketplace entry. The catalog is compiled in; nothing is persisted or
/// fetched remotely, and `status` only drives a badge in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: String,
    pub name: String,
    pub creator: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub icon: String,
    pub status: String,
    pub tags: Vec<String>,
    pub screenshots: u8,
    pub rating: f32,
}
