use serde::{Deserialize, Serialize};

use super::HoldingRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockListRecord {
    #[serde(default, alias = "stocklist_id")]
    pub id: Option<i64>,
    #[serde(default, alias = "list_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub creator_id: Option<i64>,
    #[serde(default, alias = "isPublic")]
    pub is_public: Option<bool>,
    // Access label computed by the backend for lists visible to the viewer.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub stocks: Option<Vec<HoldingRecord>>,
    #[serde(default, alias = "stockCount")]
    pub stock_count: Option<u32>,
    #[serde(default, alias = "reviewCount")]
    pub review_count: Option<u32>,
    #[serde(default, alias = "sharedWith")]
    pub shared_with: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
    Shared,
}

impl Visibility {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "shared" => Some(Visibility::Shared),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockListView {
    pub id: i64,
    pub name: String,
    pub creator_id: i64,
    pub visibility: Visibility,
    pub stock_count: u32,
    pub review_count: u32,
    pub shared_with: u32,
    pub created_at: Option<String>,
}
