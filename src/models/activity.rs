use serde::{Deserialize, Serialize};

use super::RequestStatus;

// One entry of the dashboard feed. Which fields are present depends on `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub shares: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "stockList")]
    pub stock_list: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default, alias = "created_at")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Purchase,
    Sale,
    FriendRequest,
    Review,
    Deposit,
}

impl ActivityKind {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "purchase" => Some(ActivityKind::Purchase),
            "sale" => Some(ActivityKind::Sale),
            "friend_request" => Some(ActivityKind::FriendRequest),
            "review" => Some(ActivityKind::Review),
            "deposit" => Some(ActivityKind::Deposit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityView {
    pub id: i64,
    pub kind: ActivityKind,
    pub symbol: Option<String>,
    pub shares: Option<f64>,
    pub price: Option<f64>,
    /// Trade value (shares × price) or deposited cash.
    pub amount: Option<f64>,
    pub counterparty: Option<String>,
    pub status: Option<RequestStatus>,
    pub stock_list: Option<String>,
    pub portfolio: Option<String>,
    pub occurred_on: Option<String>,
}
