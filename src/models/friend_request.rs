use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendRequestRecord {
    #[serde(default, alias = "request_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub receiver_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "date")]
    pub created_at: Option<String>,
    // Resolved upstream; the mapper never looks names up itself.
    #[serde(default, alias = "username")]
    pub sender_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "pending" => Some(RequestStatus::Pending),
            "accepted" => Some(RequestStatus::Accepted),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendRequestView {
    pub id: i64,
    pub requester_id: Option<i64>,
    pub display_name: String,
    /// Avatar letter.
    pub initial: String,
    pub status: RequestStatus,
    /// e.g. "Mar 18"
    pub requested_on: Option<String>,
}
