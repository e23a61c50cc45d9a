use serde::{Deserialize, Serialize};

use super::{ActivityView, FriendRequestView, PortfolioView, StockListView};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_portfolio_value: f64,
    pub portfolio_count: usize,
    pub stock_list_count: usize,
    pub pending_request_count: usize,
    pub portfolios: Vec<PortfolioView>,
    pub stock_lists: Vec<StockListView>,
    pub friend_requests: Vec<FriendRequestView>,
    pub recent_activity: Vec<ActivityView>,
}
