mod price_point;
mod prediction;
mod portfolio;
mod stock_list;
mod friend_request;
mod activity;
mod sorting;
mod dashboard;

pub use price_point::PricePoint;
pub use prediction::{ChartView, PredictionResult};
pub use portfolio::{HoldingRecord, HoldingView, Holdings, PortfolioRecord, PortfolioView};
pub use stock_list::{StockListRecord, StockListView, Visibility};
pub use friend_request::{FriendRequestRecord, FriendRequestView, RequestStatus};
pub use activity::{ActivityKind, ActivityRecord, ActivityView};
pub use sorting::{PortfolioSortField, SortDirection};
pub use dashboard::DashboardView;
