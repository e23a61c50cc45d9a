use crate::models::{
    ActivityRecord, FriendRequestRecord, HoldingRecord, Holdings, PortfolioRecord, StockListRecord,
};

/// Raw records the screens render until the backend endpoints are wired in.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    portfolios: Vec<PortfolioRecord>,
    stock_lists: Vec<StockListRecord>,
    friend_requests: Vec<FriendRequestRecord>,
    activity: Vec<ActivityRecord>,
}

impl FixtureStore {
    pub fn new(
        portfolios: Vec<PortfolioRecord>,
        stock_lists: Vec<StockListRecord>,
        friend_requests: Vec<FriendRequestRecord>,
        activity: Vec<ActivityRecord>,
    ) -> Self {
        Self {
            portfolios,
            stock_lists,
            friend_requests,
            activity,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            mock_portfolios(),
            mock_stock_lists(),
            mock_friend_requests(),
            mock_activity(),
        )
    }

    pub fn portfolios(&self) -> &[PortfolioRecord] {
        &self.portfolios
    }

    pub fn portfolio(&self, id: i64) -> Option<&PortfolioRecord> {
        self.portfolios.iter().find(|p| p.id == Some(id))
    }

    pub fn stock_lists(&self) -> &[StockListRecord] {
        &self.stock_lists
    }

    pub fn friend_requests(&self) -> &[FriendRequestRecord] {
        &self.friend_requests
    }

    pub fn activity(&self) -> &[ActivityRecord] {
        &self.activity
    }
}

fn portfolio(
    id: i64,
    name: &str,
    cash: f64,
    change_percent: f64,
    holdings: &[(&str, f64)],
) -> PortfolioRecord {
    PortfolioRecord {
        id: Some(id),
        name: Some(name.to_string()),
        owner_id: Some(1),
        cash_balance: Some(cash),
        created_at: None,
        holdings: Some(Holdings::Entries(
            holdings
                .iter()
                .map(|(symbol, shares)| HoldingRecord::new(symbol, *shares))
                .collect(),
        )),
        change_percent: Some(change_percent),
    }
}

fn mock_portfolios() -> Vec<PortfolioRecord> {
    vec![
        portfolio(
            1,
            "Main Portfolio",
            1520.43,
            2.4,
            &[("AAPL", 10.0), ("MSFT", 5.0), ("GOOGL", 3.0), ("AMZN", 8.0)],
        ),
        portfolio(
            2,
            "Retirement",
            2100.00,
            -0.7,
            &[("VTI", 50.0), ("VXUS", 60.0), ("BND", 40.0)],
        ),
        portfolio(
            3,
            "Tech Stocks",
            500.20,
            5.2,
            &[("NVDA", 2.0), ("TSLA", 8.0), ("AMD", 15.0)],
        ),
    ]
}

fn mock_stock_lists() -> Vec<StockListRecord> {
    vec![
        StockListRecord {
            id: Some(1),
            name: Some("Watchlist".into()),
            creator_id: Some(1),
            is_public: Some(false),
            stock_count: Some(12),
            ..Default::default()
        },
        StockListRecord {
            id: Some(2),
            name: Some("Tech Giants".into()),
            creator_id: Some(1),
            is_public: Some(true),
            stock_count: Some(5),
            review_count: Some(8),
            ..Default::default()
        },
        StockListRecord {
            id: Some(3),
            name: Some("Dividend Stocks".into()),
            creator_id: Some(1),
            is_public: Some(false),
            stock_count: Some(7),
            shared_with: Some(2),
            ..Default::default()
        },
    ]
}

fn mock_friend_requests() -> Vec<FriendRequestRecord> {
    vec![
        FriendRequestRecord {
            id: Some(1),
            sender_id: Some(2),
            receiver_id: Some(1),
            status: Some("pending".into()),
            created_at: Some("2025-03-18T08:45:00Z".into()),
            sender_name: Some("JaneDoe".into()),
        },
        FriendRequestRecord {
            id: Some(2),
            sender_id: Some(3),
            receiver_id: Some(1),
            status: Some("pending".into()),
            created_at: Some("2025-03-16T14:20:00Z".into()),
            sender_name: Some("StockGuru42".into()),
        },
    ]
}

fn mock_activity() -> Vec<ActivityRecord> {
    vec![
        ActivityRecord {
            id: Some(1),
            kind: Some("purchase".into()),
            symbol: Some("AAPL".into()),
            shares: Some(5.0),
            price: Some(189.84),
            date: Some("2025-03-20T14:32:00Z".into()),
            ..Default::default()
        },
        ActivityRecord {
            id: Some(2),
            kind: Some("sale".into()),
            symbol: Some("MSFT".into()),
            shares: Some(3.0),
            price: Some(421.55),
            date: Some("2025-03-19T10:15:00Z".into()),
            ..Default::default()
        },
        ActivityRecord {
            id: Some(3),
            kind: Some("friend_request".into()),
            from: Some("JaneDoe".into()),
            status: Some("pending".into()),
            date: Some("2025-03-18T08:45:00Z".into()),
            ..Default::default()
        },
        ActivityRecord {
            id: Some(4),
            kind: Some("review".into()),
            stock_list: Some("Tech Giants".into()),
            from: Some("TechInvestor".into()),
            date: Some("2025-03-17T16:20:00Z".into()),
            ..Default::default()
        },
        ActivityRecord {
            id: Some(5),
            kind: Some("deposit".into()),
            amount: Some(1000.0),
            portfolio: Some("Main Portfolio".into()),
            date: Some("2025-03-15T12:00:00Z".into()),
            ..Default::default()
        },
    ]
}
