use serde::{Deserialize, Serialize};

// Portfolio as returned by the backend (`portfolio_id`, `stocks`, `num_shares`)
// or as written in mock fixtures (`id`, `cash`, `shares`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    #[serde(default, alias = "portfolio_id")]
    pub id: Option<i64>,
    #[serde(default, alias = "portfolio_name")]
    pub name: Option<String>,
    #[serde(default, alias = "user_id")]
    pub owner_id: Option<i64>,
    #[serde(default, alias = "cash")]
    pub cash_balance: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, alias = "stocks")]
    pub holdings: Option<Holdings>,
    // Percent change over the reporting period, when the source provides one.
    #[serde(default, alias = "change")]
    pub change_percent: Option<f64>,
}

/// Holdings arrive either itemized or, on summary screens, as a bare count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Holdings {
    Entries(Vec<HoldingRecord>),
    Count(u32),
}

impl From<Vec<HoldingRecord>> for Holdings {
    fn from(entries: Vec<HoldingRecord>) -> Self {
        Holdings::Entries(entries)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    pub symbol: String,
    #[serde(alias = "num_shares")]
    pub shares: f64,
}

impl HoldingRecord {
    pub fn new(symbol: &str, shares: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            shares,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioView {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub total_value: f64,
    pub cash_balance: f64,
    pub change_percent: f64,
    pub created_at: Option<String>,
    pub holding_count: usize,
    pub holdings: Vec<HoldingView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingView {
    pub symbol: String,
    pub shares: f64,
    pub current_price: f64,
    pub total_value: f64,
}

#[cfg(test)]
impl PortfolioView {
    /// The raw fields this view was derived from.
    pub fn to_record(&self) -> PortfolioRecord {
        let holdings = if self.holdings.is_empty() && self.holding_count > 0 {
            Holdings::Count(self.holding_count as u32)
        } else {
            Holdings::Entries(
                self.holdings
                    .iter()
                    .map(|h| HoldingRecord::new(&h.symbol, h.shares))
                    .collect(),
            )
        };
        PortfolioRecord {
            id: Some(self.id),
            name: Some(self.name.clone()),
            owner_id: Some(self.owner_id),
            cash_balance: Some(self.cash_balance),
            created_at: self.created_at.clone(),
            holdings: Some(holdings),
            change_percent: Some(self.change_percent),
        }
    }
}
