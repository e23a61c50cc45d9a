use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::external::price_provider::PriceProvider;
use crate::models::{
    ActivityKind, ActivityRecord, ActivityView, DashboardView, FriendRequestRecord,
    FriendRequestView, HoldingRecord, HoldingView, Holdings, PortfolioRecord, PortfolioSortField,
    PortfolioView, RequestStatus, SortDirection, StockListRecord, StockListView, Visibility,
};
use crate::services::price_synthesis_service::round2;

pub fn to_portfolio_view(
    record: &PortfolioRecord,
    prices: &dyn PriceProvider,
) -> Result<PortfolioView, AppError> {
    let id = record
        .id
        .ok_or_else(|| AppError::MalformedRecord("portfolio is missing its id".into()))?;
    let cash_balance = record.cash_balance.unwrap_or(0.0);

    let (entries, declared_count): (&[HoldingRecord], Option<usize>) = match &record.holdings {
        Some(Holdings::Entries(entries)) => (entries.as_slice(), None),
        Some(Holdings::Count(count)) => (&[], Some(*count as usize)),
        None => (&[], None),
    };

    let holdings = entries
        .iter()
        .map(|holding| {
            if holding.symbol.trim().is_empty() {
                return Err(AppError::MalformedRecord(format!(
                    "portfolio {} has a holding without a symbol",
                    id
                )));
            }
            let current_price = prices.current_price(&holding.symbol);
            Ok(HoldingView {
                symbol: holding.symbol.clone(),
                shares: holding.shares,
                current_price,
                total_value: round2(holding.shares * current_price),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stocks_value: f64 = holdings.iter().map(|h| h.shares * h.current_price).sum();

    Ok(PortfolioView {
        id,
        name: record.name.clone().unwrap_or_default(),
        owner_id: record.owner_id.unwrap_or(0),
        total_value: round2(cash_balance + stocks_value),
        cash_balance,
        change_percent: record.change_percent.unwrap_or(0.0),
        created_at: record.created_at.clone(),
        // A bare count can't be valued, so it only feeds the count.
        holding_count: declared_count.unwrap_or(holdings.len()),
        holdings,
    })
}

/// Stable in-place sort; names compare case-insensitively.
pub fn sort_portfolio_views(
    views: &mut [PortfolioView],
    field: PortfolioSortField,
    direction: SortDirection,
) {
    views.sort_by(|a, b| {
        let ordering = match field {
            PortfolioSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            PortfolioSortField::Value => a.total_value.total_cmp(&b.total_value),
            PortfolioSortField::Change => a.change_percent.total_cmp(&b.change_percent),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

pub fn to_stock_list_view(record: &StockListRecord) -> Result<StockListView, AppError> {
    let id = record
        .id
        .ok_or_else(|| AppError::MalformedRecord("stock list is missing its id".into()))?;
    let shared_with = record.shared_with.unwrap_or(0);

    let visibility = match record.visibility.as_deref() {
        Some(label) => Visibility::parse(label).ok_or_else(|| {
            AppError::MalformedRecord(format!(
                "stock list {} has unknown visibility '{}'",
                id, label
            ))
        })?,
        None if record.is_public.unwrap_or(false) => Visibility::Public,
        None if shared_with > 0 => Visibility::Shared,
        None => Visibility::Private,
    };

    let stock_count = match &record.stocks {
        Some(stocks) => stocks.len() as u32,
        None => record.stock_count.unwrap_or(0),
    };

    debug!("Stock list {} resolved as {}", id, visibility.as_str());

    Ok(StockListView {
        id,
        name: record.name.clone().unwrap_or_default(),
        creator_id: record.creator_id.unwrap_or(0),
        visibility,
        stock_count,
        review_count: record.review_count.unwrap_or(0),
        shared_with,
        created_at: record.created_at.clone(),
    })
}

pub fn to_friend_request_view(record: &FriendRequestRecord) -> Result<FriendRequestView, AppError> {
    let id = record
        .id
        .ok_or_else(|| AppError::MalformedRecord("friend request is missing its id".into()))?;

    let display_name = match (&record.sender_name, record.sender_id) {
        (Some(name), _) if !name.trim().is_empty() => name.trim().to_string(),
        (_, Some(sender_id)) => sender_id.to_string(),
        _ => {
            return Err(AppError::MalformedRecord(format!(
                "friend request {} has neither a sender name nor a sender id",
                id
            )))
        }
    };

    let initial = display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    let status = match record.status.as_deref() {
        Some(label) => RequestStatus::parse(label).ok_or_else(|| {
            AppError::MalformedRecord(format!("friend request {} has unknown status '{}'", id, label))
        })?,
        None => RequestStatus::Pending,
    };

    let requested_on = match record.created_at.as_deref() {
        Some(raw) => Some(format_short_date(raw).ok_or_else(|| {
            AppError::MalformedRecord(format!("friend request {} has unreadable date '{}'", id, raw))
        })?),
        None => None,
    };

    Ok(FriendRequestView {
        id,
        requester_id: record.sender_id,
        display_name,
        initial,
        status,
        requested_on,
    })
}

pub fn to_activity_view(record: &ActivityRecord) -> Result<ActivityView, AppError> {
    let id = record
        .id
        .ok_or_else(|| AppError::MalformedRecord("activity entry is missing its id".into()))?;
    let label = record
        .kind
        .as_deref()
        .ok_or_else(|| AppError::MalformedRecord(format!("activity {} has no type", id)))?;
    let kind = ActivityKind::parse(label).ok_or_else(|| {
        AppError::MalformedRecord(format!("activity {} has unknown type '{}'", id, label))
    })?;

    let missing = |field: &str| {
        AppError::MalformedRecord(format!("{:?} activity {} is missing {}", kind, id, field))
    };
    let amount = match kind {
        ActivityKind::Purchase | ActivityKind::Sale => {
            if record.symbol.as_deref().map_or(true, |s| s.trim().is_empty()) {
                return Err(missing("symbol"));
            }
            match (record.shares, record.price) {
                (Some(shares), Some(price)) => Some(round2(shares * price)),
                _ => record.amount,
            }
        }
        ActivityKind::FriendRequest | ActivityKind::Review => {
            if record.from.is_none() {
                return Err(missing("from"));
            }
            None
        }
        ActivityKind::Deposit => Some(record.amount.ok_or_else(|| missing("amount"))?),
    };

    let status = match record.status.as_deref() {
        Some(label) => Some(RequestStatus::parse(label).ok_or_else(|| {
            AppError::MalformedRecord(format!("activity {} has unknown status '{}'", id, label))
        })?),
        None => None,
    };

    let occurred_on = match record.date.as_deref() {
        Some(raw) => Some(format_short_date(raw).ok_or_else(|| {
            AppError::MalformedRecord(format!("activity {} has unreadable date '{}'", id, raw))
        })?),
        None => None,
    };

    Ok(ActivityView {
        id,
        kind,
        symbol: record.symbol.clone(),
        shares: record.shares,
        price: record.price,
        amount,
        counterparty: record.from.clone(),
        status,
        stock_list: record.stock_list.clone(),
        portfolio: record.portfolio.clone(),
        occurred_on,
    })
}

pub fn to_dashboard_view(
    portfolios: &[PortfolioRecord],
    stock_lists: &[StockListRecord],
    friend_requests: &[FriendRequestRecord],
    activity: &[ActivityRecord],
    prices: &dyn PriceProvider,
) -> Result<DashboardView, AppError> {
    let portfolios = portfolios
        .iter()
        .map(|p| to_portfolio_view(p, prices))
        .collect::<Result<Vec<_>, _>>()?;
    let stock_lists = stock_lists
        .iter()
        .map(to_stock_list_view)
        .collect::<Result<Vec<_>, _>>()?;
    let friend_requests = friend_requests
        .iter()
        .map(to_friend_request_view)
        .collect::<Result<Vec<_>, _>>()?;
    let recent_activity = activity
        .iter()
        .map(to_activity_view)
        .collect::<Result<Vec<_>, _>>()?;

    let total_portfolio_value = round2(portfolios.iter().map(|p| p.total_value).sum());
    let pending_request_count = friend_requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .count();

    Ok(DashboardView {
        total_portfolio_value,
        portfolio_count: portfolios.len(),
        stock_list_count: stock_lists.len(),
        pending_request_count,
        portfolios,
        stock_lists,
        friend_requests,
        recent_activity,
    })
}

/// "2025-03-18T08:45:00Z" -> "Mar 18". Accepts RFC 3339, a space-separated
/// timestamp, or a bare date.
fn format_short_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => Some(date.format("%b %-d").to_string()),
        Err(e) => {
            warn!("Could not parse date '{}': {}", raw, e);
            None
        }
    }
}
