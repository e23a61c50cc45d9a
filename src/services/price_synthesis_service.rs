use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{ChartView, PredictionResult, PricePoint};

/// Daily move bound for the historical walk (2%).
pub const HISTORY_VOLATILITY: f64 = 0.02;
/// Per-day-ahead step of the prediction walk (1% of the anchor).
pub const PREDICTION_STEP: f64 = 0.01;
/// Lower bound keeps prediction drift slightly upward.
pub const PREDICTION_DRIFT_LOW: f64 = -0.8;
pub const PREDICTION_DRIFT_HIGH: f64 = 1.2;
/// Floor applied to every synthesized price.
pub const MIN_PRICE: f64 = 0.01;
pub const DEFAULT_BASE_PRICE: f64 = 100.0;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;
pub const DEFAULT_MAX_DAYS: i64 = 3650;
/// Highest `MAX_SYNTH_DAYS` the service accepts (about a century).
pub const MAX_SYNTH_DAYS_CEILING: i64 = 36500;

const BASE_PRICES: &[(&str, f64)] = &[
    ("AAPL", 180.0),
    ("MSFT", 400.0),
    ("GOOGL", 170.0),
    ("AMZN", 180.0),
    ("NVDA", 900.0),
    ("TSLA", 260.0),
    ("AMD", 180.0),
    ("VTI", 250.0),
    ("VXUS", 150.0),
    ("BND", 100.0),
];

/// Starting price for the synthetic walk of `symbol`.
pub fn base_price(symbol: &str) -> f64 {
    let symbol = symbol.trim().to_uppercase();
    BASE_PRICES
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesizes chart data for symbols without touching any market feed.
///
/// Randomness is always supplied by the caller, so a seeded generator
/// reproduces the same series.
#[derive(Debug, Clone)]
pub struct PriceSynthesizer {
    today: NaiveDate,
    max_days: i64,
    lookback_days: i64,
    volatility: f64,
    prediction_step: f64,
}

impl PriceSynthesizer {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            max_days: DEFAULT_MAX_DAYS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            volatility: HISTORY_VOLATILITY,
            prediction_step: PREDICTION_STEP,
        }
    }

    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn with_limits(mut self, max_days: i64, lookback_days: i64) -> Self {
        self.max_days = max_days;
        self.lookback_days = lookback_days;
        self
    }

    /// Daily move bound of the history walk and per-day step of the
    /// prediction, both as fractions of the price.
    pub fn with_volatility(mut self, volatility: f64, prediction_step: f64) -> Self {
        self.volatility = volatility;
        self.prediction_step = prediction_step;
        self
    }

    /// `days + 1` daily points ending today; the oldest carries the base price.
    pub fn generate_history<R: Rng>(
        &self,
        symbol: &str,
        days: i64,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>, AppError> {
        if days < 0 {
            return Err(AppError::InvalidArgument(format!(
                "history days must be >= 0, got {}",
                days
            )));
        }
        self.check_upper_bound("history", days)?;

        let start = self.shift("history", -days)?;
        let mut price = base_price(symbol);
        let mut points = Vec::with_capacity(days as usize + 1);
        points.push(PricePoint::new(start, round2(price)));

        for offset in 1..=days {
            let shock: f64 = rng.random_range(-1.0..1.0);
            price = (price + price * self.volatility * shock).max(MIN_PRICE);
            points.push(PricePoint::new(start + Duration::days(offset), round2(price)));
        }

        debug!(
            "Synthesized {} historical points for {} ending {}",
            points.len(),
            symbol,
            self.today
        );
        Ok(points)
    }

    /// Mocked prediction for the `days` calendar days after today, anchored
    /// on the last price of a fixed-length lookback history.
    pub fn predict<R: Rng>(
        &self,
        symbol: &str,
        days: i64,
        rng: &mut R,
    ) -> Result<PredictionResult, AppError> {
        self.check_horizon(days)?;
        let history = self.generate_history(symbol, self.lookback_days, rng)?;
        let anchor = history
            .last()
            .map(|p| p.price)
            .unwrap_or_else(|| base_price(symbol));
        self.predict_from_anchor(symbol, anchor, days, rng)
    }

    /// History and prediction as one continuous series. The prediction is
    /// anchored on the last point of the returned history.
    pub fn chart<R: Rng>(
        &self,
        symbol: &str,
        history_days: i64,
        prediction_days: i64,
        rng: &mut R,
    ) -> Result<ChartView, AppError> {
        self.check_horizon(prediction_days)?;
        let mut points = self.generate_history(symbol, history_days, rng)?;
        let last_historical = points
            .last()
            .map(|p| p.price)
            .unwrap_or_else(|| base_price(symbol));

        let prediction = self.predict_from_anchor(symbol, last_historical, prediction_days, rng)?;
        let last_predicted = prediction
            .predicted_prices
            .last()
            .map(|p| p.price)
            .unwrap_or(last_historical);

        let prediction_start_index = points.len();
        points.extend(prediction.predicted_prices);

        Ok(ChartView {
            symbol: symbol.to_string(),
            points,
            prediction_start_index,
            confidence: prediction.confidence,
            change_percent: percent_change(last_historical, last_predicted),
        })
    }

    fn predict_from_anchor<R: Rng>(
        &self,
        symbol: &str,
        anchor: f64,
        days: i64,
        rng: &mut R,
    ) -> Result<PredictionResult, AppError> {
        // Reject horizons past the calendar before drawing anything.
        self.shift("prediction", days)?;

        let predicted_prices = (1..=days)
            .map(|ahead| {
                let drift: f64 = rng.random_range(PREDICTION_DRIFT_LOW..PREDICTION_DRIFT_HIGH);
                let price = (anchor + anchor * self.prediction_step * drift * ahead as f64).max(MIN_PRICE);
                PricePoint::new(self.today + Duration::days(ahead), round2(price))
            })
            .collect();

        // Whole hundredths in 50..90 keep the score in [0.50, 0.90) after rounding.
        let confidence = rng.random_range(50u32..90) as f64 / 100.0;

        Ok(PredictionResult {
            symbol: symbol.to_string(),
            predicted_prices,
            confidence,
        })
    }

    fn check_horizon(&self, days: i64) -> Result<(), AppError> {
        if days < 1 {
            return Err(AppError::InvalidArgument(format!(
                "prediction days must be >= 1, got {}",
                days
            )));
        }
        self.check_upper_bound("prediction", days)
    }

    /// `today` moved by `days`, or an error when that leaves the calendar.
    fn shift(&self, what: &str, days: i64) -> Result<NaiveDate, AppError> {
        Duration::try_days(days)
            .and_then(|delta| self.today.checked_add_signed(delta))
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "{} of {} days runs past the supported date range",
                    what,
                    days.unsigned_abs()
                ))
            })
    }

    fn check_upper_bound(&self, what: &str, days: i64) -> Result<(), AppError> {
        if days > self.max_days {
            return Err(AppError::InvalidArgument(format!(
                "{} days must be <= {}, got {}",
                what, self.max_days, days
            )));
        }
        Ok(())
    }
}

/// Percentage change from `from` to `to`, two decimals; 0 when `from` is 0.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    round2((to - from) / from * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn has_two_decimals(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-6
    }

    fn assert_contiguous(points: &[PricePoint]) {
        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_zero_day_history_is_base_price_today() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(1);
        let points = synth.generate_history("AAPL", 0, &mut rng).unwrap();

        assert_eq!(points, vec![PricePoint::new(today(), 180.0)]);
    }

    #[test]
    fn test_history_shape() {
        let synth = PriceSynthesizer::new(today());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = synth.generate_history("MSFT", 45, &mut rng).unwrap();

            assert_eq!(points.len(), 46);
            assert_eq!(points.last().unwrap().date, today());
            assert_eq!(points[0].date, today() - Duration::days(45));
            assert_contiguous(&points);
            for point in &points {
                assert!(point.price > 0.0);
                assert!(has_two_decimals(point.price), "{} not rounded", point.price);
            }
        }
    }

    #[test]
    fn test_history_moves_at_most_two_percent_per_day() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(7);
        let points = synth.generate_history("NVDA", 60, &mut rng).unwrap();

        for pair in points.windows(2) {
            let change = (pair[1].price - pair[0].price).abs() / pair[0].price;
            // Rounding to cents can add a hair on top of the 2% bound.
            assert!(change <= HISTORY_VOLATILITY + 0.001, "daily change {}", change);
        }
    }

    #[test]
    fn test_unknown_symbol_starts_at_default() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(3);
        let points = synth.generate_history("ZZZZ", 5, &mut rng).unwrap();
        assert_eq!(points[0].price, DEFAULT_BASE_PRICE);
        assert_eq!(base_price("tsla"), 260.0);
    }

    #[test]
    fn test_same_seed_same_series() {
        let synth = PriceSynthesizer::new(today());
        let a = synth
            .generate_history("GOOGL", 30, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = synth
            .generate_history("GOOGL", 30, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_days_rejected() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            synth.generate_history("AAPL", -1, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            synth.predict("AAPL", -5, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            synth.predict("AAPL", 0, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_days_above_limit_rejected() {
        let synth = PriceSynthesizer::new(today()).with_limits(100, 30);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(synth.generate_history("AAPL", 100, &mut rng).is_ok());
        assert!(matches!(
            synth.generate_history("AAPL", 101, &mut rng),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_days_past_calendar_rejected_without_limit() {
        let synth = PriceSynthesizer::new(today()).with_limits(i64::MAX, 30);
        let mut rng = StdRng::seed_from_u64(0);

        for days in [200_000_000, i64::MAX] {
            assert!(matches!(
                synth.generate_history("AAPL", days, &mut rng),
                Err(AppError::InvalidArgument(_))
            ));
            assert!(matches!(
                synth.predict("AAPL", days, &mut rng),
                Err(AppError::InvalidArgument(_))
            ));
            assert!(matches!(
                synth.chart("AAPL", 5, days, &mut rng),
                Err(AppError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_full_volatility_keeps_floor_and_cents() {
        let synth = PriceSynthesizer::new(today()).with_volatility(1.0, 1.0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chart = synth.chart("BND", 120, 60, &mut rng).unwrap();
            for point in &chart.points {
                assert!(point.price >= MIN_PRICE, "{} below floor", point.price);
                assert!(has_two_decimals(point.price), "{} not rounded", point.price);
            }
        }
    }

    #[test]
    fn test_volatility_bounds_daily_moves() {
        let synth = PriceSynthesizer::new(today()).with_volatility(0.05, PREDICTION_STEP);
        let mut rng = StdRng::seed_from_u64(13);
        let points = synth.generate_history("MSFT", 90, &mut rng).unwrap();

        let widest = points
            .windows(2)
            .map(|pair| (pair[1].price - pair[0].price).abs() / pair[0].price)
            .fold(0.0, f64::max);
        assert!(widest <= 0.05 + 0.001, "daily change {}", widest);
        assert!(widest > HISTORY_VOLATILITY, "90 draws never exceeded 2%");
    }

    #[test]
    fn test_prediction_shape() {
        let synth = PriceSynthesizer::new(today());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = synth.predict("AMZN", 14, &mut rng).unwrap();

            assert_eq!(result.symbol, "AMZN");
            assert_eq!(result.predicted_prices.len(), 14);
            assert_eq!(result.predicted_prices[0].date, today() + Duration::days(1));
            assert_contiguous(&result.predicted_prices);
            for point in &result.predicted_prices {
                assert!(point.date > today());
                assert!(point.price > 0.0);
                assert!(has_two_decimals(point.price));
            }
            assert!(result.confidence >= 0.5 && result.confidence < 0.9);
            assert!(has_two_decimals(result.confidence));
        }
    }

    #[test]
    fn test_single_day_prediction() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(11);
        let result = synth.predict("BND", 1, &mut rng).unwrap();
        assert_eq!(result.predicted_prices.len(), 1);
        assert_eq!(result.predicted_prices[0].date, today() + Duration::days(1));
    }

    #[test]
    fn test_prediction_spread_grows_with_distance() {
        // Each day lies within anchor * (1 + 0.01 * [-0.8, 1.2) * i).
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(5);
        let chart = synth.chart("VTI", 10, 20, &mut rng).unwrap();
        let anchor = chart.points[chart.prediction_start_index - 1].price;

        for (i, point) in chart.points[chart.prediction_start_index..].iter().enumerate() {
            let ahead = (i + 1) as f64;
            let low = anchor * (1.0 + PREDICTION_STEP * PREDICTION_DRIFT_LOW * ahead) - 0.01;
            let high = anchor * (1.0 + PREDICTION_STEP * PREDICTION_DRIFT_HIGH * ahead) + 0.01;
            assert!(point.price >= low && point.price <= high, "day {}: {}", ahead, point.price);
        }
    }

    #[test]
    fn test_extreme_prediction_stays_positive() {
        // 0.01 * -0.8 * 200 would push the anchor below zero without the floor.
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(21);
        let result = synth.predict("AMD", 200, &mut rng).unwrap();
        assert!(result.predicted_prices.iter().all(|p| p.price >= MIN_PRICE));
    }

    #[test]
    fn test_chart_concatenates_history_and_prediction() {
        let synth = PriceSynthesizer::new(today());
        let mut rng = StdRng::seed_from_u64(8);
        let chart = synth.chart("AAPL", 30, 7, &mut rng).unwrap();

        assert_eq!(chart.points.len(), 31 + 7);
        assert_eq!(chart.prediction_start_index, 31);
        assert_eq!(chart.points[30].date, today());
        assert_contiguous(&chart.points);

        let last_hist = chart.points[30].price;
        let last_pred = chart.points.last().unwrap().price;
        assert_eq!(chart.change_percent, percent_change(last_hist, last_pred));
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(100.0, 102.4), 2.4);
        assert_eq!(percent_change(200.0, 150.0), -25.0);
        assert_eq!(percent_change(0.0, 10.0), 0.0);
    }
}
