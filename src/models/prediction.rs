use serde::{Deserialize, Serialize};

use super::PricePoint;

/// Mocked forward continuation of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub symbol: String,
    pub predicted_prices: Vec<PricePoint>,
    /// Uniform in [0.50, 0.90), two decimals.
    pub confidence: f64,
}

/// History followed by prediction, ready for a single line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub symbol: String,
    pub points: Vec<PricePoint>,
    /// Index of the first predicted point in `points`.
    pub prediction_start_index: usize,
    pub confidence: f64,
    /// Last historical price to last predicted price, in percent.
    pub change_percent: f64,
}
