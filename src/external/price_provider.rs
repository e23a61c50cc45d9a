use std::collections::HashMap;

/// Per-share price used to value holdings.
///
/// No live market feed is wired in; implementations here are stand-ins until
/// a real quote source exists.
pub trait PriceProvider: Send + Sync {
    fn current_price(&self, symbol: &str) -> f64;
}

impl<F> PriceProvider for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn current_price(&self, symbol: &str) -> f64 {
        self(symbol)
    }
}

/// Values every share at the same flat price (100 by default).
#[derive(Debug, Clone)]
pub struct PlaceholderPriceProvider {
    share_price: f64,
}

impl PlaceholderPriceProvider {
    pub const DEFAULT_SHARE_PRICE: f64 = 100.0;

    pub fn new(share_price: f64) -> Self {
        Self { share_price }
    }
}

impl Default for PlaceholderPriceProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHARE_PRICE)
    }
}

impl PriceProvider for PlaceholderPriceProvider {
    fn current_price(&self, _symbol: &str) -> f64 {
        self.share_price
    }
}

/// Fixed quote table; symbols missing from it fall back to the placeholder.
#[derive(Debug, Clone)]
pub struct StaticPriceProvider {
    prices: HashMap<String, f64>,
    fallback: PlaceholderPriceProvider,
}

impl StaticPriceProvider {
    pub fn new(prices: HashMap<String, f64>, fallback: PlaceholderPriceProvider) -> Self {
        let prices = prices
            .into_iter()
            .map(|(symbol, price)| (symbol.to_uppercase(), price))
            .collect();
        Self { prices, fallback }
    }

    /// Last prices shown on the mock portfolio screens.
    pub fn fixture_quotes(fallback: PlaceholderPriceProvider) -> Self {
        let prices = [
            ("AAPL", 189.84),
            ("MSFT", 421.55),
            ("GOOGL", 174.63),
            ("AMZN", 182.41),
            ("VTI", 250.32),
            ("VXUS", 149.75),
            ("BND", 100.89),
            ("NVDA", 913.20),
            ("TSLA", 267.48),
            ("AMD", 178.90),
        ]
        .into_iter()
        .map(|(symbol, price)| (symbol.to_string(), price))
        .collect();
        Self::new(prices, fallback)
    }
}

impl PriceProvider for StaticPriceProvider {
    fn current_price(&self, symbol: &str) -> f64 {
        self.prices
            .get(&symbol.to_uppercase())
            .copied()
            .unwrap_or_else(|| self.fallback.current_price(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_ignores_symbol() {
        let provider = PlaceholderPriceProvider::default();
        assert_eq!(provider.current_price("AAPL"), 100.0);
        assert_eq!(provider.current_price("ZZZZ"), 100.0);
    }

    #[test]
    fn test_fixture_quotes_are_case_insensitive() {
        let provider = StaticPriceProvider::fixture_quotes(PlaceholderPriceProvider::default());
        assert_eq!(provider.current_price("msft"), 421.55);
        assert_eq!(provider.current_price("NVDA"), 913.20);
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        let provider = StaticPriceProvider::fixture_quotes(PlaceholderPriceProvider::new(55.0));
        assert_eq!(provider.current_price("UNKNOWN"), 55.0);
    }

    #[test]
    fn test_closure_is_a_provider() {
        let provider = |symbol: &str| if symbol == "AAPL" { 200.0 } else { 1.0 };
        assert_eq!(provider.current_price("AAPL"), 200.0);
        assert_eq!(provider.current_price("BND"), 1.0);
    }
}
