use std::net::{IpAddr, SocketAddr};

use crate::services::price_synthesis_service::{
    DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_DAYS, HISTORY_VOLATILITY, MAX_SYNTH_DAYS_CEILING,
    PREDICTION_STEP,
};

/// Which per-share price source the view mapper is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceProviderKind {
    Placeholder,
    Fixture,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub price_provider: PriceProviderKind,
    pub placeholder_share_price: f64,
    pub synth_seed: Option<u64>,
    pub max_synth_days: i64,
    pub prediction_lookback_days: i64,
    pub synth_volatility: f64,
    pub prediction_step: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            price_provider: PriceProviderKind::Placeholder,
            placeholder_share_price: 100.0,
            synth_seed: None,
            max_synth_days: DEFAULT_MAX_DAYS,
            prediction_lookback_days: DEFAULT_LOOKBACK_DAYS,
            synth_volatility: HISTORY_VOLATILITY,
            prediction_step: PREDICTION_STEP,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or(&lookup, "HOST", defaults.host)?;
        let port = parse_or(&lookup, "PORT", defaults.port)?;

        let price_provider = match lookup("PRICE_PROVIDER")
            .unwrap_or_else(|| "placeholder".to_string())
            .to_lowercase()
            .as_str()
        {
            "placeholder" => PriceProviderKind::Placeholder,
            "fixture" => PriceProviderKind::Fixture,
            other => {
                return Err(format!(
                    "Invalid PRICE_PROVIDER: {}. Must be 'placeholder' or 'fixture'",
                    other
                ))
            }
        };

        let placeholder_share_price =
            parse_or(&lookup, "PLACEHOLDER_SHARE_PRICE", defaults.placeholder_share_price)?;
        let synth_seed = match lookup("SYNTH_SEED") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| format!("Invalid SYNTH_SEED '{}': {}", raw, e))?,
            ),
            None => None,
        };
        let max_synth_days = parse_or(&lookup, "MAX_SYNTH_DAYS", defaults.max_synth_days)?;
        let prediction_lookback_days =
            parse_or(&lookup, "PREDICTION_LOOKBACK_DAYS", defaults.prediction_lookback_days)?;
        let synth_volatility = parse_or(&lookup, "SYNTH_VOLATILITY", defaults.synth_volatility)?;
        let prediction_step = parse_or(&lookup, "PREDICTION_STEP", defaults.prediction_step)?;

        let config = Self {
            host,
            port,
            price_provider,
            placeholder_share_price,
            synth_seed,
            max_synth_days,
            prediction_lookback_days,
            synth_volatility,
            prediction_step,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.placeholder_share_price > 0.0) {
            return Err("PLACEHOLDER_SHARE_PRICE must be positive".to_string());
        }
        if self.max_synth_days < 1 || self.max_synth_days > MAX_SYNTH_DAYS_CEILING {
            return Err(format!(
                "MAX_SYNTH_DAYS must be between 1 and {}",
                MAX_SYNTH_DAYS_CEILING
            ));
        }
        if self.prediction_lookback_days < 0 || self.prediction_lookback_days > self.max_synth_days {
            return Err(format!(
                "PREDICTION_LOOKBACK_DAYS must be between 0 and {}",
                self.max_synth_days
            ));
        }
        for (key, value) in [
            ("SYNTH_VOLATILITY", self.synth_volatility),
            ("PREDICTION_STEP", self.prediction_step),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(format!("{} must be in (0, 1], got {}", key, value));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Invalid {} '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.price_provider, PriceProviderKind::Placeholder);
        assert_eq!(config.placeholder_share_price, 100.0);
        assert_eq!(config.synth_seed, None);
        assert_eq!(config.prediction_lookback_days, 30);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PRICE_PROVIDER", "Fixture"),
            ("SYNTH_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.price_provider, PriceProviderKind::Fixture);
        assert_eq!(config.synth_seed, Some(42));
    }

    #[test]
    fn test_rejects_unknown_provider() {
        let err = AppConfig::from_lookup(lookup_from(&[("PRICE_PROVIDER", "yahoo")])).unwrap_err();
        assert!(err.contains("PRICE_PROVIDER"));
    }

    #[test]
    fn test_rejects_non_positive_placeholder_price() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("PLACEHOLDER_SHARE_PRICE", "0")])).unwrap_err();
        assert!(err.contains("PLACEHOLDER_SHARE_PRICE"));
    }

    #[test]
    fn test_rejects_lookback_beyond_max() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("MAX_SYNTH_DAYS", "10"),
            ("PREDICTION_LOOKBACK_DAYS", "30"),
        ]))
        .unwrap_err();
        assert!(err.contains("PREDICTION_LOOKBACK_DAYS"));
    }

    #[test]
    fn test_rejects_max_days_above_ceiling() {
        let err = AppConfig::from_lookup(lookup_from(&[("MAX_SYNTH_DAYS", "1000000000")]))
            .unwrap_err();
        assert!(err.contains("MAX_SYNTH_DAYS"));

        let config = AppConfig::from_lookup(lookup_from(&[("MAX_SYNTH_DAYS", "36500")])).unwrap();
        assert_eq!(config.max_synth_days, MAX_SYNTH_DAYS_CEILING);
    }

    #[test]
    fn test_volatility_overrides_and_bounds() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SYNTH_VOLATILITY", "0.05"),
            ("PREDICTION_STEP", "0.02"),
        ]))
        .unwrap();
        assert_eq!(config.synth_volatility, 0.05);
        assert_eq!(config.prediction_step, 0.02);

        for (key, raw) in [
            ("SYNTH_VOLATILITY", "0"),
            ("SYNTH_VOLATILITY", "1.5"),
            ("PREDICTION_STEP", "-0.01"),
            ("PREDICTION_STEP", "NaN"),
        ] {
            let err = AppConfig::from_lookup(lookup_from(&[(key, raw)])).unwrap_err();
            assert!(err.contains(key), "{}", err);
        }
    }
}
