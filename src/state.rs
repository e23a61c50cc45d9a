use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{AppConfig, PriceProviderKind};
use crate::external::price_provider::{PlaceholderPriceProvider, PriceProvider, StaticPriceProvider};
use crate::services::price_synthesis_service::PriceSynthesizer;
use crate::store::FixtureStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub price_provider: Arc<dyn PriceProvider>,
    pub store: Arc<FixtureStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: FixtureStore) -> Self {
        let placeholder = PlaceholderPriceProvider::new(config.placeholder_share_price);
        let price_provider: Arc<dyn PriceProvider> = match config.price_provider {
            PriceProviderKind::Placeholder => Arc::new(placeholder),
            PriceProviderKind::Fixture => Arc::new(StaticPriceProvider::fixture_quotes(placeholder)),
        };
        Self {
            config: Arc::new(config),
            price_provider,
            store: Arc::new(store),
        }
    }

    /// Synthesizer pinned to the current UTC date.
    pub fn synthesizer(&self) -> PriceSynthesizer {
        PriceSynthesizer::for_today()
            .with_limits(self.config.max_synth_days, self.config.prediction_lookback_days)
            .with_volatility(self.config.synth_volatility, self.config.prediction_step)
    }

    /// Fresh generator per request; `SYNTH_SEED` makes responses reproducible.
    pub fn rng(&self) -> StdRng {
        match self.config.synth_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
