use std::sync::Arc;

use crate::{
    config::Config,
    services::{CoinGeckoProvider, MarketDataProvider},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub market_data: Arc<dyn MarketDataProvider>,
}

impl AppState {
    pub fn new(market_data: Arc<dyn MarketDataProvider>) -> Self {
        Self { market_data }
    }

    /// State wired to the real upstream services named in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(CoinGeckoProvider::new(
            config.coingecko_api_url.clone(),
        )))
    }
}
