pub mod market_data;
pub mod recommendations;
pub mod sentiment;

pub use market_data::{fetch_market_data, CoinGeckoProvider, MarketDataProvider};
