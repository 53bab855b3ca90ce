//! Crypto investment advisor.
//!
//! Two halves of one wire contract:
//!
//! - [`client`]: the recommendation form handler. It validates the budget,
//!   posts `{"risk_level", "budget"}` to `/investment_recommendation` and
//!   renders the reply into a display container behind [`client::RecommendationView`].
//! - [`api`]: the axum service answering that endpoint, plus `/market_data`
//!   and `/health`.
//!
//! [`terminal`] hosts the client on a command line.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod terminal;

pub use config::Config;
pub use error::{AppError, AppResult, ClientError, ClientResult};
