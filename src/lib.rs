//! # Creator Insights
//!
//! Server-rendered web front-end for trending audio and hashtag insights.
//! Authentication and trend computation live in an external backend; this
//! crate renders pages, collects form input, and relays one backend call
//! per user action.
//!
//! ## Modules
//!
//! - [`config`]: TOML + environment configuration, validated at startup
//! - [`backend`]: HTTP client for the backend API
//! - [`session`]: Session cookie context for protected pages
//! - [`web`]: Axum router, pages, and error handling
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use creator_insights::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!
//!     let state = AppState::new(config)?;
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod logging;
pub mod session;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{
    BackendClient, BackendError, Credentials, LoginResponse, TrendPayload, TrendQuery,
};

pub use config::{
    generate_default_config, BackendConfig, Config, ConfigError, ConfigSource, LogFormat,
    LoggingConfig, ServerConfig, SessionConfig,
};

pub use session::Session;

pub use web::{build_router, serve, AppState, WebError, WebResult};
