//! Backend Integration
//!
//! Everything the front-end knows about the external API service.
//! Authentication and trend computation happen there; this module only
//! sends requests and relays what comes back.
//!
//! ## Endpoints
//!
//! - `POST /auth/login` - exchange credentials for a session cookie
//! - `GET /v1/trends/audio[?niche=]` - trending audio payload

mod client;
mod types;

pub use client::{BackendClient, BackendError};
pub use types::{Credentials, LoginResponse, TrendPayload, TrendQuery, TrendTable};
