//! Reading Session Analytics Service
//!
//! Consumes client-reported reading sessions and produces:
//! - Server-side engagement validation (bot/scroll-through rejection)
//! - Per-book rolling counters (views, trailing-24h views, income)
//! - Idempotent aggregation keyed by session ID
//! - Snapshot queries for the presentation layer
//!
//! # Architecture
//!
//! ```text
//! Reading clients (session end)
//!        │
//!   ┌────▼─────┐
//!   │ Ingest   │  ← payload checks, catalog lookup, rate limits
//!   └────┬─────┘
//!        │
//!   ┌────▼─────┐
//!   │Validator │  ← pure engagement-plausibility rules
//!   └────┬─────┘
//!        │
//!   ┌────▼─────┐
//!   │Aggregator│  ← per-book counters, dedup, 24h window
//!   └────┬─────┘
//!        │
//!   ┌────▼─────┐
//!   │ Query    │  ← consistent snapshots
//!   └──────────┘
//! ```

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod router;
pub mod state;
pub mod validator;
pub mod window;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
