//! # Weighmark
//!
//! Interactive dashboard that ranks AI platforms by how well they handle the
//! tasks a user cares about. Sliders weight each task's importance; a ranked
//! bar chart and a radar chart recompute live.
//!
//! ## Modules
//!
//! - [`ratings`]: Static rating table (tasks, platforms, colors)
//! - [`scoring`]: Weighted-sum scoring and normalization
//! - [`charts`]: Declarative bar and radar chart specs
//! - [`dashboard`]: Session state, reducer and derive step
//! - [`websocket`]: Live dashboard sessions over WebSocket
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use weighmark::dashboard::{DashboardSession, SliderEvent};
//! use weighmark::ratings::RatingStore;
//!
//! let mut session = DashboardSession::new(Arc::new(RatingStore::fixture()));
//! assert_eq!(session.view().scores[0].platform, "Claude");
//!
//! // Weight "Generating local data" as most important
//! let view = session.apply(&SliderEvent::Set { task: 0, value: 5 }).unwrap();
//! assert_eq!(view.scores[0].platform, "Perplexity");
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod ratings;
pub mod scoring;
pub mod websocket;

// Re-export top-level types for convenience
pub use ratings::{Platform, RatingError, RatingStore, Task, Theme};

pub use scoring::{compute_scores, ImportanceVector, ScoreEntry, ScoringError, TIED_SCORE};

pub use charts::{build_bar_chart, build_radar_chart, ChartKind, ChartSpec};

pub use dashboard::{derive, reduce, DashboardSession, DashboardView, SliderEvent};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{ClientMessage, HubConfig, HubError, ServerMessage, SessionHub};

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};
