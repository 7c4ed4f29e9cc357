//! Reactive dashboard state
//!
//! Any slider change recomputes everything:
//!
//! ```text
//! SliderEvent ──reduce──▶ ImportanceVector ──derive──▶ DashboardView
//!                                                     (scores, bar, radar)
//! ```
//!
//! `reduce` and `derive` are pure; `DashboardSession` just holds the current
//! vector between events. Transport lives in [`crate::websocket`].

mod session;

pub use session::{derive, reduce, DashboardSession, DashboardView, SliderEvent};
