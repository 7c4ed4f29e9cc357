//! Chart Builders
//!
//! Turn ranked scores and the raw rating table into declarative chart specs.
//!
//! - `build_bar_chart`: ranked platforms, bar height = normalized score
//! - `build_radar_chart`: raw ratings per task, one polygon per platform

pub mod builders;
pub mod types;

pub use builders::{build_bar_chart, build_radar_chart};
pub use types::{Axis, ChartKind, ChartSpec, Series};
