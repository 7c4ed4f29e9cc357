//! Declarative chart descriptions
//!
//! Engine-agnostic: the browser maps these onto Plotly traces, the CLI prints
//! them as JSON. Nothing here knows how a chart is drawn.

use serde::Serialize;

use crate::ratings::Theme;

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars over categorical x values
    Bar,
    /// Polar polygons, one axis per category
    Radar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Radar => write!(f, "radar"),
        }
    }
}

/// One data series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    /// Legend entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category labels (x values for bars, axis names for radar)
    pub labels: Vec<String>,
    /// Magnitudes (bar heights or radii)
    pub values: Vec<f64>,
    /// Per-point colors, or a single line color
    pub colors: Vec<String>,
    /// Per-point value labels; the renderer places them where they fit
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    /// Fill the enclosed area
    pub filled: bool,
    /// Join the last point back to the first
    pub closed: bool,
}

/// Axis settings
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fixed `[min, max]`; renderer autoscales when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub visible: bool,
}

impl Axis {
    /// Visible axis with a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            range: None,
            visible: true,
        }
    }

    /// Visible axis with a fixed range
    pub fn ranged(min: f64, max: f64) -> Self {
        Self {
            title: None,
            range: Some([min, max]),
            visible: true,
        }
    }
}

/// A complete chart description
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
    /// Category axis (bar) or angular axis (radar)
    pub x_axis: Axis,
    /// Value axis (bar) or radial axis (radar)
    pub y_axis: Axis,
    pub show_legend: bool,
    pub theme: Theme,
}
