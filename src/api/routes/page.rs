//! Page Routes
//!
//! - GET / - Dashboard page: instructions, one slider per task, chart panes

use axum::{extract::State, response::Html};
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::ratings::{RatingStore, Task, MAX_LEVEL, MIN_LEVEL};

const TEMPLATE: &str = include_str!("../../../static/index.html");
const TEMPLATE_NAME: &str = "index";

pub const PAGE_TITLE: &str = "AI Platform Comparison for Economic Development Tasks";

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    Ok(Html(state.pages.render(&state.store)?))
}

/// Values the page template reads
#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    background: &'a str,
    text: &'a str,
    tasks: &'a [Task],
    min: u8,
    max: u8,
    ticks: Vec<u8>,
}

/// Handlebars registry holding the dashboard page
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Compile the page template
    pub fn new() -> ApiResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| ApiError::Template(e.to_string()))?;

        Ok(Self { registry })
    }

    /// Render the page for a rating store
    pub fn render(&self, store: &RatingStore) -> ApiResult<String> {
        let theme = store.theme();
        let context = PageContext {
            title: PAGE_TITLE,
            background: &theme.background,
            text: &theme.text,
            tasks: store.tasks(),
            min: MIN_LEVEL,
            max: MAX_LEVEL,
            ticks: (MIN_LEVEL..=MAX_LEVEL).collect(),
        };

        self.registry
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| ApiError::Template(e.to_string()))
    }
}
