//! HTTP handlers for the dashboard API.
//!
//! Each handler maps one page output to the callback that computes it.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde_json::Value;

use super::dto::{HealthResponse, RangeLabelResponse, RangeQuery, ScatterQuery, SiteQuery};
use super::error::AppError;
use super::page;
use super::state::ServerState;
use crate::callbacks;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::layout::{Layout, RANGE_LABEL_ID};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Page + metadata
// =============================================================================

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// GET /health
pub async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: state.dataset.len(),
        sites: state.dataset.sites.len(),
    })
}

/// GET /api/layout
///
/// Dropdown options, slider bounds/marks and their initial values.
pub async fn get_layout(State(state): State<ServerState>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

// =============================================================================
// Callbacks
// =============================================================================

/// GET /api/pie?site=
pub async fn get_pie(
    State(state): State<ServerState>,
    Query(query): Query<SiteQuery>,
) -> Json<Value> {
    let site = site_of(query.site.as_deref());
    tracing::debug!(%site, "pie chart requested");
    Json(callbacks::pie_chart(&state.dataset, &site).to_plotly())
}

/// GET /api/scatter?site=&low=&high=
pub async fn get_scatter(
    State(state): State<ServerState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<Value> {
    let site = site_of(query.site.as_deref());
    let payload = resolve_range(&state, query.low.as_deref(), query.high.as_deref())?;
    tracing::debug!(%site, low = payload.low, high = payload.high, "scatter chart requested");

    let chart = callbacks::scatter_chart(&state.dataset, &site, &payload);
    Ok(Json(chart.to_plotly(&state.colors)))
}

/// GET /api/range-label?low=&high=
pub async fn get_range_label(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<RangeLabelResponse> {
    let payload = resolve_range(&state, query.low.as_deref(), query.high.as_deref())?;
    Ok(Json(RangeLabelResponse {
        target: RANGE_LABEL_ID.to_string(),
        text: callbacks::range_label(&payload),
    }))
}

// =============================================================================
// Query helpers
// =============================================================================

fn site_of(raw: Option<&str>) -> SiteSelection {
    raw.map(SiteSelection::from_value).unwrap_or_default()
}

fn parse_bound(name: &'static str, raw: Option<&str>, fallback: f64) -> Result<f64, AppError> {
    match raw {
        None => Ok(fallback),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::InvalidBound {
                name,
                value: s.to_string(),
            }),
    }
}

fn resolve_range(
    state: &ServerState,
    low: Option<&str>,
    high: Option<&str>,
) -> Result<PayloadRange, AppError> {
    let extent = PayloadRange::extent_of(&state.dataset);
    let low = parse_bound("low", low, extent.low)?;
    let high = parse_bound("high", high, extent.high)?;
    PayloadRange::new(low, high).ok_or(AppError::ReversedRange { low, high })
}
