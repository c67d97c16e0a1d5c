//! Request and response bodies for the HTTP API.
//!
//! Charts and the layout are sent as-is (`serde_json::Value` figures and
//! [`crate::layout::Layout`]); only the query strings and small envelopes
//! live here.

use serde::{Deserialize, Serialize};

/// `?site=` for the pie chart.  Absent means `ALL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteQuery {
    #[serde(default)]
    pub site: Option<String>,
}

/// `?site=&low=&high=` for the scatter chart.  Absent bounds fall back to the
/// dataset's payload extent.  Bounds stay strings so a bad number becomes a
/// JSON error instead of a plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
}

/// `?low=&high=` for the range label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub sites: usize,
}

/// Text bound to the element under the slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeLabelResponse {
    pub target: String,
    pub text: String,
}
