//! Backend-neutral chart specifications.
//!
//! The callbacks produce these; the egui front-end draws them with
//! `egui_plot`, and the HTTP front-end ships them to the browser as Plotly
//! figure JSON.

use serde::Serialize;
use serde_json::{Value, json};

use crate::color::ColorMap;

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// A proportion chart.  An empty `slices` list renders as an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole covered by each slice, in slice order.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices
            .iter()
            .map(|s| s.value as f64 / total as f64)
            .collect()
    }

    pub fn to_plotly(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<usize> = self.slices.iter().map(|s| s.value).collect();
        json!({
            "data": [{
                "type": "pie",
                "labels": labels,
                "values": values,
            }],
            "layout": {
                "title": { "text": self.title },
            },
        })
    }
}

/// A single marker: payload mass against outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
}

/// All markers sharing one colour (one booster version category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Series in first-appearance order of their category.
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Number of plotted records across all series.
    pub fn row_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn to_plotly(&self, colors: &ColorMap) -> Value {
        let traces: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                let x: Vec<f64> = s.points.iter().map(|p| p.payload_mass_kg).collect();
                let y: Vec<u8> = s.points.iter().map(|p| p.class).collect();
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": s.name,
                    "x": x,
                    "y": y,
                    "marker": { "color": colors.hex_for(&s.name) },
                })
            })
            .collect();

        json!({
            "data": traces,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_label } },
                "yaxis": { "title": { "text": self.y_label } },
                "legend": { "title": { "text": self.color_label } },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie() -> PieChart {
        PieChart {
            title: "Total Successful Launches by Site".into(),
            slices: vec![
                PieSlice { label: "A".into(), value: 3 },
                PieSlice { label: "B".into(), value: 1 },
            ],
        }
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let fractions = pie().fractions();
        assert_eq!(fractions, vec![0.75, 0.25]);
    }

    #[test]
    fn empty_pie_has_no_fractions_to_divide() {
        let empty = PieChart { title: "x".into(), slices: vec![] };
        assert_eq!(empty.total(), 0);
        assert!(empty.fractions().is_empty());
    }

    #[test]
    fn pie_plotly_figure_carries_labels_and_values() {
        let fig = pie().to_plotly();
        assert_eq!(fig["data"][0]["type"], "pie");
        assert_eq!(fig["data"][0]["labels"], json!(["A", "B"]));
        assert_eq!(fig["data"][0]["values"], json!([3, 1]));
        assert_eq!(fig["layout"]["title"]["text"], "Total Successful Launches by Site");
    }

    #[test]
    fn scatter_plotly_figure_has_one_trace_per_series() {
        let chart = ScatterChart {
            title: String::new(),
            x_label: "Payload Mass (kg)".into(),
            y_label: "class".into(),
            color_label: "Booster Version Category".into(),
            series: vec![
                ScatterSeries {
                    name: "FT".into(),
                    points: vec![
                        ScatterPoint { payload_mass_kg: 1500.0, class: 0 },
                        ScatterPoint { payload_mass_kg: 3000.0, class: 1 },
                    ],
                },
                ScatterSeries {
                    name: "B4".into(),
                    points: vec![ScatterPoint { payload_mass_kg: 500.0, class: 1 }],
                },
            ],
        };
        assert_eq!(chart.row_count(), 3);

        let names = vec!["FT".to_string(), "B4".to_string()];
        let colors = ColorMap::new(&names);
        let fig = chart.to_plotly(&colors);
        let traces = fig["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["x"], json!([1500.0, 3000.0]));
        assert_eq!(traces[0]["y"], json!([0, 1]));
        assert_eq!(traces[1]["marker"]["color"], json!(colors.hex_for("B4")));
        assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    }
}
