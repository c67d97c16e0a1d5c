//! The dashboard's reactive handlers.
//!
//! Each one is a pure function of the loaded table and the current control
//! values. The front-ends decide when to call them (see [`crate::state`]).

use crate::chart::{PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
use crate::data::filter::{FilterSelection, PayloadRange, SiteSelection, filtered_indices, site_indices};
use crate::data::loader::{COL_BOOSTER_CATEGORY, COL_CLASS, COL_PAYLOAD_MASS};
use crate::data::model::{LaunchDataset, Outcome};

/// Success proportions for the site dropdown's value.
///
/// * `ALL` – one slice per site with at least one success, valued by its
///   success count, in dataset site order.
/// * a concrete site – success and failure counts within that site (payload
///   range ignored), largest first, zero counts omitted.
/// * an unknown site – no slices.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: dataset
                        .records
                        .iter()
                        .filter(|r| r.launch_site == *name && r.outcome.is_success())
                        .count(),
                })
                .filter(|slice| slice.value > 0)
                .collect();

            PieChart {
                title: "Total Successful Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let indices = site_indices(dataset, site);
            let successes = indices
                .iter()
                .filter(|&&i| dataset.records[i].outcome.is_success())
                .count();
            let failures = indices.len() - successes;

            let mut counts = [(Outcome::Success, successes), (Outcome::Failure, failures)];
            // Stable: ties keep Success first.
            counts.sort_by(|a, b| b.1.cmp(&a.1));

            let slices = counts
                .into_iter()
                .filter(|(_, n)| *n > 0)
                .map(|(outcome, n)| PieSlice {
                    label: outcome.to_string(),
                    value: n,
                })
                .collect();

            PieChart {
                title: format!("Total Successful Launches for Site {name}"),
                slices,
            }
        }
    }
}

/// Text shown under the payload slider: the lower bound, truncated to an integer.
pub fn range_label(payload: &PayloadRange) -> String {
    format!("You have selected \"{}\"", payload.low.trunc() as i64)
}

/// Payload mass against outcome for records inside the (inclusive) payload
/// range, narrowed to one site unless `ALL` is selected.  One series per
/// booster version category, in first-appearance order.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    payload: &PayloadRange,
) -> ScatterChart {
    let selection = FilterSelection {
        site: site.clone(),
        payload: *payload,
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for idx in filtered_indices(dataset, &selection) {
        let rec = &dataset.records[idx];
        let point = ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.outcome.class(),
        };
        match series
            .iter_mut()
            .find(|s| s.name == rec.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: rec.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => "Payload vs. Launch Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Launch Outcome for Site {name}"),
    };

    ScatterChart {
        title,
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: COL_CLASS.to_string(),
        color_label: COL_BOOSTER_CATEGORY.to_string(),
        series,
    }
}
