//! Static description of the dashboard page: heading, site dropdown, payload
//! slider and the two chart placeholders.  Both front-ends render from it.

use serde::Serialize;

use crate::data::filter::{ALL_SITES, PayloadRange};
use crate::data::model::LaunchDataset;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
/// Heading colour (`#503D36`).
pub const TITLE_COLOR: [u8; 3] = [0x50, 0x3D, 0x36];
pub const TITLE_FONT_SIZE: f32 = 40.0;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const RANGE_SLIDER_ID: &str = "range-slider";
pub const RANGE_LABEL_ID: &str = "output-container-range-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Starts at the dataset's payload extent.
    pub initial: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: &'static str,
    pub placeholder: &'static str,
    pub searchable: bool,
    pub options: Vec<SiteOption>,
    pub initial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: &'static str,
    pub dropdown: DropdownSpec,
    pub pie_chart_id: &'static str,
    pub slider_caption: &'static str,
    pub slider: RangeSliderSpec,
    pub range_label_id: &'static str,
    pub scatter_chart_id: &'static str,
}

impl Layout {
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        Layout {
            title: DASHBOARD_TITLE,
            dropdown: DropdownSpec {
                id: SITE_DROPDOWN_ID,
                placeholder: "Select a Launch Site",
                searchable: true,
                options: site_options(dataset),
                initial: ALL_SITES.to_string(),
            },
            pie_chart_id: PIE_CHART_ID,
            slider_caption: "Payload range (Kg):",
            slider: RangeSliderSpec {
                id: RANGE_SLIDER_ID,
                // The track always reaches the dataset's extremes.
                min: SLIDER_MIN.min(dataset.min_payload),
                max: SLIDER_MAX.max(dataset.max_payload),
                step: SLIDER_STEP,
                marks: slider_marks(),
                initial: PayloadRange::extent_of(dataset),
            },
            range_label_id: RANGE_LABEL_ID,
            scatter_chart_id: SCATTER_CHART_ID,
        }
    }
}

/// "All Sites" followed by every site in dataset order.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.sites.iter().map(|s| SiteOption {
        label: s.clone(),
        value: s.clone(),
    }))
    .collect()
}

fn slider_marks() -> Vec<SliderMark> {
    [
        (0.0, "0"),
        (2_500.0, "2,500"),
        (5_000.0, "5,000"),
        (7_500.0, "7,500"),
        (10_000.0, "10,000"),
    ]
    .into_iter()
    .map(|(value, label)| SliderMark {
        value,
        label: label.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn dropdown_lists_all_sites_first() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("CCAFS LC-40", 525.0, 0, "v1.0"),
        ]);
        let layout = Layout::for_dataset(&ds);
        let values: Vec<&str> = layout
            .dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
        assert_eq!(layout.dropdown.initial, "ALL");
    }

    #[test]
    fn slider_starts_at_payload_extent() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 362.0, 1, "FT"),
            record("A", 9600.0, 0, "FT"),
        ]);
        let slider = Layout::for_dataset(&ds).slider;
        assert_eq!(slider.initial, PayloadRange { low: 362.0, high: 9600.0 });
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10_000.0, 1_000.0));
        assert_eq!(slider.marks.len(), 5);
        assert_eq!(slider.marks[4].label, "10,000");
    }

    #[test]
    fn track_widens_to_cover_heavy_payloads() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "FT"),
            record("A", 15600.0, 1, "B5"),
        ]);
        let slider = Layout::for_dataset(&ds).slider;
        assert_eq!(slider.max, 15600.0);
        assert_eq!(slider.min, 0.0);
        assert!(slider.initial.low >= slider.min && slider.initial.high <= slider.max);
    }

    #[test]
    fn range_label_has_a_target_in_the_layout() {
        let layout = Layout::for_dataset(&LaunchDataset::default());
        assert_eq!(layout.range_label_id, "output-container-range-slider");
    }
}
