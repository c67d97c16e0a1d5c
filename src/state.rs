use crate::callbacks;
use crate::chart::{PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::{FilterSelection, PayloadRange, SiteSelection, filtered_indices};
use crate::data::model::LaunchDataset;
use crate::layout::Layout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Outputs are recomputed only when one of their inputs changes:
/// the site feeds the pie and the scatter, the payload range feeds the
/// range label and the scatter.
pub struct AppState {
    pub dataset: LaunchDataset,
    pub layout: Layout,

    /// Current dropdown and slider values.
    pub selection: FilterSelection,

    pub pie: PieChart,
    pub scatter: ScatterChart,
    pub range_label: String,

    /// Indices of records behind the current scatter (for the records table).
    pub visible_indices: Vec<usize>,

    /// Booster category colours shared by the scatter and the table.
    pub color_map: ColorMap,

    /// Text typed into the dropdown's search box.
    pub site_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let selection = FilterSelection::initial(&dataset);
        let layout = Layout::for_dataset(&dataset);
        let color_map = ColorMap::new(&dataset.booster_categories);

        let pie = callbacks::pie_chart(&dataset, &selection.site);
        let scatter = callbacks::scatter_chart(&dataset, &selection.site, &selection.payload);
        let range_label = callbacks::range_label(&selection.payload);
        let visible_indices = filtered_indices(&dataset, &selection);

        Self {
            dataset,
            layout,
            selection,
            pie,
            scatter,
            range_label,
            visible_indices,
            color_map,
            site_search: String::new(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, reset the controls and every output.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        *self = Self::new(dataset);
    }

    /// Dropdown changed.
    pub fn select_site(&mut self, site: SiteSelection) {
        if site == self.selection.site {
            return;
        }
        log::debug!("site selection changed to {site}");
        self.selection.site = site;
        self.pie = callbacks::pie_chart(&self.dataset, &self.selection.site);
        self.refresh_scatter();
    }

    /// Slider changed.  Reversed ranges are ignored; the slider widgets never
    /// produce them.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let Some(payload) = PayloadRange::new(low, high) else {
            return;
        };
        if payload == self.selection.payload {
            return;
        }
        log::debug!("payload range changed to [{low}, {high}]");
        self.selection.payload = payload;
        self.range_label = callbacks::range_label(&self.selection.payload);
        self.refresh_scatter();
    }

    /// Move the lower handle without letting it pass the upper one.
    pub fn set_payload_low(&mut self, low: f64) {
        let high = self.selection.payload.high;
        self.set_payload_range(low.min(high), high);
    }

    /// Move the upper handle without letting it pass the lower one.
    pub fn set_payload_high(&mut self, high: f64) {
        let low = self.selection.payload.low;
        self.set_payload_range(low, high.max(low));
    }

    fn refresh_scatter(&mut self) {
        self.scatter = callbacks::scatter_chart(
            &self.dataset,
            &self.selection.site,
            &self.selection.payload,
        );
        self.visible_indices = filtered_indices(&self.dataset, &self.selection);
    }
}
