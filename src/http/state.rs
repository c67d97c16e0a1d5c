//! Shared state for the HTTP server.

use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::model::LaunchDataset;
use crate::layout::Layout;

/// Read-only state passed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub dataset: Arc<LaunchDataset>,
    pub layout: Arc<Layout>,
    /// Booster category colours, so browser and desktop agree.
    pub colors: Arc<ColorMap>,
}

impl ServerState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let layout = Layout::for_dataset(&dataset);
        let colors = ColorMap::new(&dataset.booster_categories);
        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            colors: Arc::new(colors),
        }
    }
}
