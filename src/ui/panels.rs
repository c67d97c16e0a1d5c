use eframe::egui::{self, Color32, Response, RichText, Slider, SliderClamping, Ui};

use crate::data::filter::SiteSelection;
use crate::layout::{SiteOption, TITLE_COLOR, TITLE_FONT_SIZE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown, payload slider and its label.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Launch Site");
    site_dropdown(ui, state);
    ui.add_space(12.0);

    ui.strong(state.layout.slider_caption);
    payload_slider(ui, state);
    ui.add_space(4.0);
    ui.label(&state.range_label);
}

/// Searchable site selector.  The popup always lists "All Sites", followed by
/// every site whose label contains the search text.
fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let options = state.layout.dropdown.options.clone();
    let current = state.selection.site.value().to_string();
    let selected_text = options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| current.clone());

    egui::ComboBox::from_id_salt(state.layout.dropdown.id)
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text(state.layout.dropdown.placeholder),
            );
            ui.separator();

            for option in matching_options(&options, &state.site_search) {
                if ui
                    .selectable_label(current == option.value, &option.label)
                    .clicked()
                {
                    state.select_site(SiteSelection::from_value(&option.value));
                }
            }
        });
}

/// Case-insensitive label match; an empty query keeps every option.  The
/// first option ("All Sites") is never filtered out.
pub fn matching_options<'a>(options: &'a [SiteOption], query: &str) -> Vec<&'a SiteOption> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(i, o)| *i == 0 || query.is_empty() || o.label.to_lowercase().contains(&query))
        .map(|(_, o)| o)
        .collect()
}

/// Two handles over the same track; each is kept on its side of the other.
///
/// The selection starts at the payload extent, which need not sit on a step,
/// so the sliders never clamp and only user edits are written back.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let spec = state.layout.slider.clone();
    let mut low = state.selection.payload.low;
    let mut high = state.selection.payload.high;

    let response = ui.add(
        Slider::new(&mut low, spec.min..=spec.max)
            .step_by(spec.step)
            .clamping(SliderClamping::Never)
            .text("min"),
    );
    if edited_by_user(&response) {
        state.set_payload_low(low);
    }
    let response = ui.add(
        Slider::new(&mut high, spec.min..=spec.max)
            .step_by(spec.step)
            .clamping(SliderClamping::Never)
            .text("max"),
    );
    if edited_by_user(&response) {
        state.set_payload_high(high);
    }

    ui.horizontal(|ui: &mut Ui| {
        let marks = spec.marks.iter().map(|m| m.label.as_str()).collect::<Vec<_>>();
        ui.small(marks.join("  ·  "));
    });
}

/// Changed by a drag, a click on the track, or keyboard/text input.
fn edited_by_user(response: &Response) -> bool {
    response.changed()
        && (response.dragged()
            || response.drag_stopped()
            || response.clicked()
            || response.has_focus())
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

pub fn title(ui: &mut Ui, state: &AppState) {
    let [r, g, b] = TITLE_COLOR;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(state.layout.title)
                .size(TITLE_FONT_SIZE)
                .color(Color32::from_rgb(r, g, b)),
        );
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launch records loaded, {} in scatter",
            state.dataset.len(),
            state.scatter.row_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
