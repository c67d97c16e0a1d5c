use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Records behind the current scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(300.0)
        .column(Column::auto())
        .column(Column::auto().at_least(110.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Flight", "Launch Site", "Payload (kg)", "Outcome", "Booster"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = &state.dataset.records[rows[row.index()]];
                row.col(|ui| {
                    ui.label(
                        rec.flight_number
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    );
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(rec.outcome.to_string());
                });
                row.col(|ui| {
                    let booster = match &rec.booster_version {
                        Some(version) => format!("{} ({version})", rec.booster_version_category),
                        None => rec.booster_version_category.clone(),
                    };
                    ui.label(
                        RichText::new(booster)
                            .color(state.color_map.color_for(&rec.booster_version_category)),
                    );
                });
            });
        });
}
