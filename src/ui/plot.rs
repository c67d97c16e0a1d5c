use std::f64::consts::TAU;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{PieChart, ScatterChart};
use crate::color::{ColorMap, generate_palette};
use crate::layout::{PIE_CHART_ID, SCATTER_CHART_ID};

/// Segments per full turn when approximating a wedge's arc.
const ARC_SEGMENTS: f64 = 120.0;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Wedge outline from `start` to `end` (fractions of a turn, clockwise from
/// twelve o'clock) on the unit circle, closed through the centre.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) * ARC_SEGMENTS).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let t = start + (end - start) * i as f64 / steps as f64;
        let angle = TAU * t;
        points.push([angle.sin(), angle.cos()]);
    }
    points
}

pub fn pie_plot(ui: &mut Ui, pie: &PieChart, height: f32) {
    ui.heading(&pie.title);

    if pie.slices.is_empty() {
        ui.label("No launches match this selection.");
        return;
    }

    let colors = generate_palette(pie.slices.len());
    let fractions = pie.fractions();

    Plot::new(PIE_CHART_ID)
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for ((slice, fraction), color) in pie.slices.iter().zip(&fractions).zip(&colors) {
                let end = start + fraction;
                let wedge = Polygon::new(PlotPoints::from(wedge_points(start, end)))
                    .name(&slice.label)
                    .fill_color(*color)
                    .stroke(Stroke::new(1.0, *color));
                plot_ui.polygon(wedge);

                // Percentage label at the wedge's mid-angle.
                let mid = TAU * (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.sin(), 0.65 * mid.cos()),
                    format!("{:.1}%", fraction * 100.0),
                ));
                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

pub fn scatter_plot(ui: &mut Ui, scatter: &ScatterChart, color_map: &ColorMap, height: f32) {
    ui.heading(&scatter.title);

    Plot::new(SCATTER_CHART_ID)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(&scatter.x_label)
        .y_axis_label(&scatter.y_label)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.payload_mass_kg, f64::from(p.class)])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(color_map.color_for(&series.name))
                        .radius(4.0),
                );
            }
        });
}
