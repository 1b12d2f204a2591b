use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

use agro_panda::data::model::ObservationRecord;
use agro_panda::state::DashboardView;

use super::{format_amount, format_date};
use crate::color::ColorMap;

const PLOT_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Date axis helpers
// ---------------------------------------------------------------------------

/// Dates go on the x axis as day numbers.
fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(format_date)
        .unwrap_or_default()
}

fn date_plot<'a>(id: &str, y_label: &str) -> Plot<'a> {
    Plot::new(id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label(y_label)
        .x_axis_formatter(|mark: GridMark, _range| x_to_label(mark.value))
        .label_formatter(|name, point| {
            let head = if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n")
            };
            format!("{head}{}\n{}", x_to_label(point.x), format_amount(point.y, 2))
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
}

fn series(
    records: &[ObservationRecord],
    value: impl Fn(&ObservationRecord) -> f64,
) -> Vec<[f64; 2]> {
    records.iter().map(|r| [date_to_x(r.date), value(r)]).collect()
}

/// Line with point markers on each observation.
fn marked_line(plot_ui: &mut egui_plot::PlotUi, name: &str, pts: Vec<[f64; 2]>, color: Color32) {
    plot_ui.line(
        Line::new(PlotPoints::from(pts.clone()))
            .name(name)
            .color(color)
            .width(1.5),
    );
    plot_ui.points(Points::new(PlotPoints::from(pts)).radius(3.0).color(color));
}

// ---------------------------------------------------------------------------
// Price / volume history (central panel)
// ---------------------------------------------------------------------------

/// Price and volume charts for the selected (product, company).
pub fn history_plots(ui: &mut Ui, view: &DashboardView) {
    if view.is_empty() {
        ui.label(
            RichText::new("No data found for the selected filters.").color(Color32::YELLOW),
        );
        return;
    }

    let product = &view.selection.product;

    ui.label(RichText::new("Price dynamics").strong());
    let prices = series(&view.history, |r| r.price);
    date_plot("price_plot", "Price, RUB/t").show(ui, |plot_ui| {
        marked_line(plot_ui, &format!("{product} price"), prices, Color32::LIGHT_BLUE);
    });

    ui.add_space(8.0);
    ui.label(RichText::new("Supply volume dynamics").strong());
    let volumes = series(&view.history, |r| r.volume as f64);
    date_plot("volume_plot", "Volume, t").show(ui, |plot_ui| {
        marked_line(plot_ui, &format!("{product} volume"), volumes, Color32::LIGHT_GREEN);
    });
}

// ---------------------------------------------------------------------------
// Company comparison
// ---------------------------------------------------------------------------

/// One price series per compared company. Draws nothing for fewer than two.
pub fn comparison_plot(ui: &mut Ui, view: &DashboardView, colors: &ColorMap) {
    if view.comparison.is_empty() {
        return;
    }

    let mut by_company: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for rec in &view.comparison {
        by_company
            .entry(rec.company_name.as_str())
            .or_default()
            .push([date_to_x(rec.date), rec.price]);
    }

    ui.add_space(8.0);
    ui.label(RichText::new(format!("Price comparison: {}", view.selection.product)).strong());
    date_plot("comparison_plot", "Price, RUB/t").show(ui, |plot_ui| {
        for (company, pts) in by_company {
            marked_line(plot_ui, company, pts, colors.color_for(company));
        }
    });
}
