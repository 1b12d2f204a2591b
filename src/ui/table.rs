use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use agro_panda::state::DashboardView;

use super::{format_amount, format_date};

const ROW_HEIGHT: f32 = 18.0;

/// Historical rows for the selection, newest first.
pub fn history_table(ui: &mut Ui, view: &DashboardView) {
    ui.label(RichText::new("Historical data").strong());
    if view.is_empty() {
        return;
    }

    let rows = &view.history;
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(300.0)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["Date", "Price, RUB/t", "Volume, t", "Source"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = &rows[rows.len() - 1 - row.index()];
                row.col(|ui| {
                    ui.label(format_date(rec.date));
                });
                row.col(|ui| {
                    ui.label(format_amount(rec.price, 2));
                });
                row.col(|ui| {
                    ui.label(format_amount(rec.volume as f64, 0));
                });
                row.col(|ui| {
                    ui.label(&rec.data_source);
                });
            });
        });
}
