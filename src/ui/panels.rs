use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use agro_panda::data::export::write_records;
use agro_panda::data::model::Dataset;
use agro_panda::state::{AppState, DashboardView, StatusMessage};

use super::{format_amount, format_date};
use crate::color::ColorMap;

/// Widget interaction collected while the option lists are borrowed.
enum Action {
    Product(String),
    Company(String),
    ToggleCompare(String),
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, dataset: &Dataset, colors: &ColorMap) {
    ui.heading("Filters");
    ui.separator();

    if dataset.is_empty() {
        ui.label("No records generated.");
        return;
    }

    let view = &state.view;
    let mut action = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Product ----
            ui.strong("Product");
            egui::ComboBox::from_id_salt("product")
                .selected_text(&view.selection.product)
                .show_ui(ui, |ui: &mut Ui| {
                    for product in &view.product_options {
                        if ui
                            .selectable_label(view.selection.product == *product, product)
                            .clicked()
                        {
                            action = Some(Action::Product(product.clone()));
                        }
                    }
                });
            ui.add_space(4.0);

            // ---- Company (only those trading the product) ----
            ui.strong("Company");
            egui::ComboBox::from_id_salt("company")
                .selected_text(&view.selection.company)
                .show_ui(ui, |ui: &mut Ui| {
                    for company in &view.company_options {
                        if ui
                            .selectable_label(view.selection.company == *company, company)
                            .clicked()
                        {
                            action = Some(Action::Company(company.clone()));
                        }
                    }
                });
            ui.separator();

            // ---- Comparison set ----
            let n_selected = view.selection.compare.len();
            let n_total = view.company_options.len();
            ui.strong(format!("Compare companies  ({n_selected}/{n_total})"));
            for company in &view.company_options {
                let mut checked = view.selection.compare.contains(company);
                let text = RichText::new(company).color(colors.color_for(company));
                if ui.checkbox(&mut checked, text).changed() {
                    action = Some(Action::ToggleCompare(company.clone()));
                }
            }
            if n_total < 2 {
                ui.label(RichText::new("Only one company trades this product.").weak());
            }

            ui.separator();
            ui.label(
                RichText::new(
                    "1. Pick a product\n2. Pick a company\n3. Read the charts\n4. Compare companies",
                )
                .weak(),
            );
        });

    match action {
        Some(Action::Product(p)) => state.select_product(dataset, &p),
        Some(Action::Company(c)) => state.select_company(dataset, &c),
        Some(Action::ToggleCompare(c)) => state.toggle_compare(dataset, &c),
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Right side panel – latest values and statistics
// ---------------------------------------------------------------------------

/// Render the details panel for the current selection.
pub fn details_panel(ui: &mut Ui, view: &DashboardView) {
    ui.heading("Details");
    ui.separator();

    let Some(summary) = &view.summary else {
        ui.label(RichText::new("No data for the selected filters.").color(Color32::YELLOW));
        return;
    };

    let latest = &summary.latest;
    ui.label("Latest price");
    ui.label(RichText::new(format!("{} RUB/t", format_amount(latest.price, 0))).size(22.0));
    ui.label(RichText::new(format_date(latest.date)).weak());
    ui.add_space(6.0);

    ui.label("Latest volume");
    ui.label(RichText::new(format!("{} t", format_amount(latest.volume as f64, 0))).size(22.0));
    ui.separator();

    ui.strong("Statistics");
    egui::Grid::new("price_stats")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("Mean price");
            ui.label(format!("{} RUB/t", format_amount(summary.mean_price, 0)));
            ui.end_row();
            ui.label("Min price");
            ui.label(format!("{} RUB/t", format_amount(summary.min_price, 0)));
            ui.end_row();
            ui.label("Max price");
            ui.label(format!("{} RUB/t", format_amount(summary.max_price, 0)));
            ui.end_row();
            ui.label("Records");
            ui.label(summary.count.to_string());
            ui.end_row();
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let has_rows = !state.view.history.is_empty();
            if ui
                .add_enabled(has_rows, egui::Button::new("Export history…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records generated, {} shown",
            state.dataset_len,
            state.view.history.len()
        ));

        ui.separator();

        match &state.status_message {
            Some(StatusMessage::Info(msg)) => {
                ui.label(msg);
            }
            Some(StatusMessage::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for a destination and write the current history rows there.
pub fn export_file_dialog(state: &mut AppState) {
    let sel = &state.view.selection;
    let file = rfd::FileDialog::new()
        .set_title("Export price history")
        .set_file_name(format!("{}_{}.csv", sel.product, sel.company))
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match write_records(&path, &state.view.history) {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    state.view.history.len(),
                    path.display()
                );
                state.status_message = Some(StatusMessage::Info(format!(
                    "Exported {} rows to {}",
                    state.view.history.len(),
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("Failed to export history: {e:#}");
                state.status_message = Some(StatusMessage::Error(format!("Error: {e:#}")));
            }
        }
    }
}
