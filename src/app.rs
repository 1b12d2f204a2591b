use eframe::egui;

use agro_panda::data::{DataError, DatasetCache};
use agro_panda::state::AppState;

use crate::color::ColorMap;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AgroPandaApp {
    cache: DatasetCache,
    pub state: AppState,
    /// One colour per company, stable across selections.
    colors: ColorMap,
}

impl AgroPandaApp {
    pub fn new(cache: DatasetCache) -> Result<Self, DataError> {
        let dataset = cache.dataset()?;
        let state = AppState::new(dataset);
        let colors = ColorMap::new(&dataset.companies);
        Ok(Self {
            cache,
            state,
            colors,
        })
    }
}

impl eframe::App for AgroPandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dataset = match self.cache.dataset() {
            Ok(ds) => ds,
            Err(e) => {
                // Unreachable after a successful `new`, the dataset is cached.
                log::error!("dataset unavailable: {e}");
                return;
            }
        };

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, dataset, &self.colors);
            });

        // ---- Right side panel: latest values and statistics ----
        egui::SidePanel::right("details_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::details_panel(ui, &self.state.view);
            });

        // ---- Central panel: charts and history ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let view = &self.state.view;
                    ui.heading(format!(
                        "Analysis: {} – {}",
                        view.selection.product, view.selection.company
                    ));
                    plot::history_plots(ui, view);
                    plot::comparison_plot(ui, view, &self.colors);
                    ui.separator();
                    table::history_table(ui, view);
                });
        });
    }
}
