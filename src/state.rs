use std::collections::BTreeSet;

use crate::data::filter::{check_selection, companies_for_product, filter_multi, filter_single};
use crate::data::model::{Dataset, ObservationRecord};
use crate::data::summary::{summarize, PriceSummary};

// ---------------------------------------------------------------------------
// Selection – what the user picked
// ---------------------------------------------------------------------------

/// The user's current picks. Recomputed views never mutate the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub product: String,
    pub company: String,
    /// Companies drawn in the comparison chart.
    pub compare: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// DashboardView – everything one frame renders
// ---------------------------------------------------------------------------

/// View-model computed from the dataset and a [`Selection`].
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// The selection after narrowing to valid values.
    pub selection: Selection,
    /// Sorted products available in the dataset.
    pub product_options: Vec<String>,
    /// Sorted companies that trade the selected product.
    pub company_options: Vec<String>,
    /// Records for (product, company), ascending by date.
    pub history: Vec<ObservationRecord>,
    /// `None` when `history` is empty.
    pub summary: Option<PriceSummary>,
    /// Records for the comparison chart; empty unless two or more companies
    /// are compared.
    pub comparison: Vec<ObservationRecord>,
}

impl DashboardView {
    /// Resolve `requested` against `dataset` and compute the filtered views.
    ///
    /// Unknown products fall back to the first product. A company that does
    /// not trade the product falls back to the first one that does, and the
    /// comparison set is narrowed the same way (defaulting to the selected
    /// company).
    pub fn build(dataset: &Dataset, requested: &Selection) -> Self {
        let product_options: Vec<String> = dataset.products.iter().cloned().collect();

        let product = if dataset.products.contains(&requested.product) {
            requested.product.clone()
        } else {
            product_options.first().cloned().unwrap_or_default()
        };

        let valid_companies = companies_for_product(dataset, &product);
        let company_options: Vec<String> = valid_companies.iter().cloned().collect();

        let company = match check_selection(dataset, &product, &requested.company) {
            Ok(()) => requested.company.clone(),
            Err(e) => {
                if !requested.company.is_empty() {
                    log::warn!("{e}; re-narrowing selection");
                }
                company_options.first().cloned().unwrap_or_default()
            }
        };

        let mut compare: BTreeSet<String> = requested
            .compare
            .intersection(&valid_companies)
            .cloned()
            .collect();
        if compare.is_empty() && !company.is_empty() {
            compare.insert(company.clone());
        }

        let history: Vec<ObservationRecord> = filter_single(dataset, &product, &company)
            .into_iter()
            .cloned()
            .collect();
        let summary = summarize(&history);

        let comparison: Vec<ObservationRecord> = if compare.len() > 1 {
            filter_multi(dataset, &product, &compare)
                .into_iter()
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        log::debug!(
            "view for {product}/{company}: {} history rows, {} comparison rows",
            history.len(),
            comparison.len()
        );

        DashboardView {
            selection: Selection {
                product,
                company,
                compare,
            },
            product_options,
            company_options,
            history,
            summary,
            comparison,
        }
    }

    /// Whether the (product, company) pair has no records.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One-line message for the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view; `selection` inside it is what the widgets edit.
    pub view: DashboardView,

    /// Total records in the dataset.
    pub dataset_len: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Initial state with the default (first valid) selection.
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            view: DashboardView::build(dataset, &Selection::default()),
            dataset_len: dataset.len(),
            status_message: None,
        }
    }

    /// Recompute the view for a new selection.
    pub fn select(&mut self, dataset: &Dataset, selection: Selection) {
        self.view = DashboardView::build(dataset, &selection);
    }

    /// Switch product, keeping the company if it still trades it.
    pub fn select_product(&mut self, dataset: &Dataset, product: &str) {
        let mut next = self.view.selection.clone();
        next.product = product.to_string();
        self.select(dataset, next);
    }

    /// Switch company; the comparison set restarts from this company.
    pub fn select_company(&mut self, dataset: &Dataset, company: &str) {
        let mut next = self.view.selection.clone();
        next.company = company.to_string();
        next.compare = BTreeSet::from([company.to_string()]);
        self.select(dataset, next);
    }

    /// Add or remove a company from the comparison chart.
    pub fn toggle_compare(&mut self, dataset: &Dataset, company: &str) {
        let mut next = self.view.selection.clone();
        if !next.compare.remove(company) {
            next.compare.insert(company.to_string());
        }
        self.select(dataset, next);
    }
}
