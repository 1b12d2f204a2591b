use std::collections::BTreeSet;

use super::error::DataError;
use super::model::{Dataset, ObservationRecord};

// ---------------------------------------------------------------------------
// Selection lists
// ---------------------------------------------------------------------------

/// Distinct companies with at least one record for `product`.
///
/// Empty when no company trades the product (or the product is unknown).
pub fn companies_for_product(dataset: &Dataset, product: &str) -> BTreeSet<String> {
    dataset
        .records
        .iter()
        .filter(|r| r.product == product)
        .map(|r| r.company_name.clone())
        .collect()
}

/// Confirm `company` is a valid choice for `product`.
pub fn check_selection(dataset: &Dataset, product: &str, company: &str) -> Result<(), DataError> {
    let trades = dataset
        .records
        .iter()
        .any(|r| r.product == product && r.company_name == company);
    if trades {
        Ok(())
    } else {
        Err(DataError::InvalidSelection {
            product: product.to_string(),
            company: company.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Record filters
// ---------------------------------------------------------------------------

/// Stable sort by date, so same-date records keep generation order.
fn sorted_by_date(mut records: Vec<&ObservationRecord>) -> Vec<&ObservationRecord> {
    records.sort_by_key(|r| r.date);
    records
}

/// Records for one (product, company) pair, ascending by date.
///
/// An empty `Vec` means "no data", not a failure. Same-date records are all
/// kept.
pub fn filter_single<'a>(
    dataset: &'a Dataset,
    product: &str,
    company: &str,
) -> Vec<&'a ObservationRecord> {
    sorted_by_date(
        dataset
            .records
            .iter()
            .filter(|r| r.product == product && r.company_name == company)
            .collect(),
    )
}

/// Records for `product` from any company in `companies`, ascending by date.
pub fn filter_multi<'a>(
    dataset: &'a Dataset,
    product: &str,
    companies: &BTreeSet<String>,
) -> Vec<&'a ObservationRecord> {
    sorted_by_date(
        dataset
            .records
            .iter()
            .filter(|r| r.product == product && companies.contains(&r.company_name))
            .collect(),
    )
}
