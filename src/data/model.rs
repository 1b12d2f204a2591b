use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Provenance tag stamped on every generated record.
pub const SYNTHETIC_SOURCE: &str = "synthetic-generator";

// ---------------------------------------------------------------------------
// ActivityType – role of the company in the supply chain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Producer,
    Distributor,
}

impl ActivityType {
    pub const ALL: [ActivityType; 2] = [ActivityType::Producer, ActivityType::Distributor];
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Producer => write!(f, "producer"),
            ActivityType::Distributor => write!(f, "distributor"),
        }
    }
}

// ---------------------------------------------------------------------------
// ObservationRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single (company, product, date) price/volume observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRecord {
    pub company_name: String,
    pub product: String,
    pub activity_type: ActivityType,
    pub date: NaiveDate,
    /// RUB per metric ton. Not clamped, so it may be zero or negative.
    pub price: f64,
    /// Metric tons.
    pub volume: u32,
    pub data_source: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete generated table
// ---------------------------------------------------------------------------

/// The generated records plus pre-computed selection lists.
///
/// Built once and never mutated afterwards; queries borrow from it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in generation order.
    pub records: Vec<ObservationRecord>,
    /// Sorted unique product names.
    pub products: BTreeSet<String>,
    /// Sorted unique company names.
    pub companies: BTreeSet<String>,
}

impl Dataset {
    /// Build the selection indices from the generated records.
    pub fn from_records(records: Vec<ObservationRecord>) -> Self {
        let mut products = BTreeSet::new();
        let mut companies = BTreeSet::new();

        for rec in &records {
            products.insert(rec.product.clone());
            companies.insert(rec.company_name.clone());
        }

        Dataset {
            records,
            products,
            companies,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
