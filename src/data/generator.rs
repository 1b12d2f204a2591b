use std::collections::BTreeMap;
use std::f64::consts::PI;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::error::DataError;
use super::model::{ActivityType, ObservationRecord, SYNTHETIC_SOURCE};

/// Days in the generated window; dates wrap around after one year.
const YEAR_DAYS: u64 = 365;
/// Days between consecutive records before wrapping.
const STEP_DAYS: u64 = 7;
const SEASONAL_AMPLITUDE: f64 = 0.2;
const NOISE_STD_DEV: f64 = 0.1;
const COMPANY_BIAS_STEP: f64 = 0.05;

// ---------------------------------------------------------------------------
// Reference tables
// ---------------------------------------------------------------------------

/// The fixed lists the generator cycles through, plus the price model.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub companies: Vec<String>,
    pub products: Vec<String>,
    pub activity_types: Vec<ActivityType>,
    /// Base price (RUB per ton) for every product.
    pub base_prices: BTreeMap<String, f64>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        let companies = ["RusAgro", "Miratorg", "EkoNiva", "AFG National", "Prodimex"];
        let prices = [
            ("Wheat", 15000.0),
            ("Barley", 12000.0),
            ("Sunflower", 25000.0),
            ("Potato", 20000.0),
            ("Soy", 30000.0),
        ];

        Self {
            companies: companies.iter().map(|c| c.to_string()).collect(),
            products: prices.iter().map(|(p, _)| p.to_string()).collect(),
            activity_types: ActivityType::ALL.to_vec(),
            base_prices: prices.iter().map(|(p, v)| (p.to_string(), *v)).collect(),
        }
    }
}

impl ReferenceTables {
    /// Check the tables can drive the generator.
    ///
    /// Every list must be non-empty and every product needs a base price.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.companies.is_empty() {
            return Err(DataError::EmptyReferenceList { list: "companies" });
        }
        if self.products.is_empty() {
            return Err(DataError::EmptyReferenceList { list: "products" });
        }
        if self.activity_types.is_empty() {
            return Err(DataError::EmptyReferenceList { list: "activity_types" });
        }
        if let Some(missing) = self
            .products
            .iter()
            .find(|p| !self.base_prices.contains_key(*p))
        {
            return Err(DataError::MissingBasePrice {
                product: missing.clone(),
            });
        }
        Ok(())
    }

    /// Position of the first occurrence of each company, used for the price bias.
    fn company_ranks(&self) -> Vec<usize> {
        self.companies
            .iter()
            .enumerate()
            .map(|(i, name)| {
                self.companies
                    .iter()
                    .position(|c| c == name)
                    .unwrap_or(i)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Price noise
// ---------------------------------------------------------------------------

/// Source of the random term added to each price.
pub trait PriceNoise {
    fn sample(&mut self) -> f64;
}

impl<F: FnMut() -> f64> PriceNoise for F {
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Normally distributed noise, `N(0, 0.1)`. The tails are not truncated.
pub struct GaussianNoise {
    rng: StdRng,
    dist: Normal<f64>,
}

impl GaussianNoise {
    /// Seeded noise is reproducible; `None` draws a fresh seed from the OS.
    pub fn new(seed: Option<u64>) -> Result<Self, DataError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dist = Normal::new(0.0, NOISE_STD_DEV).map_err(|e| DataError::InvalidNoise {
            reason: e.to_string(),
        })?;
        Ok(Self { rng, dist })
    }
}

impl PriceNoise for GaussianNoise {
    fn sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Sinusoidal price adjustment over the year cycle.
pub fn seasonal_factor(days_passed: u64) -> f64 {
    (days_passed as f64 / YEAR_DAYS as f64 * 2.0 * PI).sin() * SEASONAL_AMPLITUDE
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate `count` synthetic records in index order.
///
/// Record `i` takes company, product and activity type from the reference
/// lists cyclically (`i mod len`) and is dated `start_date + (7 i mod 365)`
/// days. Only the price depends on `noise`; every other field is a pure
/// function of `i`.
pub fn generate(
    count: usize,
    tables: &ReferenceTables,
    start_date: NaiveDate,
    noise: &mut impl PriceNoise,
) -> Result<Vec<ObservationRecord>, DataError> {
    tables.validate()?;
    let out_of_range = || DataError::StartDateOutOfRange { start: start_date };
    start_date
        .checked_add_days(Days::new(YEAR_DAYS - 1))
        .ok_or_else(out_of_range)?;
    let ranks = tables.company_ranks();

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let company_idx = i % tables.companies.len();
        let company = &tables.companies[company_idx];
        let product = &tables.products[i % tables.products.len()];
        let activity = tables.activity_types[i % tables.activity_types.len()];

        let days_passed = (i as u64 * STEP_DAYS) % YEAR_DAYS;
        let date = start_date
            .checked_add_days(Days::new(days_passed))
            .ok_or_else(out_of_range)?;

        let base_price = tables.base_prices[product];
        let seasonal = seasonal_factor(days_passed);
        let random = noise.sample();
        let bias = ranks[company_idx] as f64 * COMPANY_BIAS_STEP;
        let price = round_cents(base_price * (1.0 + seasonal + random + bias));

        if price <= 0.0 {
            log::warn!("record {i}: non-positive price {price} for {product} ({company})");
        }

        let volume = 1000 + ((i as u64 * 50) % 2000) as u32;

        records.push(ObservationRecord {
            company_name: company.clone(),
            product: product.clone(),
            activity_type: activity,
            date,
            price,
            volume,
            data_source: SYNTHETIC_SOURCE.to_string(),
        });
    }

    Ok(records)
}
