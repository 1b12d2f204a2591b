use std::collections::BTreeSet;

use once_cell::unsync::OnceCell;

use super::error::DataError;
use super::filter::{filter_multi, filter_single};
use super::generator::{generate, GaussianNoise, ReferenceTables};
use super::model::{Dataset, ObservationRecord};
use crate::config::GeneratorConfig;

/// Which companies a query covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanySelection {
    Single(String),
    Many(BTreeSet<String>),
}

// ---------------------------------------------------------------------------
// DatasetCache – owns the write-once dataset
// ---------------------------------------------------------------------------

/// Generates the dataset on first access and hands out borrows afterwards.
///
/// Construct one per process and pass it to whoever needs the data. The
/// dataset is never regenerated, so prices stay stable across interactions
/// even without a seed.
pub struct DatasetCache {
    config: GeneratorConfig,
    tables: ReferenceTables,
    dataset: OnceCell<Dataset>,
}

impl DatasetCache {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_tables(config, ReferenceTables::default())
    }

    pub fn with_tables(config: GeneratorConfig, tables: ReferenceTables) -> Self {
        Self {
            config,
            tables,
            dataset: OnceCell::new(),
        }
    }

    /// The configuration the dataset is (or will be) generated from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The dataset, generating it on the first call.
    ///
    /// A failed generation is not cached; the same configuration error is
    /// returned again on the next call.
    pub fn dataset(&self) -> Result<&Dataset, DataError> {
        self.dataset.get_or_try_init(|| {
            let mut noise = GaussianNoise::new(self.config.seed)?;
            let records = generate(
                self.config.record_count,
                &self.tables,
                self.config.start_date,
                &mut noise,
            )?;
            log::info!(
                "Generated {} synthetic records (seed: {})",
                records.len(),
                self.config
                    .seed
                    .map_or_else(|| "entropy".to_string(), |s| s.to_string())
            );
            Ok(Dataset::from_records(records))
        })
    }

    /// Records for `product` and the selected companies, ascending by date.
    pub fn query(
        &self,
        product: &str,
        companies: &CompanySelection,
    ) -> Result<Vec<&ObservationRecord>, DataError> {
        let dataset = self.dataset()?;
        Ok(match companies {
            CompanySelection::Single(company) => filter_single(dataset, product, company),
            CompanySelection::Many(set) => filter_multi(dataset, product, set),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::summary::summarize;

    fn seeded(count: usize) -> DatasetCache {
        DatasetCache::new(GeneratorConfig {
            record_count: count,
            seed: Some(11),
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn dataset_is_generated_once() {
        let cache = DatasetCache::new(GeneratorConfig::default());
        let first = cache.dataset().unwrap() as *const Dataset;
        let second = cache.dataset().unwrap() as *const Dataset;
        assert_eq!(first, second);
        assert_eq!(cache.dataset().unwrap().len(), 500);
    }

    #[test]
    fn unseeded_cache_returns_stable_prices() {
        let cache = DatasetCache::new(GeneratorConfig::default());
        let a: Vec<f64> = cache.dataset().unwrap().records.iter().map(|r| r.price).collect();
        let b: Vec<f64> = cache.dataset().unwrap().records.iter().map(|r| r.price).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn query_single_and_many() {
        let cache = seeded(500);
        let single = cache
            .query("Wheat", &CompanySelection::Single("RusAgro".into()))
            .unwrap();
        assert_eq!(single.len(), 100);

        let many = CompanySelection::Many(
            ["RusAgro", "Miratorg"].iter().map(|s| s.to_string()).collect(),
        );
        // Wheat only ever pairs with RusAgro under the shared modulus.
        assert_eq!(cache.query("Wheat", &many).unwrap().len(), 100);

        let none = cache
            .query("Wheat", &CompanySelection::Single("Miratorg".into()))
            .unwrap();
        assert!(none.is_empty());
        assert!(summarize(none).is_none());
    }

    #[test]
    fn keeps_the_configuration_it_was_built_with() {
        let cache = seeded(42);
        assert_eq!(cache.config().seed, Some(11));
        assert_eq!(cache.config().record_count, 42);
        assert_eq!(cache.dataset().unwrap().len(), 42);
    }

    #[test]
    fn late_start_date_fails_instead_of_panicking() {
        let late = (chrono::NaiveDate::MAX - chrono::Days::new(10))
            .format("%Y-%m-%d")
            .to_string();
        let config = GeneratorConfig::from_lookup(|key| {
            (key == crate::config::ENV_START_DATE).then(|| late.clone())
        })
        .unwrap();
        assert_eq!(config.start_date, chrono::NaiveDate::MAX - chrono::Days::new(10));
        let cache = DatasetCache::new(config);

        let err = cache.dataset().unwrap_err();
        assert!(matches!(err, DataError::StartDateOutOfRange { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn configuration_error_surfaces_on_every_access() {
        let mut tables = ReferenceTables::default();
        tables.base_prices.remove("Wheat");
        let cache = DatasetCache::with_tables(GeneratorConfig::default(), tables);

        assert!(cache.dataset().unwrap_err().is_configuration());
        assert!(cache
            .query("Wheat", &CompanySelection::Single("RusAgro".into()))
            .is_err());
    }
}
