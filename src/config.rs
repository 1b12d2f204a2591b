use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const ENV_RECORDS: &str = "AGRO_PANDA_RECORDS";
pub const ENV_SEED: &str = "AGRO_PANDA_SEED";
pub const ENV_START_DATE: &str = "AGRO_PANDA_START_DATE";

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

/// Knobs for the synthetic dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub record_count: usize,
    /// Noise seed; `None` gives fresh prices on every process start.
    pub seed: Option<u64>,
    /// First day of the one-year window.
    pub start_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 500,
            seed: None,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `AGRO_PANDA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RECORDS) {
            config.record_count = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_RECORDS}={raw:?} is not a record count"))?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SEED}={raw:?} is not a u64 seed"))?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_START_DATE) {
            config.start_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("{ENV_START_DATE}={raw:?} is not a YYYY-MM-DD date"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = GeneratorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.record_count, 500);
        assert_eq!(config.seed, None);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (ENV_RECORDS, "120"),
            (ENV_SEED, " 99 "),
            (ENV_START_DATE, "2024-03-01"),
        ]))
        .unwrap();
        assert_eq!(config.record_count, 120);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn malformed_value_names_the_variable() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[(ENV_SEED, "abc")])).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_SEED));

        let err =
            GeneratorConfig::from_lookup(lookup_from(&[(ENV_START_DATE, "01.01.2023")])).unwrap_err();
        assert!(format!("{err:#}").contains(ENV_START_DATE));
    }
}
