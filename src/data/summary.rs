use super::model::ObservationRecord;

/// Descriptive price statistics for a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub mean_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub count: usize,
    /// The record with the latest date (the last one among same-date ties).
    pub latest: ObservationRecord,
}

/// Summarize `records`, or `None` when there is nothing to summarize.
pub fn summarize<'a, I>(records: I) -> Option<PriceSummary>
where
    I: IntoIterator<Item = &'a ObservationRecord>,
{
    let mut iter = records.into_iter();
    let first = iter.next()?;

    let mut latest = first;
    let mut sum = first.price;
    let mut min_price = first.price;
    let mut max_price = first.price;
    let mut count = 1usize;

    for rec in iter {
        sum += rec.price;
        min_price = min_price.min(rec.price);
        max_price = max_price.max(rec.price);
        count += 1;
        if rec.date >= latest.date {
            latest = rec;
        }
    }

    Some(PriceSummary {
        mean_price: sum / count as f64,
        min_price,
        max_price,
        count,
        latest: latest.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn summarizes_three_records() {
        let recs = vec![
            record("RusAgro", "Wheat", "2023-01-01", 100.0),
            record("RusAgro", "Wheat", "2023-03-01", 300.0),
            record("RusAgro", "Wheat", "2023-02-01", 200.0),
        ];
        let s = summarize(&recs).unwrap();
        assert_eq!(s.mean_price, 200.0);
        assert_eq!(s.min_price, 100.0);
        assert_eq!(s.max_price, 300.0);
        assert_eq!(s.count, 3);
        assert_eq!(s.latest, recs[1]);
    }

    #[test]
    fn empty_input_is_no_data() {
        let recs: Vec<ObservationRecord> = Vec::new();
        assert_eq!(summarize(&recs), None);
    }

    #[test]
    fn latest_tie_goes_to_last_record() {
        let recs = vec![
            record("RusAgro", "Wheat", "2023-05-01", 10.0),
            record("RusAgro", "Wheat", "2023-05-01", 20.0),
            record("RusAgro", "Wheat", "2023-01-01", 30.0),
        ];
        let s = summarize(&recs).unwrap();
        assert_eq!(s.latest.price, 20.0);
    }

    #[test]
    fn accepts_borrowed_filter_output() {
        let recs = vec![
            record("RusAgro", "Wheat", "2023-01-01", -5.0),
            record("RusAgro", "Wheat", "2023-01-02", 5.0),
        ];
        let refs: Vec<&ObservationRecord> = recs.iter().collect();
        let s = summarize(refs.iter().copied()).unwrap();
        assert_eq!(s.mean_price, 0.0);
        assert_eq!(s.min_price, -5.0);
    }
}
