use chrono::NaiveDate;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – failures of the generator and the query layer
// ---------------------------------------------------------------------------

/// Errors raised by the data layer.
///
/// An empty query result is *not* an error: filters return an empty `Vec`
/// and [`summarize`](super::summary::summarize) returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A product in the reference tables has no base price.
    #[error("no base price configured for product `{product}`")]
    MissingBasePrice { product: String },

    /// A reference list the generator cycles through is empty.
    #[error("reference list `{list}` is empty")]
    EmptyReferenceList { list: &'static str },

    /// The one-year window starting here runs past the last representable date.
    #[error("start date {start} leaves no room for a one-year window")]
    StartDateOutOfRange { start: NaiveDate },

    /// The price noise distribution cannot be built.
    #[error("invalid price noise distribution: {reason}")]
    InvalidNoise { reason: String },

    /// The company never trades the selected product.
    #[error("company `{company}` has no records for product `{product}`")]
    InvalidSelection { product: String, company: String },
}

impl DataError {
    /// Whether this error comes from the reference configuration (fatal at startup).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DataError::MissingBasePrice { .. }
                | DataError::EmptyReferenceList { .. }
                | DataError::StartDateOutOfRange { .. }
                | DataError::InvalidNoise { .. }
        )
    }
}
