//! Flight search request models.

use serde::{Deserialize, Serialize};

/// Query params of the `GET /search-flight` endpoint.
///
/// Nothing here is validated. Codes and dates are handed to the flight
/// provider as they are; a missing param becomes an empty string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// IATA code of the departure airport or city.
    #[serde(default)]
    pub origin: String,
    /// IATA code of the arrival airport or city.
    #[serde(default)]
    pub destination: String,
    /// Departure date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

impl SearchQuery {
    /// Creates a new `SearchQuery`.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
    ) -> SearchQuery {
        SearchQuery {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
        }
    }
}
