//! Flight offer models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A priced, bookable flight itinerary.
///
/// Offers come straight from the flight provider. Only the fields Skyluxe
/// reads are typed; everything else is kept in [`Offer::extra`] so an offer
/// serializes back exactly as it was received.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Offer {
    /// The provider's offer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The airline selling the offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    /// The total price as a decimal string, e.g. `"100.00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    /// The currency of [`Offer::total_amount`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_currency: Option<String>,
    /// Untyped offer fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Offer {
    /// Shown when the provider did not name the airline.
    pub const UNKNOWN_AIRLINE: &'static str = "Unknown airline";

    /// The name of the selling airline.
    pub fn airline_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.name.as_deref())
            .unwrap_or(Offer::UNKNOWN_AIRLINE)
    }
}

/// The airline that owns an offer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Owner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
