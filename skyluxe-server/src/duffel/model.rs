//! Duffel wire types.
//!
//! Only the parts of the Duffel API the gateway touches are modeled.

use serde::{Deserialize, Serialize};

use skyluxe_model::search::SearchQuery;

/// Every Duffel payload is wrapped in a `data` object.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of `POST /air/offer_requests`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CreateOfferRequest {
    pub slices: Vec<Slice>,
    pub passengers: Vec<Passenger>,
    pub cabin_class: CabinClass,
}

impl CreateOfferRequest {
    /// A one-way, single adult, economy search.
    pub fn one_way(query: &SearchQuery) -> CreateOfferRequest {
        CreateOfferRequest {
            slices: vec![Slice {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
                departure_date: query.date.clone(),
            }],
            passengers: vec![Passenger {
                kind: PassengerType::Adult,
            }],
            cabin_class: CabinClass::Economy,
        }
    }
}

/// One leg of a journey.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Slice {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Passenger {
    #[serde(rename = "type")]
    pub kind: PassengerType,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassengerType {
    Adult,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// A created offer request.
///
/// The gateway asks Duffel not to inline the offers, so all that matters is
/// the ID.
#[derive(Clone, Debug, Deserialize)]
pub struct OfferRequest {
    pub id: String,
}

/// Query params of `GET /air/offers`.
#[derive(Clone, Debug, Serialize)]
pub struct ListOffersQuery<'a> {
    pub offer_request_id: &'a str,
    pub limit: u32,
}

/// An error body returned by Duffel.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// The most descriptive message of the first error.
    pub fn message(self) -> Option<String> {
        self.errors
            .into_iter()
            .next()
            .and_then(|error| error.message.or(error.title).or(error.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn one_way_body() {
        let query = SearchQuery::new("DEL", "DXB", "2026-06-25");
        let body = Envelope {
            data: CreateOfferRequest::one_way(&query),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "data": {
                    "slices": [{
                        "origin": "DEL",
                        "destination": "DXB",
                        "departure_date": "2026-06-25"
                    }],
                    "passengers": [{ "type": "adult" }],
                    "cabin_class": "economy"
                }
            })
        );
    }

    #[test]
    fn first_error_message() {
        let res: ErrorResponse = serde_json::from_value(json!({
            "meta": { "status": 422, "request_id": "FZ" },
            "errors": [
                { "type": "validation_error", "title": "Invalid", "message": "Field 'origin' is invalid", "code": "invalid_airport" },
                { "type": "validation_error", "message": "second" }
            ]
        }))
        .unwrap();

        assert_eq!(res.message().as_deref(), Some("Field 'origin' is invalid"));
    }

    #[test]
    fn empty_errors() {
        let res: ErrorResponse = serde_json::from_value(json!({ "errors": [] })).unwrap();

        assert_eq!(res.message(), None);
    }
}
