//! Flight search.

use axum::{debug_handler, extract::State};

use skyluxe_model::{offer::Offer, search::SearchQuery};

use crate::app::{AppError, AppJson, AppQuery, AppState};

/// Searches one-way flights.
///
/// The query is forwarded to Duffel unchecked and the offers come back
/// untouched.
#[debug_handler]
pub async fn search_flight(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<AppJson<Vec<Offer>>, AppError> {
    tracing::info!(
        origin = %query.origin,
        destination = %query.destination,
        date = %query.date,
        "search request",
    );

    let offers = state.duffel.search(&query).await?;

    tracing::info!("found {} flights", offers.len());

    Ok(AppJson(offers))
}
