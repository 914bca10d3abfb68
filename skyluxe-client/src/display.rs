//! Terminal rendering of the search screen.

use crate::pricing::{PriceBreakdown, commission_label};
use crate::session::{OfferDetail, SearchSession, Status};

/// Shown when there is nothing to list.
pub const EMPTY_STATE: &str = "Enter codes (e.g. DEL to DXB) and search.";

/// Shown while a search is in flight.
pub const SEARCHING: &str = "SEARCHING...";

/// Renders the result list, one offer per line.
///
/// Offers are numbered from 1.
pub fn render_results(session: &SearchSession) -> String {
    let mut lines = Vec::new();

    if let Some(alert) = session.alert() {
        lines.push(format!("Search Failed: {}", alert));
    }

    if session.status() == Status::Searching {
        lines.push(SEARCHING.to_owned());
    } else if session.offers().is_empty() {
        lines.push(EMPTY_STATE.to_owned());
    } else {
        // label with the search that produced the offers, not the form
        let (origin, destination) = session
            .results_for()
            .map(|query| (query.origin.as_str(), query.destination.as_str()))
            .unwrap_or((session.origin(), session.destination()));

        lines.extend(session.offers().iter().enumerate().map(|(i, offer)| {
            format!(
                "{}. {}  ${}  {} ➔ {}",
                i + 1,
                offer.airline_name(),
                PriceBreakdown::of(offer).total,
                origin,
                destination,
            )
        }));
    }

    join_lines(lines)
}

/// Renders the price breakdown of a selected offer.
pub fn render_detail(detail: &OfferDetail) -> String {
    let PriceBreakdown {
        original,
        profit,
        total,
    } = &detail.breakdown;
    let commission = format!("Your Commission ({}):", commission_label());

    join_lines(vec![
        "Flight Breakdown".to_owned(),
        detail.airline.clone(),
        String::new(),
        format!("{:<24}${}", "Airline Cost:", original),
        format!("{:<24}+${}", commission, profit),
        format!("{:<24}${}", "Customer Pays:", total),
    ])
}

fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
