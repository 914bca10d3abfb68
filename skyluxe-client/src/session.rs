//! The search screen's state.
//!
//! A [`SearchSession`] owns the search form, the offers of the last finished
//! search and the offer the user is looking at. It never talks to the network
//! by itself except through [`SearchSession::search`]; callers that want
//! overlapping searches drive [`SearchSession::begin_search`] and
//! [`SearchSession::finish_search`] themselves.

use anyhow::Error;

use skyluxe_model::{offer::Offer, search::SearchQuery};

use crate::{config::SearchDefaults, http::Client, pricing::PriceBreakdown};

/// Shown for any failed search, whatever the cause.
pub const SEARCH_FAILED_ALERT: &str =
    "Could not find flights. Ensure you used correct 3-letter codes (e.g. DEL, LHR, JFK).";

/// The length of an IATA code.
pub const CODE_LEN: usize = 3;

/// Where the search screen is at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Nothing searched yet.
    Idle,
    /// At least one search is in flight.
    Searching,
    /// The last finished search succeeded.
    Results,
    /// The last finished search failed.
    Failed,
}

/// A search that has been started but not finished.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a search has to be finished"]
pub struct PendingSearch {
    query: SearchQuery,
}

impl PendingSearch {
    /// The query to send to the gateway.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// The detail view of a selected offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfferDetail {
    /// The selling airline.
    pub airline: String,
    /// The offer's price with commission.
    pub breakdown: PriceBreakdown,
}

impl OfferDetail {
    /// Derives the detail view from an already fetched offer.
    pub fn new(offer: &Offer) -> OfferDetail {
        OfferDetail {
            airline: offer.airline_name().to_owned(),
            breakdown: PriceBreakdown::of(offer),
        }
    }
}

/// Search screen state.
#[derive(Clone, Debug)]
pub struct SearchSession {
    origin: String,
    destination: String,
    date: String,
    offers: Vec<Offer>,
    /// The query the current offers answer.
    results_for: Option<SearchQuery>,
    in_flight: usize,
    alert: Option<String>,
    selected: Option<usize>,
}

impl SearchSession {
    /// Creates a new `SearchSession` with a prefilled form.
    pub fn new(defaults: &SearchDefaults) -> SearchSession {
        let mut session = SearchSession {
            origin: String::new(),
            destination: String::new(),
            date: String::new(),
            offers: Vec::new(),
            results_for: None,
            in_flight: 0,
            alert: None,
            selected: None,
        };

        session.set_origin(&defaults.origin);
        session.set_destination(&defaults.destination);
        session.set_date(&defaults.date);

        session
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Sets the origin code, uppercased and cut to [`CODE_LEN`].
    pub fn set_origin(&mut self, origin: impl AsRef<str>) {
        self.origin = code_input(origin.as_ref());
    }

    /// Sets the destination code, uppercased and cut to [`CODE_LEN`].
    pub fn set_destination(&mut self, destination: impl AsRef<str>) {
        self.destination = code_input(destination.as_ref());
    }

    /// Sets the date as typed.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// The query the form currently describes.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.origin, &self.destination, &self.date)
    }

    /// The current status.
    pub fn status(&self) -> Status {
        if self.in_flight > 0 {
            Status::Searching
        } else if self.alert.is_some() {
            Status::Failed
        } else if self.results_for.is_some() {
            Status::Results
        } else {
            Status::Idle
        }
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// The offers of the last successful search.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// The query the current offers answer, if any.
    pub fn results_for(&self) -> Option<&SearchQuery> {
        self.results_for.as_ref()
    }

    /// The alert the user has not dismissed yet.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Starts a search with the current form.
    ///
    /// Clears the previous results. A search already in flight is not
    /// cancelled.
    pub fn begin_search(&mut self) -> PendingSearch {
        let query = self.query();

        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            "searching",
        );

        self.in_flight += 1;
        self.offers.clear();
        self.results_for = None;
        self.alert = None;
        self.selected = None;

        PendingSearch { query }
    }

    /// Finishes a search.
    ///
    /// Whatever finishes last is what the screen shows.
    pub fn finish_search(&mut self, search: PendingSearch, result: Result<Vec<Offer>, Error>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(offers) => {
                tracing::info!("found {} flights", offers.len());

                self.offers = offers;
                self.results_for = Some(search.query);
                self.alert = None;
                self.selected = None;
            }
            Err(err) => {
                for err in err.chain() {
                    tracing::error!("search failed: {}", err);
                }

                self.alert = Some(SEARCH_FAILED_ALERT.to_owned());
            }
        }
    }

    /// Runs a search through the gateway.
    pub async fn search(&mut self, client: &Client) {
        let search = self.begin_search();
        let result = client.search_flights(search.query().clone()).await;
        self.finish_search(search, result);
    }

    /// Opens the detail view of an offer.
    ///
    /// Returns `false` and leaves the view alone if there is no such offer.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.offers.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Closes the detail view.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// The selected offer.
    pub fn selected(&self) -> Option<&Offer> {
        self.selected.and_then(|index| self.offers.get(index))
    }

    /// The detail view of the selected offer.
    pub fn detail(&self) -> Option<OfferDetail> {
        self.selected().map(OfferDetail::new)
    }
}

fn code_input(code: &str) -> String {
    code.chars().take(CODE_LEN).collect::<String>().to_uppercase()
}
