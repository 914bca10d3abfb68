//! Duffel flight search client.

pub mod model;

use std::sync::Arc;

use derive_more::{Display, Error, From};

use http::{HeaderName, HeaderValue, Method, header};

use reqwest::StatusCode;

use secstr::SecUtf8;

use serde::de::DeserializeOwned;

use skyluxe_model::{offer::Offer, search::SearchQuery};

use crate::config::DuffelConfig;

use self::model::{CreateOfferRequest, Envelope, ErrorResponse, ListOffersQuery, OfferRequest};

pub const DUFFEL_VERSION: HeaderName = HeaderName::from_static("duffel-version");

/// A client for the Duffel API.
///
/// Cheaply cloneable, as it uses an `Arc` to track internal state and manage
/// connections.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    state: Arc<ClientState>,
}

#[derive(Debug)]
struct ClientState {
    endpoint: String,
    version: String,
    token: Option<SecUtf8>,
    offer_limit: u32,
}

impl Client {
    /// Creates a new client.
    pub fn new(config: &DuffelConfig) -> Result<Client, reqwest::Error> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;

        let state = ClientState {
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            version: config.version.to_owned(),
            token: config
                .token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| SecUtf8::from(token.to_owned())),
            offer_limit: config.offer_limit,
        };

        Ok(Client {
            http,
            state: Arc::new(state),
        })
    }

    /// Whether an access token is configured.
    pub fn has_token(&self) -> bool {
        self.state.token.is_some()
    }

    /// Searches for one-way economy offers for a single adult.
    ///
    /// Returns at most the configured offer limit.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Offer>, DuffelError> {
        let offer_request = self
            .create_offer_request(&CreateOfferRequest::one_way(query))
            .await?;

        tracing::debug!(id = %offer_request.id, "duffel: created offer request");

        self.list_offers(&offer_request.id, self.state.offer_limit)
            .await
    }

    /// Creates an offer request without inlining its offers.
    pub async fn create_offer_request(
        &self,
        request: &CreateOfferRequest,
    ) -> Result<OfferRequest, DuffelError> {
        let request = self
            .request(Method::POST, "/air/offer_requests")?
            .query(&[("return_offers", "false")])
            .json(&Envelope { data: request });

        send(request).await
    }

    /// Lists the offers of an offer request.
    pub async fn list_offers(
        &self,
        offer_request_id: &str,
        limit: u32,
    ) -> Result<Vec<Offer>, DuffelError> {
        let request = self
            .request(Method::GET, "/air/offers")?
            .query(&ListOffersQuery {
                offer_request_id,
                limit,
            });

        send(request).await
    }

    /// Makes a generic authenticated request to Duffel.
    fn request(
        &self,
        method: Method,
        url: impl AsRef<str>,
    ) -> Result<reqwest::RequestBuilder, DuffelError> {
        let Some(token) = self.state.token.as_ref() else {
            return Err(DuffelError::MissingToken);
        };

        let url = format!("{}{}", self.state.endpoint, url.as_ref());

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token.unsecure())
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .header(DUFFEL_VERSION, &self.state.version))
    }
}

async fn send<T>(request: reqwest::RequestBuilder) -> Result<T, DuffelError>
where
    T: DeserializeOwned,
{
    let res = request.send().await?;
    let status = res.status();

    if status.is_success() {
        Ok(res.json::<Envelope<T>>().await?.data)
    } else {
        let body = res.bytes().await?;
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .and_then(ErrorResponse::message)
            .unwrap_or_else(|| format!("provider responded with {}", status));

        Err(DuffelError::Api { status, message })
    }
}

/// A failed Duffel call.
#[derive(Debug, Display, Error, From)]
pub enum DuffelError {
    /// No access token is configured.
    #[display("missing credentials: `DUFFEL_TOKEN` is not set")]
    #[from(ignore)]
    MissingToken,
    /// Duffel rejected the request.
    #[display("{message}")]
    #[from(ignore)]
    Api { status: StatusCode, message: String },
    /// The request never got a usable response.
    #[display("{_0}")]
    Http(reqwest::Error),
}
