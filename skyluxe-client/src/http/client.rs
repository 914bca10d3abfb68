//! Skyluxe gateway client.

use std::sync::Arc;

use anyhow::Error;

use derive_more::{Display, Error};

use http::{Method, StatusCode};

use skyluxe_model::{Error as ApiError, search::SearchQuery};

use crate::config::ApiConfig;

use super::request::SearchFlights;

/// A client used to access the gateway.
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
}

impl Client {
    /// Creates a new client.
    pub fn new(config: &ApiConfig) -> Result<Client, Error> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .deflate(true)
            .build()?;

        let state = ClientState {
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
        };

        Ok(Client {
            http,
            state: Arc::new(state),
        })
    }

    /// Searches one-way flights.
    pub fn search_flights(&self, query: SearchQuery) -> SearchFlights {
        SearchFlights::new(self.clone(), query)
    }

    /// Makes a generic request to the gateway.
    pub(super) fn request(&self, method: Method, url: impl AsRef<str>) -> Request {
        Request::new(self.clone(), method, url)
    }
}

/// A HTTP client request.
#[derive(Debug)]
pub struct Request {
    client: Client,
    request: reqwest::RequestBuilder,
}

impl Request {
    /// Creates a new `Request`.
    ///
    /// The url is appended to the gateway endpoint.
    pub fn new(client: Client, method: Method, url: impl AsRef<str>) -> Request {
        let url = format!("{}{}", client.state.endpoint, url.as_ref());

        Request {
            request: client.http.request(method, url),
            client,
        }
    }

    /// Sends the request.
    ///
    /// A non-2xx response is an error. If the gateway explained itself, the
    /// error downcasts to [`ApiError`], otherwise to [`StatusError`].
    pub async fn send(self) -> Result<reqwest::Response, Error> {
        let request = self.request.build()?;

        tracing::debug!(url = %request.url(), "gateway: sending request");

        let res = self.client.http.execute(request).await?;
        let status = res.status();

        if status.is_success() {
            Ok(res)
        } else {
            let body = res.bytes().await?;

            match serde_json::from_slice::<ApiError>(&body) {
                Ok(error) => Err(error.into()),
                Err(_) => Err(StatusError(status).into()),
            }
        }
    }
}

/// The gateway failed without an error body.
#[derive(Debug, Display, Error)]
#[display("gateway responded with {_0}")]
pub struct StatusError(#[error(not(source))] pub StatusCode);
