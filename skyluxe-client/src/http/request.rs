//! Flight search requests.

use futures_util::future::BoxFuture;

use http::Method;

use skyluxe_model::{offer::Offer, search::SearchQuery};

use crate::http::Client;

use anyhow::Error;

/// Searches flights through the gateway.
#[derive(Debug)]
pub struct SearchFlights {
    client: Client,
    query: SearchQuery,
}

impl SearchFlights {
    /// Creates a new `SearchFlights`.
    pub fn new(client: Client, query: SearchQuery) -> SearchFlights {
        SearchFlights { client, query }
    }
}

impl IntoFuture for SearchFlights {
    type Output = Result<Vec<Offer>, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let query = serde_urlencoded::ser::to_string(&self.query)?;

            let request = self
                .client
                .request(Method::GET, format!("/search-flight?{}", query))
                .send()
                .await?;

            Ok(request.json().await?)
        })
    }
}
