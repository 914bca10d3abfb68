//! Skyluxe general application items.

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use anyhow::Error;

use axum::extract::Request;
use axum::extract::rejection::QueryRejection;
use axum::middleware::Next;
use axum::{
    Json,
    extract::{FromRequestParts, Query},
    response::{IntoResponse, Response},
};

use http::{HeaderValue, StatusCode, header};

use skyluxe_model::{Error as ApiError, ErrorCode};

use derive_more::{Deref, Display, From};

use crate::config::Config;
use crate::duffel::{self, DuffelError};

/// Shared server state.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// The port the server is binded to.
    pub port: u16,
    /// The flight provider.
    pub duffel: duffel::Client,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// See [`Config`] to learn more on what the options do.
    pub fn new(config: Config) -> Result<AppState, Error> {
        let duffel = duffel::Client::new(&config.duffel)?;

        // searches fail with a 500 until a token shows up, but say so early
        if !duffel.has_token() {
            tracing::warn!("`DUFFEL_TOKEN` is not set; every search will fail");
        }

        Ok(AppState {
            port: config.server.port,
            duffel,
        })
    }
}

impl Debug for AppState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

/// App REST headers.
pub async fn app_rest_headers(request: Request, next: Next) -> Response {
    let mut res = next.run(request).await;

    res.headers_mut().extend([
        (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
    ]);

    res
}

/// App Query extractor.
#[derive(Deref, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// App JSON responder.
#[derive(Deref)]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// An app error.
#[derive(Debug)]
pub struct AppError {
    kind: AppErrorKind,
    /// An optional override message.
    message: Option<String>,
}

impl AppError {
    /// The kind of error.
    pub fn kind(&self) -> &AppErrorKind {
        &self.kind
    }

    /// Checks if an error is internal.
    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }

    /// Attachs an override message to the error.
    pub fn with_message(self, message: impl Into<String>) -> AppError {
        AppError {
            message: Some(message.into()),
            ..self
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message.as_ref() {
            f.write_str(message)
        } else {
            Display::fmt(&self.kind, f)
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AppErrorKind::Query(err) => Some(err),
            AppErrorKind::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<T> for AppError
where
    AppErrorKind: From<T>,
{
    fn from(value: T) -> Self {
        AppError {
            kind: AppErrorKind::from(value),
            message: None,
        }
    }
}

#[derive(Debug, Display, From)]
pub enum AppErrorKind {
    /// The request's query params were malformed or unexpected.
    #[display("{_0}")]
    Query(QueryRejection),
    /// The route wasn't found.
    #[from(ignore)]
    #[display("Resource not found")]
    NotFound,
    /// The flight search failed.
    ///
    /// Missing credentials, network failures and provider rejections all end
    /// up here.
    #[display("{_0}")]
    Provider(DuffelError),
}

impl AppErrorKind {
    /// Checks if an error is internal.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppErrorKind::Provider(_))
    }

    /// The status and API code of the error.
    fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppErrorKind::Query(_) => (StatusCode::BAD_REQUEST, ErrorCode::MalformedQuery),
            AppErrorKind::NotFound => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppErrorKind::Provider(DuffelError::MissingToken) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::MissingCredentials,
            ),
            AppErrorKind::Provider(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::ProviderError)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.kind.status();

        // search failures are reported as they are, the client only gets
        // one kind of failure anyways
        let error = ApiError {
            message: self.to_string(),
            code,
        };

        let mut response = (status, AppJson(error)).into_response();
        if self.is_internal() {
            response.extensions_mut().insert(Arc::new(self));
        }
        response
    }
}
