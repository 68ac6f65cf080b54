// Copyright 2026 The media-client contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error conditions.

use as_variant::as_variant;
use media_client_base::{Error as SdkBaseError, StoreError};
use reqwest::{Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Result type of the media-client.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Result type of a pure HTTP request.
pub type HttpResult<T> = std::result::Result<T, HttpError>;

/// An HTTP error, representing either a connection error or an error response
/// from the API server.
#[derive(Error, Debug)]
pub enum HttpError {
    /// An error at the HTTP layer, this includes timeouts and bodies that
    /// couldn't be deserialized.
    #[error(transparent)]
    Reqwest(#[from] ReqwestError),

    /// The server answered with an error status.
    #[error("the server returned an error ({status}): {message}")]
    Api {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The message the server gave, or the canonical reason of the status
        /// if there was none.
        message: String,
    },

    /// The base URL of the client can't have paths appended to it.
    #[error("the base URL can't be used as a base for endpoint paths")]
    InvalidBaseUrl,
}

impl HttpError {
    /// Build an [`Api`][Self::Api] error from the status and body of a failed
    /// response.
    ///
    /// The API servers put the reason of the failure either in a `message`
    /// or in an `error` field.
    pub(crate) fn from_response_body(status: StatusCode, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_owned());

        Self::Api { status, message }
    }

    /// The HTTP status of the error response, if the server answered.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Reqwest(error) => error.status(),
            Self::InvalidBaseUrl => None,
        }
    }

    /// The message the server gave with its error response, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Internal representation of errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error doing an HTTP request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The session couldn't be read or persisted.
    #[error(transparent)]
    Session(#[from] SdkBaseError),

    /// The endpoint is tied to the logged-in user but nobody is logged in.
    #[error("the queried endpoint requires a logged-in user")]
    AuthenticationRequired,

    /// A search was attempted without a query.
    #[error("a search query is required")]
    EmptySearchQuery,
}

impl Error {
    /// If `self` is `Http(e)`, returns `Some(e)`.
    ///
    /// Otherwise, returns `None`.
    pub fn as_http_error(&self) -> Option<&HttpError> {
        as_variant!(self, Self::Http)
    }

    /// The HTTP status of the error response, if the server answered.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.as_http_error().and_then(HttpError::status_code)
    }
}

impl From<ReqwestError> for Error {
    fn from(e: ReqwestError) -> Self {
        Error::Http(HttpError::Reqwest(e))
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Session(e.into())
    }
}
