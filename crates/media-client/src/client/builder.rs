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

use std::{fmt, sync::Arc};
#[cfg(feature = "json-store")]
use std::path::PathBuf;

use media_client_base::{
    store::{DynKeyValueStore, IntoKeyValueStore, MemoryStore},
    LogoutPolicy, SessionStore,
};
use thiserror::Error;
use tracing::{debug, field::debug, instrument, Span};
use url::Url;

use super::Client;
use crate::{config::RequestConfig, http_client::HttpClient};

/// Builder that allows creating and configuring various parts of a
/// [`Client`].
///
/// By default the session is kept in memory and lost when the `Client` is
/// dropped, unless a persistent store is configured with
/// [`key_value_store()`][Self::key_value_store] or
/// [`json_store_path()`][Self::json_store_path].
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use media_client::{config::RequestConfig, Client};
///
/// let client_builder = Client::builder()
///     .base_url("http://localhost:5000")
///     .request_config(RequestConfig::new().timeout(Duration::from_secs(5)));
/// ```
///
/// # Example for using a custom http client
///
/// Note: the timeout of the [`RequestConfig`] is still applied to every
/// request sent with a custom http client.
///
/// ```
/// use media_client::Client;
///
/// let reqwest_builder = reqwest::ClientBuilder::new().user_agent("MyApp/v3.0");
///
/// let client_builder = Client::builder()
///     .base_url("http://localhost:5000")
///     .http_client(reqwest_builder.build()?);
/// # anyhow::Ok(())
/// ```
#[must_use]
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    request_config: RequestConfig,
    store_config: BuilderStoreConfig,
    logout_policy: LogoutPolicy,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            base_url: None,
            request_config: Default::default(),
            store_config: BuilderStoreConfig::Memory,
            logout_policy: Default::default(),
            http_client: None,
        }
    }

    /// Set the URL of the API server.
    ///
    /// Endpoint paths are appended to it, so it may carry a path prefix like
    /// `https://media.example.org/api/`.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = Some(url.as_ref().to_owned());
        self
    }

    /// Set the default timeout for all HTTP requests.
    pub fn request_config(mut self, request_config: RequestConfig) -> Self {
        self.request_config = request_config;
        self
    }

    /// Use an already created session store.
    ///
    /// The session store is hydrated when the `Client` is built if it wasn't
    /// already, and [`logout_policy()`][Self::logout_policy] is ignored.
    pub fn session_store(mut self, session_store: SessionStore) -> Self {
        self.store_config = BuilderStoreConfig::SessionStore(session_store);
        self
    }

    /// Persist the session in the given key-value store.
    pub fn key_value_store(mut self, store: impl IntoKeyValueStore) -> Self {
        self.store_config = BuilderStoreConfig::KeyValueStore(store.into_key_value_store());
        self
    }

    /// Persist the session in a JSON file at the given path.
    ///
    /// The file is only written once somebody logs in.
    #[cfg(feature = "json-store")]
    pub fn json_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_config = BuilderStoreConfig::JsonFile(path.into());
        self
    }

    /// Set what logging out removes from the key-value store.
    pub fn logout_policy(mut self, policy: LogoutPolicy) -> Self {
        self.logout_policy = policy;
        self
    }

    /// Specify a [`reqwest::Client`] instance to handle sending requests and
    /// receiving responses.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Create a [`Client`] with the options set on this builder.
    ///
    /// The persisted session is read before this returns, so the client is
    /// logged in right away if a previous run left a session behind.
    ///
    /// # Errors
    ///
    /// This method can fail for two general reasons:
    ///
    /// * Invalid configuration: The base URL is missing or can't be parsed.
    ///
    /// * Storage: The persisted session couldn't be read.
    #[instrument(skip_all, fields(base_url))]
    pub async fn build(self) -> Result<Client, ClientBuildError> {
        debug!("Starting to build the Client");

        let base_url = self.base_url.ok_or(ClientBuildError::MissingBaseUrl)?;
        let base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl);
        }
        Span::current().record("base_url", debug(&base_url));

        let inner_http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(self.request_config.timeout).build()?,
        };

        let session_store = match self.store_config {
            BuilderStoreConfig::SessionStore(session_store) => session_store,
            BuilderStoreConfig::Memory => {
                SessionStore::builder(MemoryStore::new()).logout_policy(self.logout_policy).build()
            }
            BuilderStoreConfig::KeyValueStore(store) => {
                SessionStore::builder(store).logout_policy(self.logout_policy).build()
            }
            #[cfg(feature = "json-store")]
            BuilderStoreConfig::JsonFile(path) => {
                let store = media_client_base::store::JsonFileStore::open(path)
                    .await
                    .map_err(media_client_base::Error::from)?;
                SessionStore::builder(store).logout_policy(self.logout_policy).build()
            }
        };

        session_store.hydrate().await?;

        let http_client = HttpClient::new(inner_http_client, self.request_config);
        let client = Client::from_parts(base_url, http_client, session_store);

        debug!("Done building the Client");

        Ok(client)
    }
}

#[derive(Clone)]
enum BuilderStoreConfig {
    Memory,
    KeyValueStore(Arc<DynKeyValueStore>),
    SessionStore(SessionStore),
    #[cfg(feature = "json-store")]
    JsonFile(PathBuf),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for BuilderStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            Self::KeyValueStore(_) => f.write_str("KeyValueStore"),
            Self::SessionStore(session_store) => {
                f.debug_tuple("SessionStore").field(session_store).finish()
            }
            #[cfg(feature = "json-store")]
            Self::JsonFile(path) => f.debug_tuple("JsonFile").field(path).finish(),
        }
    }
}

/// Errors that can happen in [`ClientBuilder::build`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// No base URL was configured.
    #[error("no base URL was configured")]
    MissingBaseUrl,

    /// The base URL can't have endpoint paths appended to it.
    #[error("the base URL can't be used as a base for endpoint paths")]
    InvalidBaseUrl,

    /// An error encountered when trying to parse the base URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The HTTP client couldn't be created.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The persisted session couldn't be read.
    #[error(transparent)]
    Session(#[from] media_client_base::Error),
}
