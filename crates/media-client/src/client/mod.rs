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

use media_client_base::{Access, AccessGate, SessionChange, SessionStore, UserProfile};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast;
use url::Url;

use crate::{
    authentication::Auth,
    contacts::Contacts,
    history::SearchHistory,
    http_client::{ApiRequest, HttpClient},
    media::Search,
    HttpResult,
};

mod builder;

pub use self::builder::{ClientBuildError, ClientBuilder};

/// An async/await enabled client for the Media App API.
///
/// All of the state is held in an `Arc` so the `Client` can be cloned freely,
/// every clone talks to the same server with the same session.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    /// The URL every endpoint path is appended to.
    base_url: Url,
    http_client: HttpClient,
    /// Who is logged in, and with which tokens.
    session_store: SessionStore,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("session_store", &self.inner.session_store)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new [`Client`] that will use the given API server, keeping its
    /// session in memory only.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The URL of the API server.
    pub async fn new(base_url: Url) -> Result<Self, ClientBuildError> {
        Self::builder().base_url(base_url).build().await
    }

    /// Create a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        base_url: Url,
        http_client: HttpClient,
        session_store: SessionStore,
    ) -> Self {
        Self { inner: Arc::new(ClientInner { base_url, http_client, session_store }) }
    }

    /// The URL of the API server.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The session this client authenticates its requests with.
    pub fn session_store(&self) -> &SessionStore {
        &self.inner.session_store
    }

    /// Is the client logged in.
    pub fn logged_in(&self) -> bool {
        self.inner.session_store.access_token().is_some()
    }

    /// The profile of the logged-in user, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.session_store.user()
    }

    /// The access token sent with every request, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner.session_store.access_token()
    }

    /// Whether a view that needs a logged-in user may be shown.
    pub fn access(&self) -> Access {
        AccessGate.check(&self.inner.session_store)
    }

    /// Get notified of logins and logouts.
    pub fn subscribe_to_session_changes(&self) -> broadcast::Receiver<SessionChange> {
        self.inner.session_store.subscribe()
    }

    /// Account creation, login and logout.
    pub fn auth(&self) -> Auth {
        Auth::new(self.clone())
    }

    /// Image and audio search.
    pub fn search(&self) -> Search {
        Search::new(self.clone())
    }

    /// The contact list.
    pub fn contacts(&self) -> Contacts {
        Contacts::new(self.clone())
    }

    /// The search history of the logged-in user.
    pub fn history(&self) -> SearchHistory {
        SearchHistory::new(self.clone())
    }

    /// Send a request to the API server, with the current access token if
    /// there is one.
    pub(crate) async fn send<B, R>(&self, request: ApiRequest<'_, B>) -> HttpResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let access_token = self.inner.session_store.access_token();
        self.inner.http_client.send(request, &self.inner.base_url, access_token.as_deref()).await
    }
}
