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

//! The search history of the logged-in user.

use serde::{de::IgnoredAny, Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{http_client::ApiRequest, Client, Error, Result};

/// A high-level API to the saved searches of the logged-in user.
///
/// The endpoints are keyed on the username of the session, every method
/// fails with [`Error::AuthenticationRequired`] if nobody is logged in.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    client: Client,
}

#[derive(Deserialize)]
struct HistoryList {
    history: Vec<HistoryEntry>,
}

#[derive(Serialize)]
struct SaveSearchRequest<'a> {
    username: &'a str,
    query: &'a str,
}

impl SearchHistory {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn username(&self) -> Result<String> {
        self.client.user().map(|user| user.username).ok_or(Error::AuthenticationRequired)
    }

    /// Get the saved searches, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        let username = self.username()?;

        let request = ApiRequest::get(["search_history"]).query("username", username);
        let list: HistoryList = self.client.send(request).await?;

        debug!(count = list.history.len(), "Got the search history");

        Ok(list.history)
    }

    /// Save a search.
    ///
    /// The server only keeps the most recent searches of every user, saving
    /// one can drop the oldest.
    #[instrument(skip(self))]
    pub async fn save(&self, query: &str) -> Result<()> {
        let username = self.username()?;

        let body = SaveSearchRequest { username: &username, query };
        let _: IgnoredAny =
            self.client.send(ApiRequest::post(["search_history"]).json(&body)).await?;

        Ok(())
    }

    /// Remove a saved search.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<()> {
        let username = self.username()?;

        let request = ApiRequest::delete(["search_history".to_owned(), id.to_string()])
            .query("username", username);
        let _: IgnoredAny = self.client.send(request).await?;

        Ok(())
    }
}

/// A saved search.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    /// The identifier of the entry, used to delete it.
    pub id: u64,

    /// What was searched for.
    pub query: String,

    /// When the search was saved, as the server formatted it.
    pub timestamp: String,
}
