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

//! The contact list kept by the server.

use serde::{de::IgnoredAny, Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{http_client::ApiRequest, Client, Result};

/// A high-level API to manage the contact list.
#[derive(Debug, Clone)]
pub struct Contacts {
    client: Client,
}

#[derive(Deserialize)]
struct ContactList {
    contacts: Vec<Contact>,
}

impl Contacts {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get every contact.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Contact>> {
        let list: ContactList = self.client.send(ApiRequest::get(["contacts"])).await?;
        debug!(count = list.contacts.len(), "Got the contact list");
        Ok(list.contacts)
    }

    /// Add a contact.
    ///
    /// The server rejects the contact if a field is empty, the email is
    /// invalid or already used by another contact.
    #[instrument(skip(self, contact))]
    pub async fn create(&self, contact: &NewContact) -> Result<()> {
        let _: IgnoredAny =
            self.client.send(ApiRequest::post(["create_contact"]).json(contact)).await?;
        Ok(())
    }

    /// Change some fields of a contact.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: u64, update: &ContactUpdate) -> Result<()> {
        let request = ApiRequest::patch(["update_contact".to_owned(), id.to_string()]).json(update);
        let _: IgnoredAny = self.client.send(request).await?;
        Ok(())
    }

    /// Remove a contact.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<()> {
        let request = ApiRequest::delete(["delete_contact".to_owned(), id.to_string()]);
        let _: IgnoredAny = self.client.send(request).await?;
        Ok(())
    }
}

/// A contact, as stored by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// The identifier of the contact, used to update or delete it.
    pub id: u64,
    #[allow(missing_docs)]
    pub first_name: String,
    #[allow(missing_docs)]
    pub last_name: String,
    #[allow(missing_docs)]
    pub email: String,
}

/// A contact to create.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    #[allow(missing_docs)]
    pub first_name: String,
    #[allow(missing_docs)]
    pub last_name: String,
    #[allow(missing_docs)]
    pub email: String,
}

impl NewContact {
    /// Create a new `NewContact`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), email: email.into() }
    }
}

/// The fields of a contact to change, the ones left to `None` are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
