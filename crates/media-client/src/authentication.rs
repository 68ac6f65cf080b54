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

//! Account creation, login and logout, and the registration of the server
//! with the Openverse catalog.

use std::fmt;

use media_client_base::UserProfile;
use serde::{de::IgnoredAny, Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

use crate::{http_client::ApiRequest, Client, Result};

/// A high-level API to manage the account and the session of the client.
#[derive(Debug, Clone)]
pub struct Auth {
    client: Client,
}

#[derive(Serialize)]
struct RegistrationRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct OpenverseRegistrationRequest<'a> {
    name: &'a str,
    description: &'a str,
    email: &'a str,
}

/// The server wraps what Openverse answered in `data`, next to a `message`
/// for humans.
#[derive(Deserialize)]
struct OpenverseResponse {
    data: JsonValue,
}

impl Auth {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new account.
    ///
    /// This doesn't log the new user in, call
    /// [`login_username()`][Self::login_username] afterwards.
    ///
    /// # Arguments
    ///
    /// * `username` - The name to log in with.
    ///
    /// * `email` - The email address of the user, the server rejects invalid
    ///   ones.
    ///
    /// * `password` - The password of the account.
    #[instrument(skip(self, email, password))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let body = RegistrationRequest { username, email, password };
        let _: IgnoredAny = self.client.send(ApiRequest::post(["register"]).json(&body)).await?;

        debug!("Account created");

        Ok(())
    }

    /// Log in with a username and a password.
    ///
    /// On success the user and the tokens the server returned replace the
    /// current session, which is persisted in the key-value store of the
    /// client. Every following request carries the new access token.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use url::Url;
    /// # use media_client::Client;
    /// # futures_executor::block_on(async {
    /// let client = Client::new(Url::parse("http://localhost:5000")?).await?;
    ///
    /// let response = client.auth().login_username("alice", "wordpass").await?;
    /// println!("Logged in as {}", response.user.username);
    /// # anyhow::Ok(()) });
    /// ```
    #[instrument(skip(self, password))]
    pub async fn login_username(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest { username, password };
        let response: LoginResponse =
            self.client.send(ApiRequest::post(["login"]).json(&body)).await?;

        self.client
            .session_store()
            .login(
                response.user.clone(),
                response.access_token.clone(),
                response.refresh_token.clone(),
            )
            .await?;

        Ok(response)
    }

    /// Register the server as an application of the Openverse catalog.
    ///
    /// Returns what Openverse answered, notably the `client_id` and
    /// `client_secret` the server operator has to configure. Openverse also
    /// sends a verification link to `email`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the application.
    ///
    /// * `description` - What the application does.
    ///
    /// * `email` - The contact address of the application.
    #[instrument(skip(self, description, email))]
    pub async fn register_openverse(
        &self,
        name: &str,
        description: &str,
        email: &str,
    ) -> Result<JsonValue> {
        let body = OpenverseRegistrationRequest { name, description, email };
        let response: OpenverseResponse =
            self.client.send(ApiRequest::post(["register_openverse"]).json(&body)).await?;

        debug!("Registered with Openverse");

        Ok(response.data)
    }

    /// Ask the server to fetch a new Openverse access token with its
    /// configured credentials.
    ///
    /// Returns the token payload Openverse answered with.
    #[instrument(skip(self))]
    pub async fn openverse_token(&self) -> Result<JsonValue> {
        let response: OpenverseResponse =
            self.client.send(ApiRequest::post(["get_openverse_token"])).await?;
        Ok(response.data)
    }

    /// Log out.
    ///
    /// The server keeps no session, so this only forgets the local one. It is
    /// a no-op when nobody is logged in.
    pub async fn logout(&self) -> Result<()> {
        self.client.session_store().logout().await?;
        Ok(())
    }
}

/// The answer of the server to a successful login.
#[derive(Clone, Deserialize)]
#[serde(try_from = "RawLoginResponse")]
pub struct LoginResponse {
    /// The profile of the user that logged in.
    pub user: UserProfile,

    /// The bearer token for protected requests.
    pub access_token: String,

    /// The refresh token, if the server issued one.
    pub refresh_token: Option<String>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Servers either send `{ user, accessToken, refreshToken }` or the older
/// `{ token, user }` where `user` is only the username. `accessToken` wins if
/// both tokens are present.
#[derive(Deserialize)]
struct RawLoginResponse {
    #[serde(default, rename = "accessToken", alias = "access_token")]
    access_token: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default, alias = "refreshToken")]
    refresh_token: Option<String>,
    user: RawLoginUser,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLoginUser {
    Username(String),
    Profile(UserProfile),
}

impl TryFrom<RawLoginResponse> for LoginResponse {
    type Error = &'static str;

    fn try_from(raw: RawLoginResponse) -> Result<Self, Self::Error> {
        let access_token = raw.access_token.or(raw.token).ok_or("missing field `accessToken`")?;

        let user = match raw.user {
            RawLoginUser::Username(username) => UserProfile::new(username),
            RawLoginUser::Profile(profile) => profile,
        };

        Ok(Self { user, access_token, refresh_token: raw.refresh_token })
    }
}
