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

//! User sessions.

use std::{
    fmt,
    sync::{Arc, RwLock as StdRwLock},
};

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, instrument, warn};

use crate::{
    store::{DynKeyValueStore, IntoKeyValueStore, SessionDataKey},
    Result,
};

/// The literal a persisted `user` entry holds when it was written without a
/// value. It means "no user", not "corrupt user".
const UNDEFINED_USER: &str = "undefined";

/// The profile of the logged-in user.
///
/// Only the `username` is required, it's what the search history endpoints
/// are keyed on. Any other field the server sent is kept in `extra` and
/// written back untouched. A `username` entry of `extra` is never written,
/// the field always wins.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    /// The name the user logs in with.
    pub username: String,

    /// The other fields of the profile.
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl UserProfile {
    /// Create a profile with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), extra: JsonMap::new() }
    }
}

impl Serialize for UserProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra: Vec<_> = self.extra.iter().filter(|(key, _)| *key != "username").collect();

        let mut map = serializer.serialize_map(Some(extra.len() + 1))?;
        map.serialize_entry("username", &self.username)?;
        for (key, value) in extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A snapshot of the session: who is logged in and with which tokens.
///
/// The three fields are independent, a corrupt store can for example leave an
/// access token without a user.
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    /// The logged-in user.
    pub user: Option<UserProfile>,

    /// The bearer token to attach to protected requests.
    pub access_token: Option<String>,

    /// The refresh token the server issued alongside the access token.
    ///
    /// It is persisted but never used to refresh the access token.
    pub refresh_token: Option<String>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Session {
    fn state(&self) -> SessionState {
        if self.user.is_some() && self.access_token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// The authentication status derived from a [`SessionStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted session hasn't been read yet, whether the user is logged
    /// in is unknown.
    Hydrating,

    /// Nobody is logged in.
    Anonymous,

    /// A user and an access token are both set.
    Authenticated,
}

/// A change of the session, broadcast to the subscribers of a
/// [`SessionStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    /// The persisted session has been read, the store is no longer loading.
    Hydrated,

    /// A new session replaced the previous one.
    LoggedIn,

    /// The session has been cleared.
    LoggedOut,
}

/// What [`SessionStore::logout()`] removes from the key-value store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoutPolicy {
    /// Only remove the keys owned by the session, see [`SessionDataKey`].
    #[default]
    SessionKeys,

    /// Remove every key of the store, including data other components put
    /// there.
    ClearAll,
}

#[derive(Debug)]
struct SessionData {
    session: Session,
    loading: bool,
}

struct SessionStoreInner {
    store: Arc<DynKeyValueStore>,
    data: StdRwLock<SessionData>,
    /// Serializes hydration, login and logout.
    mutation_lock: Mutex<()>,
    logout_policy: LogoutPolicy,
    change_sender: broadcast::Sender<SessionChange>,
}

/// The single source of truth for who is logged in, backed by a
/// [`KeyValueStore`](crate::KeyValueStore) so the session survives restarts.
///
/// A `SessionStore` is created in the [`SessionState::Hydrating`] state and
/// reads the persisted session once with [`hydrate()`](Self::hydrate). It is
/// cheap to clone, all clones share the same session.
///
/// Reads are synchronous and always reflect the last mutation. Mutations are
/// serialized, every one of them replaces or clears the whole session.
///
/// # Examples
///
/// ```
/// # futures_executor::block_on(async {
/// use media_client_base::{store::MemoryStore, SessionStore, UserProfile};
///
/// let session = SessionStore::open(MemoryStore::new()).await?;
/// assert!(!session.loading());
///
/// session.login(UserProfile::new("alice"), "tok1", Some("ref1".to_owned())).await?;
/// assert_eq!(session.access_token().as_deref(), Some("tok1"));
///
/// session.logout().await?;
/// assert_eq!(session.user(), None);
/// # anyhow::Ok(()) });
/// ```
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.data.read().unwrap();
        f.debug_struct("SessionStore")
            .field("session", &data.session)
            .field("loading", &data.loading)
            .field("logout_policy", &self.inner.logout_policy)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a new, not yet hydrated, session store on top of the given
    /// key-value store.
    pub fn new(store: impl IntoKeyValueStore) -> Self {
        Self::builder(store).build()
    }

    /// Create a session store and hydrate it from the given key-value store.
    pub async fn open(store: impl IntoKeyValueStore) -> Result<Self> {
        Self::builder(store).open().await
    }

    /// Create a [`SessionStoreBuilder`] to configure the session store.
    pub fn builder(store: impl IntoKeyValueStore) -> SessionStoreBuilder {
        SessionStoreBuilder { store: store.into_key_value_store(), logout_policy: Default::default() }
    }

    /// Read the persisted session into memory.
    ///
    /// This only does something the first time it's called. A persisted user
    /// that isn't a valid profile is removed from the store and ignored.
    ///
    /// Once this returns the store is no longer loading, even if reading the
    /// key-value store failed, in which case the error is returned and the
    /// session stays empty.
    #[instrument(skip_all)]
    pub async fn hydrate(&self) -> Result<()> {
        let _guard = self.inner.mutation_lock.lock().await;

        if !self.loading() {
            debug!("The session was already hydrated");
            return Ok(());
        }

        let result = self.read_persisted_session().await;

        {
            let mut data = self.inner.data.write().unwrap();
            if let Ok(session) = &result {
                data.session = session.clone();
            }
            data.loading = false;
        }

        _ = self.inner.change_sender.send(SessionChange::Hydrated);

        let session = result?;
        debug!(state = ?session.state(), "Hydrated the session");

        Ok(())
    }

    async fn read_persisted_session(&self) -> Result<Session> {
        let store = &self.inner.store;

        let access_token =
            store.get_value(SessionDataKey::ACCESS_TOKEN).await?.filter(|t| !t.is_empty());
        let refresh_token =
            store.get_value(SessionDataKey::REFRESH_TOKEN).await?.filter(|t| !t.is_empty());

        let user = match store.get_value(SessionDataKey::USER).await? {
            Some(raw) if !raw.is_empty() && raw != UNDEFINED_USER => {
                match serde_json::from_str::<UserProfile>(&raw) {
                    Ok(user) => Some(user),
                    Err(error) => {
                        warn!("Discarding the persisted user, it isn't a valid profile: {error}");
                        store.remove_value(SessionDataKey::USER).await?;
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(Session { user, access_token, refresh_token })
    }

    /// Replace the session with a new one and persist it.
    ///
    /// Nothing is validated, the values are trusted as they are. The new
    /// session is visible as soon as this is called, if persisting it fails
    /// the error is returned but the in-memory session is kept.
    ///
    /// Logging in before the store was hydrated ends the loading state, the
    /// persisted session is then never read.
    ///
    /// # Arguments
    ///
    /// * `user` - The profile of the user that logged in.
    ///
    /// * `access_token` - The bearer token for protected requests.
    ///
    /// * `refresh_token` - The refresh token, if the server issued one. A
    ///   missing one removes any previously persisted refresh token.
    #[instrument(skip_all, fields(username = %user.username))]
    pub async fn login(
        &self,
        user: UserProfile,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
    ) -> Result<()> {
        let _guard = self.inner.mutation_lock.lock().await;

        let session =
            Session { user: Some(user), access_token: Some(access_token.into()), refresh_token };

        self.replace_session(session.clone());
        _ = self.inner.change_sender.send(SessionChange::LoggedIn);

        self.persist_session(&session).await?;
        debug!("Logged in");

        Ok(())
    }

    /// Swap the in-memory session. This settles the loading state, a
    /// mutation supersedes whatever is persisted.
    fn replace_session(&self, session: Session) {
        let mut data = self.inner.data.write().unwrap();
        if data.loading {
            debug!("Mutating the session before it was hydrated, skipping hydration");
            data.loading = false;
        }
        data.session = session;
    }

    async fn persist_session(&self, session: &Session) -> Result<()> {
        let store = &self.inner.store;

        for key in SessionDataKey::ALL {
            let value = match key {
                SessionDataKey::User => {
                    session.user.as_ref().map(serde_json::to_string).transpose()?
                }
                SessionDataKey::AccessToken => session.access_token.clone(),
                SessionDataKey::RefreshToken => session.refresh_token.clone(),
            };

            match value {
                Some(value) => store.set_value(key.as_str(), value).await?,
                None => store.remove_value(key.as_str()).await?,
            }
        }

        Ok(())
    }

    /// Clear the session, in memory and in the key-value store.
    ///
    /// What is removed from the key-value store depends on the
    /// [`LogoutPolicy`]. Logging out twice is the same as logging out once.
    ///
    /// Like [`login()`](Self::login), this ends the loading state of a store
    /// that wasn't hydrated yet.
    #[instrument(skip_all)]
    pub async fn logout(&self) -> Result<()> {
        let _guard = self.inner.mutation_lock.lock().await;

        self.replace_session(Session::default());
        _ = self.inner.change_sender.send(SessionChange::LoggedOut);

        let store = &self.inner.store;
        match self.inner.logout_policy {
            LogoutPolicy::SessionKeys => {
                for key in SessionDataKey::ALL {
                    store.remove_value(key.as_str()).await?;
                }
            }
            LogoutPolicy::ClearAll => store.clear().await?,
        }

        debug!("Logged out");

        Ok(())
    }

    /// Whether the persisted session hasn't been read yet.
    ///
    /// While this is `true` the authentication status is unknown and must not
    /// be used to decide anything.
    pub fn loading(&self) -> bool {
        self.inner.data.read().unwrap().loading
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.data.read().unwrap().session.user.clone()
    }

    /// The current access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner.data.read().unwrap().session.access_token.clone()
    }

    /// The current refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.data.read().unwrap().session.refresh_token.clone()
    }

    /// A snapshot of the whole session.
    pub fn session(&self) -> Session {
        self.inner.data.read().unwrap().session.clone()
    }

    /// The current authentication status.
    pub fn state(&self) -> SessionState {
        let data = self.inner.data.read().unwrap();
        if data.loading {
            SessionState::Hydrating
        } else {
            data.session.state()
        }
    }

    /// The policy applied when logging out.
    pub fn logout_policy(&self) -> LogoutPolicy {
        self.inner.logout_policy
    }

    /// The key-value store the session is persisted in.
    pub fn key_value_store(&self) -> &Arc<DynKeyValueStore> {
        &self.inner.store
    }

    /// Subscribe to the changes of this session.
    ///
    /// Only changes happening after this call are received.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.inner.change_sender.subscribe()
    }
}

/// Builder for [`SessionStore`].
#[derive(Debug)]
pub struct SessionStoreBuilder {
    store: Arc<DynKeyValueStore>,
    logout_policy: LogoutPolicy,
}

impl SessionStoreBuilder {
    /// Set what logging out removes from the key-value store.
    ///
    /// Defaults to [`LogoutPolicy::SessionKeys`].
    #[must_use]
    pub fn logout_policy(mut self, policy: LogoutPolicy) -> Self {
        self.logout_policy = policy;
        self
    }

    /// Build the session store, without hydrating it.
    pub fn build(self) -> SessionStore {
        let (change_sender, _) = broadcast::channel(16);

        SessionStore {
            inner: Arc::new(SessionStoreInner {
                store: self.store,
                data: StdRwLock::new(SessionData { session: Session::default(), loading: true }),
                mutation_lock: Mutex::new(()),
                logout_policy: self.logout_policy,
                change_sender,
            }),
        }
    }

    /// Build the session store and hydrate it.
    pub async fn open(self) -> Result<SessionStore> {
        let session = self.build();
        session.hydrate().await?;
        Ok(session)
    }
}
