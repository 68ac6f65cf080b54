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

use async_trait::async_trait;

use super::StoreError;

/// Super trait that is used for our store traits, this trait will differ if
/// it's used on WASM. WASM targets will not require `Send` and `Sync` to have
/// implemented, while other targets will.
#[cfg(not(target_arch = "wasm32"))]
pub trait AsyncTraitDeps: fmt::Debug + Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: fmt::Debug + Send + Sync> AsyncTraitDeps for T {}

/// Super trait that is used for our store traits, this trait will differ if
/// it's used on WASM. WASM targets will not require `Send` and `Sync` to have
/// implemented, while other targets will.
#[cfg(target_arch = "wasm32")]
pub trait AsyncTraitDeps: fmt::Debug {}
#[cfg(target_arch = "wasm32")]
impl<T: fmt::Debug> AsyncTraitDeps for T {}

/// An abstract key-value store trait that can be used to implement different
/// persisted storages for the session.
///
/// Keys and values are plain strings. A store is scoped to a single origin,
/// so every key it holds belongs to the same API server.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: AsyncTraitDeps {
    /// The error type used by this store.
    type Error: fmt::Debug + Into<StoreError>;

    /// Get the value stored under the given key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to fetch the value for.
    async fn get_value(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Put a value into the store, replacing any previous value.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to identify the value in the store.
    ///
    /// * `value` - The value to insert.
    async fn set_value(&self, key: &str, value: String) -> Result<(), Self::Error>;

    /// Remove the value stored under the given key.
    ///
    /// Removing a key that doesn't exist is not an error.
    async fn remove_value(&self, key: &str) -> Result<(), Self::Error>;

    /// Remove every key of the store, including the ones this crate doesn't
    /// own.
    async fn clear(&self) -> Result<(), Self::Error>;

    /// Get all the keys currently in the store, in no particular order.
    async fn keys(&self) -> Result<Vec<String>, Self::Error>;
}

#[repr(transparent)]
struct EraseKeyValueStoreError<T>(T);

impl<T: fmt::Debug> fmt::Debug for EraseKeyValueStoreError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: KeyValueStore> KeyValueStore for EraseKeyValueStoreError<T> {
    type Error = StoreError;

    async fn get_value(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.0.get_value(key).await.map_err(Into::into)
    }

    async fn set_value(&self, key: &str, value: String) -> Result<(), Self::Error> {
        self.0.set_value(key, value).await.map_err(Into::into)
    }

    async fn remove_value(&self, key: &str) -> Result<(), Self::Error> {
        self.0.remove_value(key).await.map_err(Into::into)
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        self.0.clear().await.map_err(Into::into)
    }

    async fn keys(&self) -> Result<Vec<String>, Self::Error> {
        self.0.keys().await.map_err(Into::into)
    }
}

/// A type-erased [`KeyValueStore`].
pub type DynKeyValueStore = dyn KeyValueStore<Error = StoreError>;

/// A type that can be type-erased into `Arc<DynKeyValueStore>`.
///
/// This trait is not meant to be implemented directly outside
/// `media-client-base`, but it is automatically implemented for everything
/// that implements `KeyValueStore`.
pub trait IntoKeyValueStore {
    #[doc(hidden)]
    fn into_key_value_store(self) -> Arc<DynKeyValueStore>;
}

impl<T> IntoKeyValueStore for T
where
    T: KeyValueStore + Sized + 'static,
{
    fn into_key_value_store(self) -> Arc<DynKeyValueStore> {
        Arc::new(EraseKeyValueStoreError(self))
    }
}

impl IntoKeyValueStore for Arc<DynKeyValueStore> {
    fn into_key_value_store(self) -> Arc<DynKeyValueStore> {
        self
    }
}

/// The keys the session owns in a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDataKey {
    /// The raw bearer token.
    AccessToken,

    /// The raw refresh token.
    RefreshToken,

    /// The JSON-serialized user profile.
    User,
}

impl SessionDataKey {
    /// Key to use for the [`AccessToken`][Self::AccessToken] variant.
    pub const ACCESS_TOKEN: &'static str = "accessToken";
    /// Key to use for the [`RefreshToken`][Self::RefreshToken] variant.
    pub const REFRESH_TOKEN: &'static str = "refreshToken";
    /// Key to use for the [`User`][Self::User] variant.
    pub const USER: &'static str = "user";

    /// Every key owned by the session, in the order they are written.
    pub const ALL: [SessionDataKey; 3] = [Self::User, Self::AccessToken, Self::RefreshToken];

    /// The name of this key in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => Self::ACCESS_TOKEN,
            Self::RefreshToken => Self::REFRESH_TOKEN,
            Self::User => Self::USER,
        }
    }
}

impl fmt::Display for SessionDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
