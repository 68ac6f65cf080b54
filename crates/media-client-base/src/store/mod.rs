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

//! The persisted storage the session is hydrated from.
//!
//! A [`KeyValueStore`] is a flat, string-keyed map scoped to one origin: one
//! API server as seen by one client installation. It must survive restarts
//! to be useful, but the in-memory [`MemoryStore`] is provided for tests and
//! for clients that don't want to remember their users.
//!
//! Implementing the `KeyValueStore` trait, you can plug any storage backend
//! into the [`SessionStore`](crate::SessionStore).


#[cfg(feature = "json-store")]
mod json_store;
mod memory_store;
mod traits;

#[cfg(feature = "json-store")]
pub use self::json_store::JsonFileStore;
pub use self::{
    memory_store::MemoryStore,
    traits::{AsyncTraitDeps, DynKeyValueStore, IntoKeyValueStore, KeyValueStore, SessionDataKey},
};

/// Key-value store specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error happened in the underlying storage backend.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),

    /// An error happened while serializing or deserializing some data.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// An I/O error happened while reading or writing the backing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a new [`Backend`][Self::Backend] error.
    ///
    /// Shorthand for `StoreError::Backend(Box::new(error))`.
    #[inline]
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}

/// A `KeyValueStore` specific result type.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
