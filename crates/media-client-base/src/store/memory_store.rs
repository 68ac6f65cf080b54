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

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use super::{KeyValueStore, Result, StoreError};

/// In-memory, non-persistent implementation of the `KeyValueStore`.
///
/// Default if no other is configured at startup. Clones share the same data,
/// which lets tests simulate a restart by building a second session on top of
/// a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty `MemoryStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `MemoryStore` already holding the given entries.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values: Arc::new(RwLock::new(values)) }
    }

    /// The number of entries currently stored.
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for MemoryStore {
    type Error = StoreError;

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: String) -> Result<()> {
        self.values.write().unwrap().insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<()> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.values.write().unwrap().clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.read().unwrap().keys().cloned().collect())
    }
}
