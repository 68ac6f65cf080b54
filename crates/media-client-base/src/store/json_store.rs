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
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::{debug, instrument};

use super::{KeyValueStore, Result, StoreError};

/// A `KeyValueStore` implementation that serializes all the entries as a
/// single JSON object and saves it to disk.
///
/// The whole file is rewritten on every change, through a temporary file that
/// is renamed over the previous one, so a crash never leaves a half-written
/// store behind. A change that couldn't be written isn't applied in memory
/// either.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store backed by the file at the given path.
    ///
    /// The parent directories are created if needed. A missing file is an
    /// empty store, it will only be created on the first write.
    #[instrument]
    pub async fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let values = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No store file yet, starting empty");
                BTreeMap::new()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, values: Mutex::new(values) })
    }

    /// The path of the file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_vec(values)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");

        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    type Error = StoreError;

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: String) -> Result<()> {
        let mut values = self.values.lock().await;

        let mut updated = values.clone();
        updated.insert(key.to_owned(), value);
        self.persist(&updated).await?;

        *values = updated;
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().await;
        if !values.contains_key(key) {
            return Ok(());
        }

        let mut updated = values.clone();
        updated.remove(key);
        self.persist(&updated).await?;

        *values = updated;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut values = self.values.lock().await;
        self.persist(&BTreeMap::new()).await?;
        values.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.lock().await.keys().cloned().collect())
    }
}
