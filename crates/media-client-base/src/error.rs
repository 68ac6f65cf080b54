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

//! Error conditions.

use thiserror::Error;

use crate::store::StoreError;

/// Result type of the media-client-base crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Internal representation of errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The key-value store backing the session failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// There was a [`serde_json`] serialization error while persisting the
    /// session.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
