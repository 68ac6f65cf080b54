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

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations, missing_docs)]

pub use media_client_base::{
    store, Access, AccessGate, LogoutPolicy, Session, SessionChange, SessionState, SessionStore,
    SessionStoreBuilder, StoreError, UserProfile,
};
pub use reqwest;
pub use url;

pub mod authentication;
mod client;
pub mod config;
pub mod contacts;
mod error;
pub mod history;
mod http_client;
pub mod media;

pub use self::{
    client::{Client, ClientBuildError, ClientBuilder},
    error::{Error, HttpError, HttpResult, Result},
};

#[cfg(test)]
media_client_test::init_tracing_for_tests!();
