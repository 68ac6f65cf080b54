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

//! Gating protected views on the session.

use crate::SessionStore;

/// The decision of an [`AccessGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// The session is still hydrating, render nothing and don't redirect.
    Pending,

    /// An access token is available, the protected view can be shown.
    Granted,

    /// Nobody is logged in, send the user to the login view.
    RedirectToLogin,
}

/// Decides whether a protected view may be shown.
///
/// Only the presence of an access token matters, its validity is for the
/// server to judge on the next protected request.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Check the given session.
    pub fn check(&self, session: &SessionStore) -> Access {
        if session.loading() {
            Access::Pending
        } else if session.access_token().is_some() {
            Access::Granted
        } else {
            Access::RedirectToLogin
        }
    }
}
