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
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, field::debug, instrument, Span};
use url::Url;

use crate::{config::RequestConfig, error::HttpError};

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A request to one endpoint of the API, relative to the base URL of the
/// client.
pub(crate) struct ApiRequest<'a, B = ()> {
    method: Method,
    path: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<&'a B>,
}

impl<'a> ApiRequest<'a> {
    fn new<I, S>(method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { method, path: path.into_iter().map(Into::into).collect(), query: Vec::new(), body: None }
    }

    pub(crate) fn get<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, path)
    }

    pub(crate) fn patch<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PATCH, path)
    }

    pub(crate) fn delete<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body to the request.
    pub(crate) fn json<B: Serialize>(self, body: &'a B) -> ApiRequest<'a, B> {
        ApiRequest { method: self.method, path: self.path, query: self.query, body: Some(body) }
    }
}

impl<B> ApiRequest<'_, B> {
    /// Add a query parameter.
    pub(crate) fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Add a query parameter if it has a value.
    pub(crate) fn query_opt(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// The full URL of the endpoint, with the path segments percent-encoded.
    pub(crate) fn url(&self, base_url: &Url) -> Result<Url, HttpError> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidBaseUrl)?
            .pop_if_empty()
            .extend(&self.path);
        Ok(url)
    }
}

// The query can contain the username, keep it out of the logs.
impl<B> fmt::Debug for ApiRequest<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
    pub(crate) inner: reqwest::Client,
    pub(crate) request_config: RequestConfig,
    next_request_id: Arc<AtomicU64>,
}

impl HttpClient {
    pub(crate) fn new(inner: reqwest::Client, request_config: RequestConfig) -> Self {
        HttpClient { inner, request_config, next_request_id: AtomicU64::new(0).into() }
    }

    fn get_request_id(&self) -> String {
        let request_id = self.next_request_id.fetch_add(1, Ordering::SeqCst);
        format!("REQ-{request_id}")
    }

    #[instrument(
        skip(self, request, base_url, access_token),
        fields(config, uri, method, request_id, status)
    )]
    pub(crate) async fn send<B, R>(
        &self,
        request: ApiRequest<'_, B>,
        base_url: &Url,
        access_token: Option<&str>,
    ) -> Result<R, HttpError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let config = self.request_config;
        let url = request.url(base_url)?;

        let request_id = self.get_request_id();
        let span = Span::current();
        span.record("config", debug(config))
            .record("request_id", request_id)
            .record("method", debug(&request.method))
            .record("uri", url.as_str());

        let mut builder = self.inner.request(request.method, url).timeout(config.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = request.body {
            builder = builder.json(body);
        }

        if let Some(access_token) = access_token {
            builder = builder.bearer_auth(access_token);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Error while sending request: {e:?}");
                return Err(e.into());
            }
        };

        let status = response.status();
        span.record("status", status.as_u16());

        if status.is_success() {
            debug!("Got response");
            Ok(response.json().await?)
        } else {
            let body = response.bytes().await?;
            let error = HttpError::from_response_body(status, &body);
            debug!("Got an error response: {error}");
            Err(error)
        }
    }
}
