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

//! Image and audio search.
//!
//! The server forwards these requests to the Openverse catalog, the results
//! are returned as the catalog ranked them.

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::instrument;

use crate::{http_client::ApiRequest, Client, Error, Result};

/// A high-level API to search the media catalog.
#[derive(Debug, Clone)]
pub struct Search {
    client: Client,
}

impl Search {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Search for images.
    ///
    /// Returns [`Error::EmptySearchQuery`] without contacting the server if
    /// the query is blank.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use url::Url;
    /// # use media_client::{media::ImageSearch, Client};
    /// # futures_executor::block_on(async {
    /// # let client = Client::new(Url::parse("http://localhost:5000")?).await?;
    /// let search = ImageSearch::new("owl").license("by").tags(["bird", "night"]);
    /// let response = client.search().images(search).await?;
    ///
    /// for image in response.results {
    ///     println!("{}: {:?}", image.id, image.title);
    /// }
    /// # anyhow::Ok(()) });
    /// ```
    #[instrument(skip(self))]
    pub async fn images(&self, search: ImageSearch) -> Result<SearchResponse> {
        let query = non_empty_query(&search.query)?;

        let request = ApiRequest::get(["search_images"])
            .query("q", query)
            .query("page", search.page)
            .query("page_size", search.page_size)
            .query_opt("license", join(&search.licenses))
            .query_opt("creator", search.creator)
            .query_opt("tags", join(&search.tags));

        Ok(self.client.send(request).await?)
    }

    /// Search for audio tracks.
    ///
    /// Returns [`Error::EmptySearchQuery`] without contacting the server if
    /// the query is blank.
    #[instrument(skip(self))]
    pub async fn audio(&self, search: AudioSearch) -> Result<SearchResponse> {
        let query = non_empty_query(&search.query)?;

        let request = ApiRequest::get(["search_audio"])
            .query("q", query)
            .query("page", search.page)
            .query("page_size", search.page_size)
            .query_opt("license", join(&search.licenses));

        Ok(self.client.send(request).await?)
    }

    /// Get everything the catalog knows about an image.
    #[instrument(skip(self))]
    pub async fn image_detail(&self, id: &str) -> Result<MediaItem> {
        Ok(self.client.send(ApiRequest::get(["image_detail", id])).await?)
    }

    /// Get everything the catalog knows about an audio track.
    #[instrument(skip(self))]
    pub async fn audio_detail(&self, id: &str) -> Result<MediaItem> {
        Ok(self.client.send(ApiRequest::get(["audio_detail", id])).await?)
    }

    /// Statistics about the image sources of the catalog.
    pub async fn image_stats(&self) -> Result<JsonValue> {
        Ok(self.client.send(ApiRequest::get(["image_stats"])).await?)
    }

    /// Statistics about the audio sources of the catalog.
    pub async fn audio_stats(&self) -> Result<JsonValue> {
        Ok(self.client.send(ApiRequest::get(["audio_stats"])).await?)
    }

    /// How much of its catalog quota the server has used.
    pub async fn rate_limit(&self) -> Result<JsonValue> {
        Ok(self.client.send(ApiRequest::get(["rate_limit"])).await?)
    }
}

fn non_empty_query(query: &str) -> Result<&str> {
    let query = query.trim();
    if query.is_empty() {
        Err(Error::EmptySearchQuery)
    } else {
        Ok(query)
    }
}

fn join(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(","))
}

/// The default number of results per page, as the server uses it.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parameters of an image search.
#[derive(Clone, Debug)]
pub struct ImageSearch {
    query: String,
    page: u32,
    page_size: u32,
    licenses: Vec<String>,
    creator: Option<String>,
    tags: Vec<String>,
}

impl ImageSearch {
    /// Search for images matching the given query, on the first page.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            licenses: Vec::new(),
            creator: None,
            tags: Vec::new(),
        }
    }

    /// Which page of results to get, starting at 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// How many results a page holds.
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Only return images under this license, can be called several times.
    #[must_use]
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.licenses.push(license.into());
        self
    }

    /// Only return images by this creator.
    #[must_use]
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Only return images with all of these tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// Parameters of an audio search.
#[derive(Clone, Debug)]
pub struct AudioSearch {
    query: String,
    page: u32,
    page_size: u32,
    licenses: Vec<String>,
}

impl AudioSearch {
    /// Search for audio tracks matching the given query, on the first page.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), page: 1, page_size: DEFAULT_PAGE_SIZE, licenses: Vec::new() }
    }

    /// Which page of results to get, starting at 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// How many results a page holds.
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Only return tracks under this license, can be called several times.
    #[must_use]
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.licenses.push(license.into());
        self
    }
}

/// One page of search results.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// How many results match the query in total.
    #[serde(default)]
    pub result_count: u64,

    /// How many pages of results there are.
    #[serde(default)]
    pub page_count: u32,

    /// How many results a page holds.
    #[serde(default)]
    pub page_size: u32,

    /// The number of this page.
    #[serde(default)]
    pub page: u32,

    /// The results on this page.
    #[serde(default)]
    pub results: Vec<MediaItem>,
}

/// An image or an audio track of the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MediaItem {
    /// The catalog identifier, used for the detail endpoints.
    pub id: String,

    /// The title, if the creator gave one.
    #[serde(default)]
    pub title: Option<String>,

    /// Where the media file can be downloaded.
    #[serde(default)]
    pub url: Option<String>,

    /// Who made it.
    #[serde(default)]
    pub creator: Option<String>,

    /// The short name of the license, like `by` or `cc0`.
    #[serde(default)]
    pub license: Option<String>,

    /// A smaller preview of the media.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Every other field the catalog sent.
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}
