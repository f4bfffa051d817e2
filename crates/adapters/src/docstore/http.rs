// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`DocStoreAdapter`] against a Confluence-style
//! content API: `GET /content?spaceKey&title&expand=version` for lookup,
//! `POST /content` for create, `PUT /content/{id}` with version+1 for
//! update.

use super::{DocStoreAdapter, DocStoreError, PageHandle};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tally_core::{PageId, WikiConfig};

#[derive(Clone)]
pub struct HttpDocStoreAdapter {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl HttpDocStoreAdapter {
    pub fn new(wiki: &WikiConfig, email: &str, api_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: wiki.base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
            api_token: api_token.to_string(),
        }
    }
}

#[async_trait]
impl DocStoreAdapter for HttpDocStoreAdapter {
    async fn find_page(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Option<PageHandle>, DocStoreError> {
        tracing::debug!(space_key, title, "looking up wiki page");
        let response = self
            .client
            .get(format!("{}/content", self.base_url))
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&[
                ("spaceKey", space_key),
                ("title", title),
                ("expand", "version"),
            ])
            .send()
            .await
            .map_err(transport)?;
        let page: ContentSearch = decode(check(response).await?).await?;
        Ok(page.results.into_iter().next().map(|c| PageHandle {
            id: PageId::new(c.id),
            version: c.version.map(|v| v.number).unwrap_or(1),
        }))
    }

    async fn create_page(
        &self,
        space_key: &str,
        title: &str,
        body: &str,
    ) -> Result<PageId, DocStoreError> {
        tracing::info!(space_key, title, "creating wiki page");
        let request = ContentWrite::create(space_key, title, body);
        let response = self
            .client
            .post(format!("{}/content", self.base_url))
            .basic_auth(&self.email, Some(&self.api_token))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        let created: ContentRef = decode(check(response).await?).await?;
        Ok(PageId::new(created.id))
    }

    async fn update_page(
        &self,
        page: &PageHandle,
        title: &str,
        body: &str,
    ) -> Result<(), DocStoreError> {
        tracing::info!(page_id = %page.id, version = page.version, "updating wiki page");
        let request = ContentWrite::update(title, body, page.version + 1);
        let response = self
            .client
            .put(format!("{}/content/{}", self.base_url, page.id))
            .basic_auth(&self.email, Some(&self.api_token))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> DocStoreError {
    DocStoreError::Transport(err.to_string())
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, DocStoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(DocStoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DocStoreError> {
    response
        .json::<T>()
        .await
        .map_err(|e| DocStoreError::Parse(e.to_string()))
}

// --- wire types ---

#[derive(Deserialize)]
struct ContentSearch {
    #[serde(default)]
    results: Vec<ContentHit>,
}

#[derive(Deserialize)]
struct ContentHit {
    id: String,
    #[serde(default)]
    version: Option<ContentVersion>,
}

#[derive(Deserialize)]
struct ContentVersion {
    number: u32,
}

#[derive(Deserialize)]
struct ContentRef {
    id: String,
}

#[derive(Serialize)]
struct ContentWrite {
    #[serde(rename = "type")]
    kind: &'static str,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    space: Option<SpaceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<VersionWrite>,
    body: BodyWrite,
}

impl ContentWrite {
    fn create(space_key: &str, title: &str, body: &str) -> Self {
        Self {
            kind: "page",
            title: title.to_string(),
            space: Some(SpaceRef {
                key: space_key.to_string(),
            }),
            version: None,
            body: BodyWrite::storage(body),
        }
    }

    fn update(title: &str, body: &str, version: u32) -> Self {
        Self {
            kind: "page",
            title: title.to_string(),
            space: None,
            version: Some(VersionWrite { number: version }),
            body: BodyWrite::storage(body),
        }
    }
}

#[derive(Serialize)]
struct SpaceRef {
    key: String,
}

#[derive(Serialize)]
struct VersionWrite {
    number: u32,
}

#[derive(Serialize)]
struct BodyWrite {
    storage: StorageWrite,
}

impl BodyWrite {
    fn storage(value: &str) -> Self {
        Self {
            storage: StorageWrite {
                value: format!("<pre>{}</pre>", escape_html(value)),
                representation: "storage",
            },
        }
    }
}

#[derive(Serialize)]
struct StorageWrite {
    value: String,
    representation: &'static str,
}

/// Minimal escaping for embedding JSON inside a storage-format `<pre>`.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
