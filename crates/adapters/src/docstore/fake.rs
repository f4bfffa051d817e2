// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake document store adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DocStoreAdapter, DocStoreError, PageHandle};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tally_core::PageId;

/// Recorded document store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocStoreCall {
    FindPage { space_key: String, title: String },
    CreatePage { space_key: String, title: String },
    UpdatePage { id: PageId, version: u32 },
}

#[derive(Clone)]
struct StoredPage {
    id: PageId,
    version: u32,
    body: String,
}

struct FakeDocStoreState {
    // keyed by (space, title)
    pages: HashMap<(String, String), StoredPage>,
    calls: Vec<DocStoreCall>,
    transport_failure: Option<String>,
    next_id: u64,
}

/// Fake document store for testing: in-memory pages with version counters.
#[derive(Clone)]
pub struct FakeDocStoreAdapter {
    inner: Arc<Mutex<FakeDocStoreState>>,
}

impl Default for FakeDocStoreAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeDocStoreState {
                pages: HashMap::new(),
                calls: Vec::new(),
                transport_failure: None,
                next_id: 1000,
            })),
        }
    }
}

impl FakeDocStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_transport(&self, message: &str) {
        self.inner.lock().transport_failure = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<DocStoreCall> {
        self.inner.lock().calls.clone()
    }

    pub fn page_body(&self, space_key: &str, title: &str) -> Option<String> {
        self.inner
            .lock()
            .pages
            .get(&(space_key.to_string(), title.to_string()))
            .map(|p| p.body.clone())
    }

    pub fn page_version(&self, space_key: &str, title: &str) -> Option<u32> {
        self.inner
            .lock()
            .pages
            .get(&(space_key.to_string(), title.to_string()))
            .map(|p| p.version)
    }

    fn check_transport(state: &FakeDocStoreState) -> Result<(), DocStoreError> {
        if let Some(message) = &state.transport_failure {
            return Err(DocStoreError::Transport(message.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocStoreAdapter for FakeDocStoreAdapter {
    async fn find_page(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Option<PageHandle>, DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::FindPage {
            space_key: space_key.to_string(),
            title: title.to_string(),
        });
        Self::check_transport(&state)?;
        Ok(state
            .pages
            .get(&(space_key.to_string(), title.to_string()))
            .map(|p| PageHandle {
                id: p.id.clone(),
                version: p.version,
            }))
    }

    async fn create_page(
        &self,
        space_key: &str,
        title: &str,
        body: &str,
    ) -> Result<PageId, DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::CreatePage {
            space_key: space_key.to_string(),
            title: title.to_string(),
        });
        Self::check_transport(&state)?;
        let key = (space_key.to_string(), title.to_string());
        if state.pages.contains_key(&key) {
            return Err(DocStoreError::Status {
                status: 400,
                body: format!("page '{title}' already exists in {space_key}"),
            });
        }
        let id = PageId::new(state.next_id.to_string());
        state.next_id += 1;
        state.pages.insert(
            key,
            StoredPage {
                id: id.clone(),
                version: 1,
                body: body.to_string(),
            },
        );
        Ok(id)
    }

    async fn update_page(
        &self,
        page: &PageHandle,
        title: &str,
        body: &str,
    ) -> Result<(), DocStoreError> {
        let mut state = self.inner.lock();
        state.calls.push(DocStoreCall::UpdatePage {
            id: page.id.clone(),
            version: page.version,
        });
        Self::check_transport(&state)?;
        let key = state
            .pages
            .iter()
            .find(|(_, p)| p.id == page.id)
            .map(|(k, _)| k.clone());
        let key = key.ok_or_else(|| DocStoreError::Status {
            status: 404,
            body: format!("page {} not found", page.id),
        })?;
        let stored = state.pages.get_mut(&key).ok_or_else(|| DocStoreError::Status {
            status: 404,
            body: format!("page {} not found", page.id),
        })?;
        if stored.version != page.version {
            return Err(DocStoreError::Status {
                status: 409,
                body: format!(
                    "version conflict: have {}, update based on {}",
                    stored.version, page.version
                ),
            });
        }
        stored.version += 1;
        stored.body = body.to_string();
        // an update may rename the page; keep the (space, title) index in step
        if key.1 != title {
            if let Some(moved) = state.pages.remove(&key) {
                state.pages.insert((key.0.clone(), title.to_string()), moved);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
