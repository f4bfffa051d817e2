// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wiki document store adapter.

mod http;

pub use http::HttpDocStoreAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DocStoreCall, FakeDocStoreAdapter};

use async_trait::async_trait;
use tally_core::PageId;
use thiserror::Error;

/// Errors from document store operations.
#[derive(Debug, Error)]
pub enum DocStoreError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("document store returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed document store response: {0}")]
    Parse(String),
}

/// An existing page and its current version, as needed for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandle {
    pub id: PageId,
    pub version: u32,
}

/// Adapter for the wiki page store.
#[async_trait]
pub trait DocStoreAdapter: Clone + Send + Sync + 'static {
    /// Look up a page by space and title; `None` when it does not exist.
    async fn find_page(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Option<PageHandle>, DocStoreError>;

    /// Create a page with a storage-format body.
    async fn create_page(
        &self,
        space_key: &str,
        title: &str,
        body: &str,
    ) -> Result<PageId, DocStoreError>;

    /// Replace a page's body, bumping its version.
    async fn update_page(
        &self,
        page: &PageHandle,
        title: &str,
        body: &str,
    ) -> Result<(), DocStoreError>;
}
