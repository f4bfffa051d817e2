// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Employee resolver capability.
//!
//! The assignment workflow needs the employee's system key, because the
//! ownership attribute stores system keys, not business keys. Historically
//! this lookup existed twice: against a live directory query and against a
//! local roster mirror file. Both are implementations of one capability,
//! selected by configuration.

mod cache;
mod live;

pub use cache::CacheResolver;
pub use live::LiveResolver;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeResolver;

use crate::directory::DirectoryError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tally_core::{EmployeeId, OwnerRef};
use thiserror::Error;

/// Errors from employee resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("roster cache unavailable: {0}")]
    Cache(String),
}

/// An employee match: business key plus the system key the directory
/// stores for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEmployee {
    #[serde(rename = "employeeId")]
    pub employee_id: EmployeeId,
    /// System key; this is the value written into ownership attributes.
    #[serde(rename = "objectKey")]
    pub owner_ref: OwnerRef,
    #[serde(default)]
    pub username: Option<String>,
}

/// Resolves an employee business key to directory matches.
///
/// Returns every match: callers treat zero as unknown and more than one as
/// ambiguous rather than silently taking the first.
#[async_trait]
pub trait EmployeeResolver: Clone + Send + Sync + 'static {
    async fn resolve(&self, id: &EmployeeId) -> Result<Vec<ResolvedEmployee>, ResolveError>;
}
