// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache resolver: reads a local JSON roster mirror.
//!
//! The mirror is a plain JSON array of `{employeeId, objectKey, username}`
//! records maintained out of band. It is re-read per lookup; the file is
//! small and staleness beats holding state across invocations.

use super::{EmployeeResolver, ResolveError, ResolvedEmployee};
use async_trait::async_trait;
use std::path::PathBuf;
use tally_core::EmployeeId;

#[derive(Clone)]
pub struct CacheResolver {
    path: PathBuf,
}

impl CacheResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EmployeeResolver for CacheResolver {
    async fn resolve(&self, id: &EmployeeId) -> Result<Vec<ResolvedEmployee>, ResolveError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ResolveError::Cache(format!("{}: {e}", self.path.display())))?;
        let roster: Vec<ResolvedEmployee> = serde_json::from_str(&content)
            .map_err(|e| ResolveError::Cache(format!("{}: {e}", self.path.display())))?;
        let matches: Vec<ResolvedEmployee> = roster
            .into_iter()
            .filter(|e| &e.employee_id == id)
            .collect();
        tracing::debug!(employee_id = %id, matches = matches.len(), "cache employee lookup");
        Ok(matches)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
