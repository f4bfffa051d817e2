// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake employee resolver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EmployeeResolver, ResolveError, ResolvedEmployee};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tally_core::{EmployeeId, OwnerRef};

struct FakeResolverState {
    entries: HashMap<EmployeeId, Vec<ResolvedEmployee>>,
    failure: Option<String>,
    lookups: Vec<EmployeeId>,
}

/// Fake resolver: seeded matches plus failure injection.
#[derive(Clone)]
pub struct FakeResolver {
    inner: Arc<Mutex<FakeResolverState>>,
}

impl Default for FakeResolver {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeResolverState {
                entries: HashMap::new(),
                failure: None,
                lookups: Vec::new(),
            })),
        }
    }
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a single unambiguous match.
    pub fn seed(&self, id: impl Into<EmployeeId>, owner_ref: impl Into<OwnerRef>) {
        let id = id.into();
        self.inner.lock().entries.entry(id.clone()).or_default().push(
            ResolvedEmployee {
                employee_id: id,
                owner_ref: owner_ref.into(),
                username: None,
            },
        );
    }

    pub fn fail_with(&self, message: &str) {
        self.inner.lock().failure = Some(message.to_string());
    }

    pub fn lookups(&self) -> Vec<EmployeeId> {
        self.inner.lock().lookups.clone()
    }
}

#[async_trait]
impl EmployeeResolver for FakeResolver {
    async fn resolve(&self, id: &EmployeeId) -> Result<Vec<ResolvedEmployee>, ResolveError> {
        let mut state = self.inner.lock();
        state.lookups.push(id.clone());
        if let Some(message) = &state.failure {
            return Err(ResolveError::Cache(message.clone()));
        }
        Ok(state.entries.get(id).cloned().unwrap_or_default())
    }
}
