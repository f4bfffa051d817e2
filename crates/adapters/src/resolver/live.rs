// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live resolver: queries the directory per lookup.

use super::{EmployeeResolver, ResolveError, ResolvedEmployee};
use crate::directory::DirectoryAdapter;
use async_trait::async_trait;
use tally_core::{AttributeId, EmployeeId, OwnerRef};

#[derive(Clone)]
pub struct LiveResolver<D: DirectoryAdapter> {
    directory: D,
    username_attr: AttributeId,
}

impl<D: DirectoryAdapter> LiveResolver<D> {
    pub fn new(directory: D, username_attr: AttributeId) -> Self {
        Self {
            directory,
            username_attr,
        }
    }
}

#[async_trait]
impl<D: DirectoryAdapter> EmployeeResolver for LiveResolver<D> {
    async fn resolve(&self, id: &EmployeeId) -> Result<Vec<ResolvedEmployee>, ResolveError> {
        let records = self.directory.find_employee_by_business_key(id).await?;
        tracing::debug!(employee_id = %id, matches = records.len(), "live employee lookup");
        Ok(records
            .into_iter()
            .map(|record| ResolvedEmployee {
                employee_id: id.clone(),
                owner_ref: OwnerRef::new(record.object_key.as_str()),
                username: record
                    .attribute(self.username_attr)
                    .and_then(|a| a.first_value().map(str::to_string)),
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
