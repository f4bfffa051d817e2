// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Employee roster CRUD against the directory.

use crate::assign::AssignError;
use crate::engine::Engine;
use tally_adapters::{
    AttributeEntry, DirectoryAdapter, DirectoryError, DocStoreAdapter, EmployeeResolver,
    ObjectRecord,
};
use tally_core::{EmployeeId, ObjectKey};
use thiserror::Error;

/// Errors from roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("ambiguous employee {id}: {count} directory matches")]
    AmbiguousEmployee { id: EmployeeId, count: usize },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<AssignError> for RosterError {
    fn from(err: AssignError) -> Self {
        match err {
            AssignError::UnknownEmployee(id) => RosterError::UnknownEmployee(id),
            AssignError::AmbiguousEmployee { id, count } => {
                RosterError::AmbiguousEmployee { id, count }
            }
            AssignError::WriteFailed { status, body } => {
                RosterError::Directory(DirectoryError::Status { status, body })
            }
            AssignError::Transport(message) => RosterError::Transport(message),
        }
    }
}

impl<D, W, R> Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    /// Create an employee object carrying the username and business key.
    pub async fn add_employee(
        &self,
        employee_id: &EmployeeId,
        username: &str,
    ) -> Result<ObjectRecord, RosterError> {
        tracing::info!(employee_id = %employee_id, %username, "adding employee");
        let attributes = vec![
            AttributeEntry::single(self.schema.username_attr, username),
            AttributeEntry::single(self.schema.employee_id_attr, employee_id.as_str()),
        ];
        let record = self
            .directory
            .create_object(self.schema.employee_type_id, attributes)
            .await?;
        tracing::info!(object_key = %record.object_key, "employee created");
        Ok(record)
    }

    /// Delete the employee object for a business key. The same zero / one /
    /// many rules as assignment apply to the lookup.
    pub async fn remove_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<ObjectKey, RosterError> {
        let owner = self.resolve_single(employee_id).await?;
        let object_key = ObjectKey::new(owner.owner_ref.as_str());
        tracing::info!(employee_id = %employee_id, object_key = %object_key, "removing employee");
        self.directory.delete_object(&object_key).await?;
        Ok(object_key)
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
