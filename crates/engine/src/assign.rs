// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Guarded assignment: set an asset's ownership attribute only when it is
//! currently unset. First assignment wins; a later call with a different
//! owner is a no-op, not an overwrite.

use crate::engine::Engine;
use serde::Serialize;
use tally_adapters::{
    DirectoryAdapter, DirectoryError, DocStoreAdapter, EmployeeResolver, ResolveError,
    ResolvedEmployee,
};
use tally_core::{EmployeeId, ObjectKey, OwnerRef, Ownership};
use thiserror::Error;

/// Terminal outcome of a successful assignment invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssignOutcome {
    /// The ownership attribute was unset and is now `owner_ref`.
    Confirmed {
        object_key: ObjectKey,
        owner_ref: OwnerRef,
    },
    /// The attribute already carried a value; nothing was written.
    AlreadyAssigned { current: String },
}

/// Failure taxonomy of the assignment workflow. `AlreadyAssigned` is not
/// here: skipping is a defined outcome, not an error.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),
    /// More than one directory match for the business key. Never resolved
    /// by taking the first.
    #[error("ambiguous employee {id}: {count} directory matches")]
    AmbiguousEmployee { id: EmployeeId, count: usize },
    /// The directory rejected the conditional write.
    #[error("assignment write rejected: status {status}")]
    WriteFailed { status: u16, body: String },
    /// Network, parse, or upstream failure on the resolve/read steps.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl<D, W, R> Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    /// Assign `object_key` to the employee with business key `employee_id`
    /// if, and only if, its ownership attribute is currently unset.
    ///
    /// Issues at most one write per invocation and never retries. Known
    /// limitation: two concurrent invocations for the same asset can both
    /// observe "unset" and both write; the directory update API exposes no
    /// version token to close that window.
    pub async fn assign(
        &self,
        object_key: &ObjectKey,
        employee_id: &EmployeeId,
    ) -> Result<AssignOutcome, AssignError> {
        let owner = self.resolve_single(employee_id).await?;

        let attributes = self
            .directory
            .get_attributes(object_key)
            .await
            .map_err(|e| AssignError::Transport(e.to_string()))?;
        let raw = attributes
            .iter()
            .find(|a| a.attribute_id == self.schema.ownership_attr)
            .and_then(|a| a.first_value());
        let ownership = Ownership::from_raw(raw);

        match ownership {
            Ownership::Unset => {
                tracing::info!(
                    object_key = %object_key,
                    owner_ref = %owner.owner_ref,
                    "ownership unset, writing assignment"
                );
                self.directory
                    .set_attribute(
                        object_key,
                        self.schema.ownership_attr,
                        owner.owner_ref.as_str(),
                    )
                    .await
                    .map_err(write_error)?;
                Ok(AssignOutcome::Confirmed {
                    object_key: object_key.clone(),
                    owner_ref: owner.owner_ref,
                })
            }
            Ownership::Assigned(current) => {
                tracing::warn!(
                    object_key = %object_key,
                    %current,
                    "already assigned, skipping write"
                );
                Ok(AssignOutcome::AlreadyAssigned { current })
            }
            Ownership::Unknown(raw) => {
                // Cannot be proven unset; refuse to overwrite.
                tracing::warn!(
                    object_key = %object_key,
                    raw = ?raw,
                    "ownership value unrecognized, skipping write"
                );
                Ok(AssignOutcome::AlreadyAssigned { current: raw })
            }
        }
    }

    /// Resolve a business key to exactly one employee.
    pub(crate) async fn resolve_single(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<ResolvedEmployee, AssignError> {
        let mut matches = self
            .resolver
            .resolve(employee_id)
            .await
            .map_err(resolve_error)?;
        match matches.len() {
            0 => Err(AssignError::UnknownEmployee(employee_id.clone())),
            1 => Ok(matches.remove(0)),
            count => Err(AssignError::AmbiguousEmployee {
                id: employee_id.clone(),
                count,
            }),
        }
    }
}

fn resolve_error(err: ResolveError) -> AssignError {
    AssignError::Transport(err.to_string())
}

fn write_error(err: DirectoryError) -> AssignError {
    match err {
        DirectoryError::Status { status, body } => AssignError::WriteFailed { status, body },
        other => AssignError::Transport(other.to_string()),
    }
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
