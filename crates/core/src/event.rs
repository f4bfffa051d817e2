// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound host events and the structured reply every handler returns.

use crate::id::{EmployeeId, ObjectKey};
use serde::{Deserialize, Serialize};

/// Event payload delivered by the host platform.
///
/// Field names are camelCase on the wire to match the host's payload shape
/// (`{employeeId, username}`, `{objectKey, employeeId}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InboundEvent {
    /// A new employee should be recorded in the directory.
    #[serde(rename_all = "camelCase")]
    EmployeeAdded {
        employee_id: EmployeeId,
        username: String,
    },
    /// An employee record should be removed from the directory.
    #[serde(rename_all = "camelCase")]
    EmployeeRemoved { employee_id: EmployeeId },
    /// An asset should be assigned to an employee if currently unowned.
    #[serde(rename_all = "camelCase")]
    AssetAssigned {
        object_key: ObjectKey,
        employee_id: EmployeeId,
    },
    /// The roster should be exported to the wiki page.
    RosterExport,
    /// Free-form message with no directory effect; logged and acknowledged.
    Message { message: String },
}

/// Outcome class of a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    /// The operation ran and applied its effect.
    Ok,
    /// A defined no-op terminal outcome (e.g. asset already assigned).
    Skipped,
    /// The operation failed; no partial effect beyond what the message says.
    Error,
}

/// Structured result returned to the host for every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub status: ReplyStatus,
    pub message: String,
}

impl Reply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Ok,
            message: message.into(),
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Skipped,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ReplyStatus::Error
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
