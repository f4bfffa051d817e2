// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host boundary: turn inbound events into workflow calls and every
//! outcome, success or failure, into a structured reply.

use crate::assign::AssignOutcome;
use crate::engine::Engine;
use tally_adapters::{DirectoryAdapter, DocStoreAdapter, EmployeeResolver};
use tally_core::{InboundEvent, Reply};

impl<D, W, R> Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    /// Handle one host event. Never returns an error: failures are folded
    /// into the reply so the host always receives a tagged result.
    pub async fn handle_event(&self, event: InboundEvent) -> Reply {
        match event {
            InboundEvent::EmployeeAdded {
                employee_id,
                username,
            } => match self.add_employee(&employee_id, &username).await {
                Ok(record) => Reply::ok(format!(
                    "employee {employee_id} recorded as {}",
                    record.object_key
                )),
                Err(e) => Reply::error(e.to_string()),
            },

            InboundEvent::EmployeeRemoved { employee_id } => {
                match self.remove_employee(&employee_id).await {
                    Ok(object_key) => {
                        Reply::ok(format!("employee {employee_id} removed ({object_key})"))
                    }
                    Err(e) => Reply::error(e.to_string()),
                }
            }

            InboundEvent::AssetAssigned {
                object_key,
                employee_id,
            } => match self.assign(&object_key, &employee_id).await {
                Ok(AssignOutcome::Confirmed { owner_ref, .. }) => {
                    Reply::ok(format!("{object_key} assigned to {owner_ref}"))
                }
                Ok(AssignOutcome::AlreadyAssigned { current }) => {
                    Reply::skipped(format!("{object_key} already assigned: {current}"))
                }
                Err(e) => Reply::error(e.to_string()),
            },

            InboundEvent::RosterExport => match self.export_roster().await {
                Ok(report) => Reply::ok(format!(
                    "exported {} objects across {} types to page {}",
                    report.objects, report.types, report.page_id
                )),
                Err(e) => Reply::error(e.to_string()),
            },

            InboundEvent::Message { message } => {
                tracing::info!(%message, "host message");
                Reply::ok("message logged")
            }
        }
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
