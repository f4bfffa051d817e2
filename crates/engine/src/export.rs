// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster export: walk the object schema, build a JSON snapshot, and
//! publish it to the wiki page (updated in place; created when missing).

use crate::engine::Engine;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tally_adapters::{
    DirectoryAdapter, DirectoryError, DocStoreAdapter, DocStoreError, EmployeeResolver,
};
use tally_core::{AttributeId, ObjectSummary, PageId, SchemaSnapshot, TypeObjects};
use thiserror::Error;

/// Errors from the export workflow.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    DocStore(#[from] DocStoreError),
    #[error("snapshot write failed: {0}")]
    Snapshot(String),
}

/// What an export run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub types: usize,
    pub objects: usize,
    pub page_id: PageId,
    /// True when the wiki page did not exist and was created.
    pub created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl<D, W, R> Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    /// Export every object of the configured schema to the wiki page.
    pub async fn export_roster(&self) -> Result<ExportReport, ExportError> {
        tracing::info!(schema = %self.schema.schema_id, "starting roster export");
        let types = self.directory.list_object_types(self.schema.schema_id).await?;

        let mut snapshot = SchemaSnapshot::default();
        for object_type in &types {
            tracing::debug!(object_type = %object_type.name, "collecting objects");
            let attribute_names: HashMap<AttributeId, String> = self
                .directory
                .list_type_attributes(object_type.id)
                .await?
                .into_iter()
                .map(|a| (a.id, a.name))
                .collect();
            let objects = self
                .directory
                .query_objects(&object_type.name)
                .await?
                .into_iter()
                .map(|record| ObjectSummary {
                    id: record.id,
                    name: record.name,
                    attributes: record
                        .attributes
                        .iter()
                        .filter_map(|entry| {
                            let name = attribute_names.get(&entry.attribute_id)?;
                            let value = entry.first_value()?;
                            Some((name.clone(), value.to_string()))
                        })
                        .collect(),
                })
                .collect();
            snapshot.types.push(TypeObjects {
                object_type: object_type.name.clone(),
                objects,
            });
        }

        let json = snapshot
            .to_pretty_json()
            .map_err(|e| ExportError::Snapshot(e.to_string()))?;

        if let Some(path) = &self.export.snapshot_path {
            tokio::fs::write(path, &json)
                .await
                .map_err(|e| ExportError::Snapshot(format!("{}: {e}", path.display())))?;
            tracing::info!(path = %path.display(), "snapshot written");
        }

        let (page_id, created) = match self
            .docstore
            .find_page(&self.wiki.space_key, &self.wiki.page_title)
            .await?
        {
            Some(handle) => {
                self.docstore
                    .update_page(&handle, &self.wiki.page_title, &json)
                    .await?;
                (handle.id, false)
            }
            None => {
                let id = self
                    .docstore
                    .create_page(&self.wiki.space_key, &self.wiki.page_title, &json)
                    .await?;
                (id, true)
            }
        };

        let report = ExportReport {
            types: snapshot.types.len(),
            objects: snapshot.object_count(),
            page_id,
            created,
            snapshot_path: self.export.snapshot_path.clone(),
        };
        tracing::info!(
            types = report.types,
            objects = report.objects,
            page_id = %report.page_id,
            created = report.created,
            "roster export finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
