// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The engine: workflows generic over the collaborator adapters.

use tally_adapters::{DirectoryAdapter, DocStoreAdapter, EmployeeResolver};
use tally_core::{Config, ExportConfig, SchemaConfig, WikiConfig};

/// Workflow engine over an asset directory, a document store, and an
/// employee resolver. Holds no state of its own: every record is fetched
/// fresh per call and the adapters own all persistence.
#[derive(Clone)]
pub struct Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    pub(crate) directory: D,
    pub(crate) docstore: W,
    pub(crate) resolver: R,
    pub(crate) schema: SchemaConfig,
    pub(crate) wiki: WikiConfig,
    pub(crate) export: ExportConfig,
}

impl<D, W, R> Engine<D, W, R>
where
    D: DirectoryAdapter,
    W: DocStoreAdapter,
    R: EmployeeResolver,
{
    pub fn new(
        directory: D,
        docstore: W,
        resolver: R,
        schema: SchemaConfig,
        wiki: WikiConfig,
        export: ExportConfig,
    ) -> Self {
        Self {
            directory,
            docstore,
            resolver,
            schema,
            wiki,
            export,
        }
    }

    /// Convenience constructor taking the relevant config sections.
    pub fn from_config(directory: D, docstore: W, resolver: R, config: &Config) -> Self {
        Self::new(
            directory,
            docstore,
            resolver,
            config.schema.clone(),
            config.wiki.clone(),
            config.export.clone(),
        )
    }
}
