// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests.

use crate::engine::Engine;
use tally_adapters::{
    AttributeEntry, FakeDirectoryAdapter, FakeDocStoreAdapter, FakeResolver, ObjectRecord,
};
use tally_core::{
    AttributeId, ExportConfig, ObjectKey, ObjectTypeId, SchemaConfig, SchemaId, WikiConfig,
};

pub(crate) const OWNERSHIP_ATTR: AttributeId = AttributeId(1567);
pub(crate) const USERNAME_ATTR: AttributeId = AttributeId(1552);
pub(crate) const EMPLOYEE_ID_ATTR: AttributeId = AttributeId(1561);

pub(crate) fn schema_config() -> SchemaConfig {
    SchemaConfig {
        schema_id: SchemaId(14),
        employee_type_id: ObjectTypeId(166),
        asset_type_id: ObjectTypeId(167),
        employee_type_name: "Employee".to_string(),
        username_attr: USERNAME_ATTR,
        employee_id_attr: EMPLOYEE_ID_ATTR,
        employee_id_attr_name: "Employee ID".to_string(),
        ownership_attr: OWNERSHIP_ATTR,
    }
}

pub(crate) fn wiki_config() -> WikiConfig {
    WikiConfig {
        base_url: "https://wiki.example.com/rest/api".to_string(),
        space_key: "OPS".to_string(),
        page_title: "Asset Roster".to_string(),
    }
}

pub(crate) type FakeEngine = Engine<FakeDirectoryAdapter, FakeDocStoreAdapter, FakeResolver>;

pub(crate) struct Fixture {
    pub engine: FakeEngine,
    pub directory: FakeDirectoryAdapter,
    pub docstore: FakeDocStoreAdapter,
    pub resolver: FakeResolver,
}

pub(crate) fn fixture() -> Fixture {
    fixture_with_export(ExportConfig::default())
}

pub(crate) fn fixture_with_export(export: ExportConfig) -> Fixture {
    let directory = FakeDirectoryAdapter::new();
    let docstore = FakeDocStoreAdapter::new();
    let resolver = FakeResolver::new();
    let engine = Engine::new(
        directory.clone(),
        docstore.clone(),
        resolver.clone(),
        schema_config(),
        wiki_config(),
        export,
    );
    Fixture {
        engine,
        directory,
        docstore,
        resolver,
    }
}

/// An asset with no ownership attribute row at all.
pub(crate) fn unowned_asset(key: &str) -> ObjectRecord {
    ObjectRecord {
        id: "500".to_string(),
        object_key: ObjectKey::new(key),
        name: "MacBook Pro".to_string(),
        attributes: vec![],
    }
}

/// An asset whose ownership attribute holds `raw` verbatim.
pub(crate) fn asset_with_owner(key: &str, raw: &str) -> ObjectRecord {
    ObjectRecord {
        id: "500".to_string(),
        object_key: ObjectKey::new(key),
        name: "MacBook Pro".to_string(),
        attributes: vec![AttributeEntry::single(OWNERSHIP_ATTR, raw)],
    }
}

/// An asset with an ownership attribute row but no values.
pub(crate) fn asset_with_empty_owner_row(key: &str) -> ObjectRecord {
    ObjectRecord {
        id: "500".to_string(),
        object_key: ObjectKey::new(key),
        name: "MacBook Pro".to_string(),
        attributes: vec![AttributeEntry::new(OWNERSHIP_ATTR, vec![])],
    }
}
