//! Shared fixture for the spec suite.

use tally_adapters::{
    AttributeEntry, FakeDirectoryAdapter, FakeDocStoreAdapter, FakeResolver, ObjectRecord,
};
use tally_core::{
    AttributeId, ExportConfig, ObjectKey, ObjectTypeId, SchemaConfig, SchemaId, WikiConfig,
};
use tally_engine::Engine;

pub const OWNERSHIP_ATTR: AttributeId = AttributeId(1567);

pub type SpecEngine = Engine<FakeDirectoryAdapter, FakeDocStoreAdapter, FakeResolver>;

pub struct World {
    pub engine: SpecEngine,
    pub directory: FakeDirectoryAdapter,
    pub docstore: FakeDocStoreAdapter,
    pub resolver: FakeResolver,
}

pub fn world() -> World {
    let directory = FakeDirectoryAdapter::new();
    let docstore = FakeDocStoreAdapter::new();
    let resolver = FakeResolver::new();
    let engine = Engine::new(
        directory.clone(),
        docstore.clone(),
        resolver.clone(),
        SchemaConfig {
            schema_id: SchemaId(14),
            employee_type_id: ObjectTypeId(166),
            asset_type_id: ObjectTypeId(167),
            employee_type_name: "Employee".to_string(),
            username_attr: AttributeId(1552),
            employee_id_attr: AttributeId(1561),
            employee_id_attr_name: "Employee ID".to_string(),
            ownership_attr: OWNERSHIP_ATTR,
        },
        WikiConfig {
            base_url: "https://wiki.example.com/rest/api".to_string(),
            space_key: "OPS".to_string(),
            page_title: "Asset Roster".to_string(),
        },
        ExportConfig::default(),
    );
    World {
        engine,
        directory,
        docstore,
        resolver,
    }
}

/// An asset with no ownership attribute.
pub fn unowned_asset(key: &str) -> ObjectRecord {
    ObjectRecord {
        id: "500".to_string(),
        object_key: ObjectKey::new(key),
        name: "MacBook Pro".to_string(),
        attributes: vec![],
    }
}

/// An asset whose ownership attribute holds `raw`.
pub fn owned_asset(key: &str, raw: &str) -> ObjectRecord {
    ObjectRecord {
        id: "500".to_string(),
        object_key: ObjectKey::new(key),
        name: "MacBook Pro".to_string(),
        attributes: vec![AttributeEntry::single(OWNERSHIP_ATTR, raw)],
    }
}
