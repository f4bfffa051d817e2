//! Roster export scenarios: schema walk to a single wiki page.

use crate::prelude::*;
use tally_adapters::{AttributeEntry, AttributeInfo, ObjectRecord, ObjectTypeInfo};
use tally_core::{AttributeId, InboundEvent, ObjectKey, ObjectTypeId, ReplyStatus};

fn seed_schema(w: &World) {
    w.directory.seed_schema(vec![ObjectTypeInfo {
        id: ObjectTypeId(167),
        name: "Laptop".to_string(),
    }]);
    w.directory.seed_type_attributes(
        ObjectTypeId(167),
        vec![AttributeInfo {
            id: AttributeId(1567),
            name: "Owner".to_string(),
        }],
    );
    w.directory.insert_typed_object(
        "Laptop",
        ObjectRecord {
            id: "500".to_string(),
            object_key: ObjectKey::new("EM-1953"),
            name: "MacBook Pro".to_string(),
            attributes: vec![AttributeEntry::single(AttributeId(1567), "EMP-9")],
        },
    );
}

#[tokio::test]
async fn first_export_creates_the_page() {
    let w = world();
    seed_schema(&w);

    let report = w.engine.export_roster().await.unwrap();
    assert!(report.created);
    assert_eq!(report.types, 1);
    assert_eq!(report.objects, 1);

    let body = w.docstore.page_body("OPS", "Asset Roster").unwrap();
    assert!(body.contains("\"objectType\": \"Laptop\""));
    assert!(body.contains("\"Owner\": \"EMP-9\""));
    assert_eq!(w.docstore.page_version("OPS", "Asset Roster"), Some(1));
}

#[tokio::test]
async fn second_export_updates_the_same_page_in_place() {
    let w = world();
    seed_schema(&w);

    let first = w.engine.export_roster().await.unwrap();
    let second = w.engine.export_roster().await.unwrap();

    assert!(!second.created);
    assert_eq!(second.page_id, first.page_id);
    assert_eq!(w.docstore.page_version("OPS", "Asset Roster"), Some(2));
}

#[tokio::test]
async fn export_reply_through_the_host_boundary() {
    let w = world();
    seed_schema(&w);

    let reply = w.engine.handle_event(InboundEvent::RosterExport).await;
    assert_eq!(reply.status, ReplyStatus::Ok);
    assert!(reply.message.contains("1 objects"));
}

#[tokio::test]
async fn empty_schema_still_publishes_a_page() {
    let w = world();

    let report = w.engine.export_roster().await.unwrap();
    assert!(report.created);
    assert_eq!(report.types, 0);
    assert_eq!(report.objects, 0);
    assert_eq!(
        w.docstore.page_body("OPS", "Asset Roster").as_deref(),
        Some("[]")
    );
}
