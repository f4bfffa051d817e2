//! Roster CRUD scenarios through the host boundary.

use crate::prelude::*;
use tally_core::{EmployeeId, InboundEvent, ReplyStatus};

#[tokio::test]
async fn employee_add_then_assign_then_remove() {
    let w = world();

    let reply = w
        .engine
        .handle_event(InboundEvent::EmployeeAdded {
            employee_id: EmployeeId::new("E077"),
            username: "rithigasri".to_string(),
        })
        .await;
    assert_eq!(reply.status, ReplyStatus::Ok);

    // the fake mints O-1 for the first created object; mirror the live
    // lookup by seeding the resolver with it
    w.resolver.seed("E077", "O-1");
    w.directory.insert_object(unowned_asset("EM-1953"));

    let reply = w
        .engine
        .handle_event(InboundEvent::AssetAssigned {
            object_key: tally_core::ObjectKey::new("EM-1953"),
            employee_id: EmployeeId::new("E077"),
        })
        .await;
    assert_eq!(reply.status, ReplyStatus::Ok);
    assert_eq!(
        w.directory
            .attribute_value(&tally_core::ObjectKey::new("EM-1953"), OWNERSHIP_ATTR),
        Some("O-1".to_string())
    );

    let reply = w
        .engine
        .handle_event(InboundEvent::EmployeeRemoved {
            employee_id: EmployeeId::new("E077"),
        })
        .await;
    assert_eq!(reply.status, ReplyStatus::Ok);
    assert!(!w
        .directory
        .contains_object(&tally_core::ObjectKey::new("O-1")));
}

#[tokio::test]
async fn removing_unknown_employee_is_an_error_reply() {
    let w = world();
    let reply = w
        .engine
        .handle_event(InboundEvent::EmployeeRemoved {
            employee_id: EmployeeId::new("E999"),
        })
        .await;
    assert!(reply.is_error());
}
