//! Guarded-assignment scenarios.

use crate::prelude::*;
use tally_core::{EmployeeId, InboundEvent, ObjectKey, ReplyStatus};
use tally_engine::{AssignError, AssignOutcome};

// Scenario A: directory knows E077 -> EMP-9, the asset has no ownership
// attribute; assignment confirms with the resolved system key.
#[tokio::test]
async fn scenario_a_first_assignment_confirms() {
    let w = world();
    w.resolver.seed("E077", "EMP-9");
    w.directory.insert_object(unowned_asset("EM-1953"));

    let outcome = w
        .engine
        .assign(&ObjectKey::new("EM-1953"), &EmployeeId::new("E077"))
        .await
        .unwrap();

    match outcome {
        AssignOutcome::Confirmed {
            object_key,
            owner_ref,
        } => {
            assert_eq!(object_key, "EM-1953");
            assert_eq!(owner_ref, "EMP-9");
        }
        other => panic!("expected Confirmed, got {other:?}"),
    }
    assert_eq!(
        w.directory
            .attribute_value(&ObjectKey::new("EM-1953"), OWNERSHIP_ATTR),
        Some("EMP-9".to_string())
    );
}

// Scenario B: the same asset already carries EMP-9; a repeat assignment is
// a skip, not a write.
#[tokio::test]
async fn scenario_b_repeat_assignment_skips() {
    let w = world();
    w.resolver.seed("E077", "EMP-9");
    w.directory.insert_object(owned_asset("EM-1953", "EMP-9"));

    let outcome = w
        .engine
        .assign(&ObjectKey::new("EM-1953"), &EmployeeId::new("E077"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        AssignOutcome::AlreadyAssigned {
            current: "EMP-9".to_string()
        }
    );
    assert_eq!(w.directory.write_count(), 0);
}

// Scenario C: employee absent from the directory.
#[tokio::test]
async fn scenario_c_unknown_employee() {
    let w = world();
    w.directory.insert_object(unowned_asset("EM-1953"));

    let err = w
        .engine
        .assign(&ObjectKey::new("EM-1953"), &EmployeeId::new("E999"))
        .await
        .unwrap_err();
    assert!(matches!(err, AssignError::UnknownEmployee(_)));
    assert_eq!(w.directory.write_count(), 0);
}

// Scenario D: the directory rejects the write with a 500; the failure is
// reported and a follow-up read still sees the attribute unset.
#[tokio::test]
async fn scenario_d_write_rejection_leaves_asset_unowned() {
    let w = world();
    w.resolver.seed("E077", "EMP-9");
    w.directory.insert_object(unowned_asset("EM-1953"));
    w.directory.fail_set_attribute(500);

    let err = w
        .engine
        .assign(&ObjectKey::new("EM-1953"), &EmployeeId::new("E077"))
        .await
        .unwrap_err();
    assert!(matches!(err, AssignError::WriteFailed { status: 500, .. }));
    assert_eq!(
        w.directory
            .attribute_value(&ObjectKey::new("EM-1953"), OWNERSHIP_ATTR),
        None
    );
}

// Full idempotence pass through the host boundary: ok then skipped, with a
// single write in total.
#[tokio::test]
async fn assignment_is_idempotent_end_to_end() {
    let w = world();
    w.resolver.seed("E077", "EMP-9");
    w.directory.insert_object(unowned_asset("EM-1953"));

    let event = InboundEvent::AssetAssigned {
        object_key: ObjectKey::new("EM-1953"),
        employee_id: EmployeeId::new("E077"),
    };
    let first = w.engine.handle_event(event.clone()).await;
    let second = w.engine.handle_event(event).await;

    assert_eq!(first.status, ReplyStatus::Ok);
    assert_eq!(second.status, ReplyStatus::Skipped);
    assert_eq!(w.directory.write_count(), 1);
}

#[tokio::test]
async fn null_string_ownership_counts_as_unset() {
    let w = world();
    w.resolver.seed("E077", "EMP-9");
    w.directory.insert_object(owned_asset("EM-1953", "null"));

    let outcome = w
        .engine
        .assign(&ObjectKey::new("EM-1953"), &EmployeeId::new("E077"))
        .await
        .unwrap();
    assert!(matches!(outcome, AssignOutcome::Confirmed { .. }));
}
