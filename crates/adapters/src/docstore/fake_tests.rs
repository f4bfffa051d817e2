// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn create_then_find_then_update() {
    let fake = FakeDocStoreAdapter::new();

    assert!(fake.find_page("OPS", "Asset Roster").await.unwrap().is_none());

    let id = fake.create_page("OPS", "Asset Roster", "[]").await.unwrap();
    let handle = fake
        .find_page("OPS", "Asset Roster")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(handle.id, id);
    assert_eq!(handle.version, 1);

    fake.update_page(&handle, "Asset Roster", "[1]").await.unwrap();
    assert_eq!(fake.page_body("OPS", "Asset Roster"), Some("[1]".to_string()));
    assert_eq!(fake.page_version("OPS", "Asset Roster"), Some(2));
}

#[tokio::test]
async fn duplicate_create_is_rejected() {
    let fake = FakeDocStoreAdapter::new();
    fake.create_page("OPS", "Asset Roster", "[]").await.unwrap();
    let err = fake.create_page("OPS", "Asset Roster", "[]").await.unwrap_err();
    assert!(matches!(err, DocStoreError::Status { status: 400, .. }));
}

#[tokio::test]
async fn stale_version_update_conflicts() {
    let fake = FakeDocStoreAdapter::new();
    fake.create_page("OPS", "Asset Roster", "[]").await.unwrap();
    let handle = fake.find_page("OPS", "Asset Roster").await.unwrap().unwrap();
    fake.update_page(&handle, "Asset Roster", "[1]").await.unwrap();

    // second update based on the same (now stale) handle
    let err = fake.update_page(&handle, "Asset Roster", "[2]").await.unwrap_err();
    assert!(matches!(err, DocStoreError::Status { status: 409, .. }));
    assert_eq!(fake.page_body("OPS", "Asset Roster"), Some("[1]".to_string()));
}

#[tokio::test]
async fn update_with_new_title_renames_the_page() {
    let fake = FakeDocStoreAdapter::new();
    let id = fake.create_page("OPS", "Asset Roster", "[]").await.unwrap();
    let handle = fake.find_page("OPS", "Asset Roster").await.unwrap().unwrap();

    fake.update_page(&handle, "Asset Roster 2026", "[1]").await.unwrap();

    assert!(fake.find_page("OPS", "Asset Roster").await.unwrap().is_none());
    let renamed = fake
        .find_page("OPS", "Asset Roster 2026")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.id, id);
    assert_eq!(renamed.version, 2);
    assert_eq!(
        fake.page_body("OPS", "Asset Roster 2026"),
        Some("[1]".to_string())
    );
}

#[tokio::test]
async fn transport_failure_is_injected() {
    let fake = FakeDocStoreAdapter::new();
    fake.fail_transport("dns failure");
    let err = fake.find_page("OPS", "x").await.unwrap_err();
    assert!(matches!(err, DocStoreError::Transport(_)));
}

#[tokio::test]
async fn calls_are_recorded() {
    let fake = FakeDocStoreAdapter::new();
    fake.create_page("OPS", "Asset Roster", "[]").await.unwrap();
    let calls = fake.calls();
    assert_eq!(
        calls[0],
        DocStoreCall::CreatePage {
            space_key: "OPS".to_string(),
            title: "Asset Roster".to_string(),
        }
    );
}
