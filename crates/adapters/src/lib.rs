// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the two remote collaborators (asset directory, wiki
//! document store) and the employee resolver capability.

pub mod directory;
pub mod docstore;
pub mod resolver;

pub use directory::{
    AttributeEntry, AttributeInfo, DirectoryAdapter, DirectoryError, HttpDirectoryAdapter,
    ObjectRecord, ObjectTypeInfo,
};
pub use docstore::{DocStoreAdapter, DocStoreError, HttpDocStoreAdapter, PageHandle};
pub use resolver::{CacheResolver, EmployeeResolver, LiveResolver, ResolveError, ResolvedEmployee};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use directory::{DirectoryCall, FakeDirectoryAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use docstore::{DocStoreCall, FakeDocStoreAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use resolver::FakeResolver;
