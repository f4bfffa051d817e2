// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tally-core: domain types for the asset/roster sync service

pub mod config;
pub mod event;
pub mod id;
pub mod ownership;
pub mod snapshot;

pub use config::{
    Config, ConfigError, DirectoryConfig, ExportConfig, ResolverConfig, ResolverMode,
    SchemaConfig, WikiConfig,
};
pub use event::{InboundEvent, Reply, ReplyStatus};
pub use id::{AttributeId, EmployeeId, ObjectKey, ObjectTypeId, OwnerRef, PageId, SchemaId};
pub use ownership::Ownership;
pub use snapshot::{ObjectSummary, SchemaSnapshot, TypeObjects};
