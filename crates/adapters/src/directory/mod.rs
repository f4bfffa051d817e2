// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asset directory service adapter.
//!
//! The directory is a remote object-graph store: objects identified by a
//! system key carry attribute-id -> values mappings, grouped into typed
//! collections under a schema. This module defines the capability the
//! workflows consume; `http` talks to the real service, `fake` backs tests.

mod http;

pub use http::HttpDirectoryAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DirectoryCall, FakeDirectoryAdapter};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tally_core::{AttributeId, EmployeeId, ObjectKey, ObjectTypeId, SchemaId};
use thiserror::Error;

/// Errors from directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Network-level failure; the request may never have reached the service.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("directory returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The service answered 2xx but the body did not match the expected shape.
    #[error("malformed directory response: {0}")]
    Parse(String),
}

/// One attribute row on an object: the attribute type id and its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub attribute_id: AttributeId,
    pub values: Vec<String>,
}

impl AttributeEntry {
    pub fn new(attribute_id: AttributeId, values: Vec<String>) -> Self {
        Self {
            attribute_id,
            values,
        }
    }

    pub fn single(attribute_id: AttributeId, value: impl Into<String>) -> Self {
        Self {
            attribute_id,
            values: vec![value.into()],
        }
    }

    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// A directory object as returned by lookups and queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Numeric record id, service-internal.
    pub id: String,
    /// System key, e.g. `"EM-1953"`.
    pub object_key: ObjectKey,
    pub name: String,
    pub attributes: Vec<AttributeEntry>,
}

impl ObjectRecord {
    pub fn attribute(&self, id: AttributeId) -> Option<&AttributeEntry> {
        self.attributes.iter().find(|a| a.attribute_id == id)
    }
}

/// An object type within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeInfo {
    pub id: ObjectTypeId,
    pub name: String,
}

/// An attribute definition on an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInfo {
    pub id: AttributeId,
    pub name: String,
}

/// Adapter for the asset directory service.
///
/// Every call is a single attempt; retries are nobody's job here.
#[async_trait]
pub trait DirectoryAdapter: Clone + Send + Sync + 'static {
    /// All employee objects whose business-key attribute equals `id`.
    /// Returns every match so callers can distinguish zero / one / many.
    async fn find_employee_by_business_key(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<ObjectRecord>, DirectoryError>;

    /// All attribute rows of one object.
    async fn get_attributes(&self, key: &ObjectKey)
        -> Result<Vec<AttributeEntry>, DirectoryError>;

    /// Set a single-valued attribute on an object.
    async fn set_attribute(
        &self,
        key: &ObjectKey,
        attribute: AttributeId,
        value: &str,
    ) -> Result<(), DirectoryError>;

    /// Create an object of the given type; returns the created record with
    /// its new system key.
    async fn create_object(
        &self,
        type_id: ObjectTypeId,
        attributes: Vec<AttributeEntry>,
    ) -> Result<ObjectRecord, DirectoryError>;

    /// Delete an object by system key.
    async fn delete_object(&self, key: &ObjectKey) -> Result<(), DirectoryError>;

    /// Object types of a schema.
    async fn list_object_types(
        &self,
        schema: SchemaId,
    ) -> Result<Vec<ObjectTypeInfo>, DirectoryError>;

    /// Attribute definitions of an object type.
    async fn list_type_attributes(
        &self,
        type_id: ObjectTypeId,
    ) -> Result<Vec<AttributeInfo>, DirectoryError>;

    /// First page of objects of the named type, attributes included.
    async fn query_objects(&self, type_name: &str) -> Result<Vec<ObjectRecord>, DirectoryError>;
}
