// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake directory adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{
    AttributeEntry, AttributeInfo, DirectoryAdapter, DirectoryError, ObjectRecord, ObjectTypeInfo,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tally_core::{AttributeId, EmployeeId, ObjectKey, ObjectTypeId, SchemaId};

/// Recorded directory call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    FindEmployee(EmployeeId),
    GetAttributes(ObjectKey),
    SetAttribute {
        key: ObjectKey,
        attribute: AttributeId,
        value: String,
    },
    CreateObject(ObjectTypeId),
    DeleteObject(ObjectKey),
    ListObjectTypes(SchemaId),
    ListTypeAttributes(ObjectTypeId),
    QueryObjects(String),
}

struct FakeDirectoryState {
    objects: HashMap<ObjectKey, ObjectRecord>,
    objects_by_type: HashMap<String, Vec<ObjectKey>>,
    employees: HashMap<EmployeeId, Vec<ObjectRecord>>,
    object_types: Vec<ObjectTypeInfo>,
    type_attributes: HashMap<ObjectTypeId, Vec<AttributeInfo>>,
    calls: Vec<DirectoryCall>,
    set_attribute_failure: Option<u16>,
    transport_failure: Option<String>,
    next_id: u64,
}

/// Fake directory adapter: seeded in-memory object graph with call
/// recording and failure injection.
#[derive(Clone)]
pub struct FakeDirectoryAdapter {
    inner: Arc<Mutex<FakeDirectoryState>>,
}

impl Default for FakeDirectoryAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeDirectoryState {
                objects: HashMap::new(),
                objects_by_type: HashMap::new(),
                employees: HashMap::new(),
                object_types: Vec::new(),
                type_attributes: HashMap::new(),
                calls: Vec::new(),
                set_attribute_failure: None,
                transport_failure: None,
                next_id: 1,
            })),
        }
    }
}

impl FakeDirectoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object reachable by `get_attributes` / `set_attribute`.
    pub fn insert_object(&self, record: ObjectRecord) {
        self.inner
            .lock()
            .objects
            .insert(record.object_key.clone(), record);
    }

    /// Seed an object and index it under a type name for `query_objects`.
    pub fn insert_typed_object(&self, type_name: &str, record: ObjectRecord) {
        let mut state = self.inner.lock();
        state
            .objects_by_type
            .entry(type_name.to_string())
            .or_default()
            .push(record.object_key.clone());
        state.objects.insert(record.object_key.clone(), record);
    }

    /// Seed an employee lookup result for a business key.
    pub fn seed_employee(&self, id: EmployeeId, record: ObjectRecord) {
        self.inner.lock().employees.entry(id).or_default().push(record);
    }

    /// Seed the schema walk used by the roster export.
    pub fn seed_schema(&self, types: Vec<ObjectTypeInfo>) {
        self.inner.lock().object_types = types;
    }

    pub fn seed_type_attributes(&self, type_id: ObjectTypeId, attrs: Vec<AttributeInfo>) {
        self.inner.lock().type_attributes.insert(type_id, attrs);
    }

    /// All subsequent `set_attribute` calls answer with this status.
    pub fn fail_set_attribute(&self, status: u16) {
        self.inner.lock().set_attribute_failure = Some(status);
    }

    /// All subsequent calls fail at the transport level.
    pub fn fail_transport(&self, message: &str) {
        self.inner.lock().transport_failure = Some(message.to_string());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of `set_attribute` writes that reached the store.
    pub fn write_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, DirectoryCall::SetAttribute { .. }))
            .count()
    }

    /// Current first value of an attribute, for read-back assertions.
    pub fn attribute_value(&self, key: &ObjectKey, attribute: AttributeId) -> Option<String> {
        let state = self.inner.lock();
        state
            .objects
            .get(key)
            .and_then(|o| o.attribute(attribute))
            .and_then(|a| a.first_value().map(str::to_string))
    }

    pub fn contains_object(&self, key: &ObjectKey) -> bool {
        self.inner.lock().objects.contains_key(key)
    }

    fn check_transport(state: &FakeDirectoryState) -> Result<(), DirectoryError> {
        if let Some(message) = &state.transport_failure {
            return Err(DirectoryError::Transport(message.clone()));
        }
        Ok(())
    }
}

fn not_found(key: &ObjectKey) -> DirectoryError {
    DirectoryError::Status {
        status: 404,
        body: format!("object {key} not found"),
    }
}

#[async_trait]
impl DirectoryAdapter for FakeDirectoryAdapter {
    async fn find_employee_by_business_key(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<ObjectRecord>, DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::FindEmployee(id.clone()));
        Self::check_transport(&state)?;
        Ok(state.employees.get(id).cloned().unwrap_or_default())
    }

    async fn get_attributes(
        &self,
        key: &ObjectKey,
    ) -> Result<Vec<AttributeEntry>, DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::GetAttributes(key.clone()));
        Self::check_transport(&state)?;
        state
            .objects
            .get(key)
            .map(|o| o.attributes.clone())
            .ok_or_else(|| not_found(key))
    }

    async fn set_attribute(
        &self,
        key: &ObjectKey,
        attribute: AttributeId,
        value: &str,
    ) -> Result<(), DirectoryError> {
        let mut state = self.inner.lock();
        Self::check_transport(&state)?;
        if let Some(status) = state.set_attribute_failure {
            return Err(DirectoryError::Status {
                status,
                body: "injected write failure".to_string(),
            });
        }
        state.calls.push(DirectoryCall::SetAttribute {
            key: key.clone(),
            attribute,
            value: value.to_string(),
        });
        let object = state.objects.get_mut(key).ok_or_else(|| not_found(key))?;
        match object.attributes.iter_mut().find(|a| a.attribute_id == attribute) {
            Some(entry) => entry.values = vec![value.to_string()],
            None => object
                .attributes
                .push(AttributeEntry::single(attribute, value)),
        }
        Ok(())
    }

    async fn create_object(
        &self,
        type_id: ObjectTypeId,
        attributes: Vec<AttributeEntry>,
    ) -> Result<ObjectRecord, DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::CreateObject(type_id));
        Self::check_transport(&state)?;
        let id = state.next_id;
        state.next_id += 1;
        let record = ObjectRecord {
            id: id.to_string(),
            object_key: ObjectKey::new(format!("O-{id}")),
            name: attributes
                .first()
                .and_then(AttributeEntry::first_value)
                .unwrap_or_default()
                .to_string(),
            attributes,
        };
        state.objects.insert(record.object_key.clone(), record.clone());
        Ok(record)
    }

    async fn delete_object(&self, key: &ObjectKey) -> Result<(), DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::DeleteObject(key.clone()));
        Self::check_transport(&state)?;
        state.objects.remove(key).map(|_| ()).ok_or_else(|| not_found(key))
    }

    async fn list_object_types(
        &self,
        schema: SchemaId,
    ) -> Result<Vec<ObjectTypeInfo>, DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::ListObjectTypes(schema));
        Self::check_transport(&state)?;
        Ok(state.object_types.clone())
    }

    async fn list_type_attributes(
        &self,
        type_id: ObjectTypeId,
    ) -> Result<Vec<AttributeInfo>, DirectoryError> {
        let mut state = self.inner.lock();
        state.calls.push(DirectoryCall::ListTypeAttributes(type_id));
        Self::check_transport(&state)?;
        Ok(state.type_attributes.get(&type_id).cloned().unwrap_or_default())
    }

    async fn query_objects(&self, type_name: &str) -> Result<Vec<ObjectRecord>, DirectoryError> {
        let mut state = self.inner.lock();
        state
            .calls
            .push(DirectoryCall::QueryObjects(type_name.to_string()));
        Self::check_transport(&state)?;
        let keys = state
            .objects_by_type
            .get(type_name)
            .cloned()
            .unwrap_or_default();
        Ok(keys
            .iter()
            .filter_map(|k| state.objects.get(k).cloned())
            .collect())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
