// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster snapshot written to the wiki page and the optional local file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One directory object, flattened to named attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: String,
    pub name: String,
    /// Attribute display name -> first value. BTreeMap keeps the JSON
    /// stable across runs so page updates diff cleanly.
    pub attributes: BTreeMap<String, String>,
}

/// All objects of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeObjects {
    #[serde(rename = "objectType")]
    pub object_type: String,
    pub objects: Vec<ObjectSummary>,
}

/// Full export of one object schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSnapshot {
    pub types: Vec<TypeObjects>,
}

impl SchemaSnapshot {
    pub fn object_count(&self) -> usize {
        self.types.iter().map(|t| t.objects.len()).sum()
    }

    /// Pretty JSON used both for the wiki page body and the local file.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
