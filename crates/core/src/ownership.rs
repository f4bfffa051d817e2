// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ownership attribute normalization.
//!
//! Upstream systems represent an unassigned asset inconsistently: the
//! ownership attribute row may be missing entirely, present with an empty
//! value list, present with a JSON null, or present with the literal string
//! `"null"`. All of those mean "unset". Normalization happens here, once,
//! right after the attribute read; callers never compare raw strings.

use serde::{Deserialize, Serialize};

/// Normalized state of an asset's ownership attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Ownership {
    /// No current owner; a guarded write may proceed.
    Unset,
    /// A non-empty owner reference is recorded.
    Assigned(String),
    /// The attribute carries a blank value. It cannot be proven unset, so
    /// guarded writes must not overwrite it.
    Unknown(String),
}

impl Ownership {
    /// Normalize the raw first value of the ownership attribute.
    ///
    /// `None` covers a missing attribute row, an empty value list, and a
    /// JSON null value; those are indistinguishable to callers on purpose.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Ownership::Unset,
            Some(value) if value == "null" => Ownership::Unset,
            Some(value) if value.trim().is_empty() => Ownership::Unknown(value.to_string()),
            Some(value) => Ownership::Assigned(value.to_string()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Ownership::Unset)
    }

    /// The recorded value for states that block a guarded write.
    pub fn current_value(&self) -> Option<&str> {
        match self {
            Ownership::Unset => None,
            Ownership::Assigned(v) | Ownership::Unknown(v) => Some(v),
        }
    }
}

#[cfg(test)]
#[path = "ownership_tests.rs"]
mod tests;
