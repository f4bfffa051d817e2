// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tally-engine: sync and assignment workflows over the directory and
//! document store adapters.

mod assign;
mod engine;
mod export;
mod handle;
mod roster;
#[cfg(test)]
mod test_helpers;

pub use assign::{AssignError, AssignOutcome};
pub use engine::Engine;
pub use export::{ExportError, ExportReport};
pub use roster::RosterError;
