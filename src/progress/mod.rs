// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Progression derivation: session history in, gated node sequence out.
//!
//! Classification collects per-level facts; assembly splices castle
//! checkpoints and assigns unlock states in a single left-to-right pass.

pub mod assemble;
pub mod classify;

pub use assemble::{assemble, build_nodes};
pub use classify::{classify, stars_for, LevelFacts};
