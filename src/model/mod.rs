// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! Catalog games and session records are read-only inputs from external
//! collaborators; map nodes and decorations are the derived outputs handed to
//! the rendering layer.

pub mod decoration;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod game;
pub mod ids;
pub mod node;
pub mod session;

pub use decoration::{Decoration, DecorationKind};
pub use game::{AgeRange, DeficitArea, GameDefinition};
pub use ids::{GameId, Id, IdError, NodeId};
pub use node::{MapNode, NodeKind, NodeState, Position};
pub use session::{ExerciseSession, SessionStatus};
