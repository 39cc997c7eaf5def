// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::ids::{GameId, NodeId};

/// What kind of stop on the trail a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A playable exercise from the catalog.
    Level,
    /// A synthetic checkpoint (mastery challenge) spliced between levels.
    Castle,
}

/// Derived unlock state. At most one node in a map is ever `Current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    Locked,
    Current,
    Completed,
}

/// A 2-D point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One stop on the adventure map, immutable once the map is built.
///
/// Level nodes reuse their game's id and carry a 1-based `level_number`;
/// castle nodes get synthetic `castle:<n>` ids and stay unnumbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    id: NodeId,
    kind: NodeKind,
    label: String,
    game_id: Option<GameId>,
    level_number: Option<u32>,
    state: NodeState,
    stars: u8,
    best_accuracy: f64,
    position: Position,
}

impl MapNode {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: NodeId,
        kind: NodeKind,
        label: impl Into<String>,
        game_id: Option<GameId>,
        level_number: Option<u32>,
        state: NodeState,
        stars: u8,
        best_accuracy: f64,
    ) -> Self {
        debug_assert!(stars <= 3);
        Self {
            id,
            kind,
            label: label.into(),
            game_id,
            level_number,
            state,
            stars,
            best_accuracy,
            position: Position::ORIGIN,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn game_id(&self) -> Option<&GameId> {
        self.game_id.as_ref()
    }

    /// 1-based index among level nodes only; `None` for castles.
    pub fn level_number(&self) -> Option<u32> {
        self.level_number
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == NodeState::Completed
    }

    /// Star rating, 0-3. Meaningful only when the node is completed.
    pub fn stars(&self) -> u8 {
        self.stars
    }

    /// Best completed-session accuracy; `0` for castles and unattempted levels.
    pub fn best_accuracy(&self) -> f64 {
        self.best_accuracy
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
