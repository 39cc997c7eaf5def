// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::ids::GameId;

/// How an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Completed,
    Abandoned,
}

/// One attempt record from the external session store.
///
/// The store is the only thing that changes over time; this type is read-only
/// input. Multiple sessions may reference the same game, and only completed
/// sessions count toward a level's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    game_id: GameId,
    accuracy: f64,
    status: SessionStatus,
    completed_at: i64,
}

impl ExerciseSession {
    pub fn new(game_id: GameId, accuracy: f64, status: SessionStatus, completed_at: i64) -> Self {
        Self {
            game_id,
            accuracy,
            status,
            completed_at,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Raw accuracy as recorded by the store. May be outside `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Accuracy clamped into `[0, 1]`; non-finite values normalize to `0`.
    pub fn clamped_accuracy(&self) -> f64 {
        if self.accuracy.is_finite() {
            self.accuracy.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Unix timestamp (seconds) when the attempt ended.
    pub fn completed_at(&self) -> i64 {
        self.completed_at
    }
}
