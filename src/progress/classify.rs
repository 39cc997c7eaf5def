// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};

use crate::config::MapConfig;
use crate::model::{ExerciseSession, GameDefinition};

/// Per-level completion facts derived from session history.
///
/// Facts carry no unlock state; gating is assigned in the single
/// left-to-right assembly pass so it can never disagree with itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelFacts {
    game: GameDefinition,
    best_accuracy: f64,
    cleared: bool,
    stars: u8,
}

impl LevelFacts {
    pub fn game(&self) -> &GameDefinition {
        &self.game
    }

    /// Best clamped accuracy over completed sessions; `0` when unattempted.
    pub fn best_accuracy(&self) -> f64 {
        self.best_accuracy
    }

    /// Whether the best accuracy meets the pass threshold.
    pub fn cleared(&self) -> bool {
        self.cleared
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }
}

/// Star rating for a given accuracy: one star per threshold met.
///
/// Accuracy exactly at a threshold earns the star.
pub fn stars_for(accuracy: f64, config: &MapConfig) -> u8 {
    config
        .star_thresholds
        .iter()
        .filter(|threshold| accuracy >= **threshold)
        .count() as u8
}

/// Derives per-level facts for a catalog in play order.
///
/// Normalization, never errors (bad runtime data is sanitized):
/// - duplicate catalog ids keep the first occurrence only
/// - sessions referencing unknown game ids are ignored
/// - abandoned sessions never count
/// - accuracy is clamped into `[0, 1]` before comparison
pub fn classify(
    games: &[GameDefinition],
    sessions: &[ExerciseSession],
    config: &MapConfig,
) -> Vec<LevelFacts> {
    let mut seen = BTreeSet::<&str>::new();
    let catalog = games
        .iter()
        .filter(|game| seen.insert(game.id().as_str()))
        .collect::<Vec<_>>();

    let known_ids = catalog
        .iter()
        .map(|game| game.id().as_str())
        .collect::<BTreeSet<_>>();

    let mut best_by_game = BTreeMap::<&str, f64>::new();
    for session in sessions {
        if !session.is_completed() {
            continue;
        }
        let game_id = session.game_id().as_str();
        if !known_ids.contains(game_id) {
            continue;
        }
        let accuracy = session.clamped_accuracy();
        let best = best_by_game.entry(game_id).or_insert(0.0);
        if accuracy > *best {
            *best = accuracy;
        }
    }

    catalog
        .into_iter()
        .map(|game| {
            let best_accuracy = best_by_game
                .get(game.id().as_str())
                .copied()
                .unwrap_or(0.0);
            LevelFacts {
                game: game.clone(),
                best_accuracy,
                cleared: best_accuracy >= config.pass_threshold,
                stars: stars_for(best_accuracy, config),
            }
        })
        .collect()
}
