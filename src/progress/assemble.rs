// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use crate::config::MapConfig;
use crate::model::{ExerciseSession, GameDefinition, MapNode, NodeId, NodeKind, NodeState};

use super::classify::{classify, LevelFacts};

/// Splices castle checkpoints into the level sequence and assigns unlock
/// states in one left-to-right pass.
///
/// The pass tracks a single `still_unlocking` flag: it flips permanently the
/// moment `Current` is assigned, and everything after is `Locked`. That makes
/// "at most one node is Current" and "completed nodes form a prefix" true by
/// construction rather than by reconciling independent scans.
///
/// Castle rules:
/// - a castle is `Completed` when every level since the previous castle is
///   completed and the next level was cleared (the trail moved past it)
/// - it is `Current` when its group is complete but progression has not moved
///   past it, superseding any would-be current level
/// - otherwise it is `Locked`
/// - a trailing castle is always appended, even when the final group is
///   shorter than the cadence: the full-area mastery challenge
pub fn assemble(levels: &[LevelFacts], config: &MapConfig) -> Vec<MapNode> {
    let cadence = config.checkpoint_cadence.max(1);

    let mut nodes = Vec::with_capacity(levels.len() + levels.len() / cadence + 1);
    let mut still_unlocking = true;
    let mut castle_count = 0u32;

    for (idx, level) in levels.iter().enumerate() {
        let state = if still_unlocking {
            if level.cleared() {
                NodeState::Completed
            } else {
                still_unlocking = false;
                NodeState::Current
            }
        } else {
            NodeState::Locked
        };

        nodes.push(level_node(level, idx as u32 + 1, state));

        let group_end = (idx + 1) % cadence == 0 || idx + 1 == levels.len();
        if group_end {
            castle_count += 1;
            let state = if still_unlocking {
                // Every level so far is completed. The trail moved past this
                // castle only if the next level was itself cleared.
                let next_cleared = levels.get(idx + 1).map(LevelFacts::cleared).unwrap_or(false);
                if next_cleared {
                    NodeState::Completed
                } else {
                    still_unlocking = false;
                    NodeState::Current
                }
            } else {
                NodeState::Locked
            };
            nodes.push(castle_node(castle_count, state));
        }
    }

    nodes
}

/// Classifies the catalog against history and assembles the full node list.
pub fn build_nodes(
    games: &[GameDefinition],
    sessions: &[ExerciseSession],
    config: &MapConfig,
) -> Vec<MapNode> {
    let facts = classify(games, sessions, config);
    assemble(&facts, config)
}

fn level_node(level: &LevelFacts, level_number: u32, state: NodeState) -> MapNode {
    let game = level.game();
    MapNode::new(
        NodeId::new(game.id().as_str()).expect("game ids are valid node ids"),
        NodeKind::Level,
        game.name(),
        Some(game.id().clone()),
        Some(level_number),
        state,
        level.stars(),
        level.best_accuracy(),
    )
}

fn castle_node(castle_number: u32, state: NodeState) -> MapNode {
    MapNode::new(
        NodeId::new(format!("castle:{castle_number}")).expect("castle ids are valid"),
        NodeKind::Castle,
        format!("Castle {castle_number}"),
        None,
        None,
        state,
        0,
        0.0,
    )
}
