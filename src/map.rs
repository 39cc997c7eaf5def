// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Map assembly: catalog + history in, render-ready map out.

use std::fmt;

use serde::Serialize;

use crate::config::{CanvasSize, ConfigError, MapConfig};
use crate::layout::{layout_serpentine, LayoutError};
use crate::model::{Decoration, ExerciseSession, GameDefinition, MapNode, Position};
use crate::progress::build_nodes;
use crate::render::{decorations_for, RoadCorridor, RoadGeometry};

/// Everything the rendering collaborator needs for one world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdventureMap {
    nodes: Vec<MapNode>,
    full_path: String,
    completed_path: String,
    decorations: Vec<Decoration>,
}

impl AdventureMap {
    /// Ordered node list with state, stars, and positions populated.
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// SVG path data for the whole road.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// SVG path data for the completed overlay; empty when nothing is
    /// completed. Always a prefix of the full road.
    pub fn completed_path(&self) -> &str {
        &self.completed_path
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    Config(ConfigError),
    Layout(LayoutError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Layout(err) => write!(f, "layout failed: {err}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<ConfigError> for MapError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LayoutError> for MapError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Builds the full adventure map for one world.
///
/// Pure and synchronous: the same `(games, sessions, world_index, canvas,
/// config)` always yields the same map, so callers may invoke it on every
/// render. Malformed runtime data (unknown game ids, out-of-range accuracy,
/// duplicate catalog entries) is sanitized; invalid configuration or a
/// degenerate canvas is a programmer error and fails fast.
pub fn build_map(
    games: &[GameDefinition],
    sessions: &[ExerciseSession],
    world_index: u32,
    canvas: CanvasSize,
    config: &MapConfig,
) -> Result<AdventureMap, MapError> {
    config.validate()?;

    let nodes = build_nodes(games, sessions, config);
    let nodes = layout_serpentine(nodes, canvas, config)?;

    let positions = nodes.iter().map(MapNode::position).collect::<Vec<Position>>();
    let road = RoadGeometry::new(&positions);

    let last_completed = nodes.iter().rposition(MapNode::is_completed);
    let full_path = road.full_svg_path();
    let completed_path = road.partial_svg_path(last_completed);

    let corridor = RoadCorridor::new(&road, &nodes);
    let decorations = decorations_for(world_index, canvas, &corridor, config);

    Ok(AdventureMap {
        nodes,
        full_path,
        completed_path,
        decorations,
    })
}
