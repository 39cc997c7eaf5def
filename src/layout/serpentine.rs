// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::{CanvasSize, MapConfig};
use crate::model::{MapNode, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The configured wrap width or row gap packs node centers closer than
    /// the minimum separation on this canvas. A programmer error: pick a
    /// bigger canvas or a smaller wrap width.
    SeparationTooTight {
        axis: &'static str,
        spacing: f64,
        required: f64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparationTooTight {
                axis,
                spacing,
                required,
            } => write!(
                f,
                "{axis} spacing {spacing} is below the minimum node separation {required}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Deterministic serpentine placement over a bounded canvas.
///
/// Nodes fill rows of `nodes_per_row` slots; odd rows run right-to-left so
/// consecutive nodes stay adjacent and the trail winds like a board-game
/// path. Spacing depends on canvas size and configuration only, never on the
/// node count beyond wrapping into further rows, so the same
/// `(node count, canvas)` pair always yields bit-identical positions.
pub fn layout_serpentine(
    mut nodes: Vec<MapNode>,
    canvas: CanvasSize,
    config: &MapConfig,
) -> Result<Vec<MapNode>, LayoutError> {
    let per_row = config.nodes_per_row.max(1);

    let margin_x = canvas.width() * config.horizontal_margin_frac;
    let top = canvas.height() * config.vertical_margin_frac;
    let usable_width = canvas.width() - 2.0 * margin_x;
    let row_gap = canvas.height() * config.row_gap_frac;

    let slot_gap = if per_row > 1 {
        usable_width / (per_row - 1) as f64
    } else {
        0.0
    };

    let columns_used = nodes.len().min(per_row);
    if columns_used > 1 && slot_gap < config.min_node_separation {
        return Err(LayoutError::SeparationTooTight {
            axis: "column",
            spacing: slot_gap,
            required: config.min_node_separation,
        });
    }
    if nodes.len() > per_row && row_gap < config.min_node_separation {
        return Err(LayoutError::SeparationTooTight {
            axis: "row",
            spacing: row_gap,
            required: config.min_node_separation,
        });
    }

    for (idx, node) in nodes.iter_mut().enumerate() {
        let row = idx / per_row;
        let column = idx % per_row;
        // Odd rows run right-to-left.
        let column = if row % 2 == 1 {
            per_row - 1 - column
        } else {
            column
        };

        let x = if per_row > 1 {
            margin_x + column as f64 * slot_gap
        } else {
            canvas.width() / 2.0
        };
        let y = top + row as f64 * row_gap;
        node.set_position(Position::new(x, y));
    }

    Ok(nodes)
}
