// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Non-interactive scenery sprites scattered around the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    Tree,
    Bush,
    Rock,
    Flower,
    Signpost,
    Pond,
}

impl DecorationKind {
    pub(crate) const ALL: [DecorationKind; 6] = [
        DecorationKind::Tree,
        DecorationKind::Bush,
        DecorationKind::Rock,
        DecorationKind::Flower,
        DecorationKind::Signpost,
        DecorationKind::Pond,
    ];
}

/// One piece of scenery. Carries no gameplay state and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub x: f64,
    pub y: f64,
    /// Scale factor relative to the sprite's natural size.
    pub size: f64,
    /// Whether the renderer should mirror the sprite horizontally.
    pub flip: bool,
}
