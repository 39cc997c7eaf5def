// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Render-ready geometry: the SVG road through the nodes and the scenery
//! scatter around it. Stroking, theming, and sprite choice belong to the
//! rendering collaborator.

pub mod decorations;
pub mod path;

pub use decorations::{decorations_for, RoadCorridor};
pub use path::{CurveSegment, RoadGeometry};
