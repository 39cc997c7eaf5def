// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Questmap — adventure-map progression engine.
//!
//! Turns an ordered exercise catalog plus session history into a navigable
//! level graph: levels interspersed with castle checkpoints, each carrying an
//! unlock state, a star rating, and a deterministic 2-D position, plus SVG road
//! geometry connecting them. Everything here is a pure function of its inputs;
//! persistence, fetching, and rendering live in the embedding application.

pub mod config;
pub mod layout;
pub mod map;
pub mod model;
pub mod progress;
pub mod render;

pub use config::{CanvasError, CanvasSize, ConfigError, MapConfig};
pub use map::{build_map, AdventureMap, MapError};
