// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Node placement on the map canvas.

pub mod serpentine;

pub use serpentine::{layout_serpentine, LayoutError};
