// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

//! Policy constants for progression and geometry.
//!
//! Pass/star thresholds and checkpoint cadence are product policy, not
//! derivable facts, so they live here as tunable configuration with documented
//! defaults instead of constants buried in algorithm code.

use std::fmt;

/// Tuning knobs for map derivation and layout.
///
/// Values are validated once at the map-building entry point; invalid
/// configuration is a programmer error and fails fast, unlike malformed
/// runtime data which is sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Minimum best accuracy for a level to count as cleared.
    pub pass_threshold: f64,
    /// Ascending accuracy thresholds for one, two, and three stars.
    /// Accuracy exactly at a threshold earns the star.
    pub star_thresholds: [f64; 3],
    /// Number of level nodes between castle checkpoints.
    pub checkpoint_cadence: usize,
    /// Serpentine wrap width: nodes per row before the trail turns.
    pub nodes_per_row: usize,
    /// Horizontal margin on each side, as a fraction of canvas width.
    pub horizontal_margin_frac: f64,
    /// Top margin, as a fraction of canvas height.
    pub vertical_margin_frac: f64,
    /// Vertical distance between rows, as a fraction of canvas height.
    pub row_gap_frac: f64,
    /// Minimum distance between node centers, in canvas units.
    pub min_node_separation: f64,
    /// Target number of scenery decorations per world.
    pub decoration_count: usize,
    /// Exclusion radius around the road and node centers, in canvas units.
    pub decoration_clearance: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 0.5,
            star_thresholds: [0.5, 0.7, 0.9],
            checkpoint_cadence: 5,
            nodes_per_row: 5,
            horizontal_margin_frac: 0.10,
            vertical_margin_frac: 0.12,
            row_gap_frac: 0.18,
            min_node_separation: 60.0,
            decoration_count: 24,
            decoration_clearance: 48.0,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkpoint_cadence == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        if self.nodes_per_row == 0 {
            return Err(ConfigError::ZeroNodesPerRow);
        }

        let mut thresholds = vec![self.pass_threshold];
        thresholds.extend(self.star_thresholds);
        for value in thresholds {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { value });
            }
        }
        if self.star_thresholds[0] > self.star_thresholds[1]
            || self.star_thresholds[1] > self.star_thresholds[2]
        {
            return Err(ConfigError::StarThresholdsNotAscending {
                thresholds: self.star_thresholds,
            });
        }

        for (name, value) in [
            ("horizontal_margin_frac", self.horizontal_margin_frac),
            ("vertical_margin_frac", self.vertical_margin_frac),
            ("row_gap_frac", self.row_gap_frac),
        ] {
            if !value.is_finite() || !(0.0..0.5).contains(&value) {
                return Err(ConfigError::MarginFracOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("min_node_separation", self.min_node_separation),
            ("decoration_clearance", self.decoration_clearance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDistance { name, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroCadence,
    ZeroNodesPerRow,
    ThresholdOutOfRange { value: f64 },
    StarThresholdsNotAscending { thresholds: [f64; 3] },
    MarginFracOutOfRange { name: &'static str, value: f64 },
    NonPositiveDistance { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCadence => f.write_str("checkpoint cadence must be at least 1"),
            Self::ZeroNodesPerRow => f.write_str("nodes per row must be at least 1"),
            Self::ThresholdOutOfRange { value } => {
                write!(f, "threshold {value} must be within [0, 1]")
            }
            Self::StarThresholdsNotAscending { thresholds } => {
                write!(f, "star thresholds {thresholds:?} must be ascending")
            }
            Self::MarginFracOutOfRange { name, value } => {
                write!(f, "{name} = {value} must be within [0, 0.5)")
            }
            Self::NonPositiveDistance { name, value } => {
                write!(f, "{name} = {value} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Logical canvas the map is laid out on, in abstract canvas units.
///
/// Pixel/CSS scaling belongs to the renderer; this only anchors the
/// deterministic geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    width: f64,
    height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Result<Self, CanvasError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(CanvasError::Degenerate { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasError {
    Degenerate { width: f64, height: f64 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => {
                write!(f, "canvas {width}x{height} must be finite and positive")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
