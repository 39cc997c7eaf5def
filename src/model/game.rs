// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::GameId;

/// The topic/skill category one catalog (and one map world) is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficitArea {
    PhonologicalAwareness,
    RapidNaming,
    WorkingMemory,
    VisualProcessing,
    ReadingFluency,
    Comprehension,
}

impl DeficitArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhonologicalAwareness => "phonological_awareness",
            Self::RapidNaming => "rapid_naming",
            Self::WorkingMemory => "working_memory",
            Self::VisualProcessing => "visual_processing",
            Self::ReadingFluency => "reading_fluency",
            Self::Comprehension => "comprehension",
        }
    }
}

impl fmt::Display for DeficitArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive age band a game is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

/// One playable exercise from the external catalog.
///
/// Catalog order within an area is play order; `difficulty` is only the
/// ordering hint the catalog used to produce that order, never re-applied here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDefinition {
    id: GameId,
    name: String,
    description: String,
    area: DeficitArea,
    difficulty: u8,
    age_range: AgeRange,
}

impl GameDefinition {
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        description: impl Into<String>,
        area: DeficitArea,
        difficulty: u8,
        age_range: AgeRange,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            area,
            difficulty,
            age_range,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn area(&self) -> DeficitArea {
        self.area
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn age_range(&self) -> AgeRange {
        self.age_range
    }
}
