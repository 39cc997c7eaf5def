// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use super::game::{AgeRange, DeficitArea, GameDefinition};
use super::ids::GameId;
use super::session::{ExerciseSession, SessionStatus};

fn gid(value: &str) -> GameId {
    GameId::new(value).expect("game id")
}

/// A seven-game phonological-awareness catalog in play order.
pub(crate) fn catalog_seven() -> Vec<GameDefinition> {
    [
        ("sound_safari", "Sound Safari"),
        ("rhyme_time_race", "Rhyme Time Race"),
        ("syllable_stomper", "Syllable Stomper"),
        ("phoneme_blender", "Phoneme Blender"),
        ("sound_swap", "Sound Swap"),
        ("sound_matching", "Sound Matching"),
        ("first_sound_fishing", "First Sound Fishing"),
    ]
    .iter()
    .enumerate()
    .map(|(idx, (id, name))| {
        GameDefinition::new(
            gid(id),
            *name,
            format!("{name} exercise"),
            DeficitArea::PhonologicalAwareness,
            idx as u8 + 1,
            AgeRange { min: 4, max: 10 },
        )
    })
    .collect()
}

pub(crate) fn completed(game_id: &str, accuracy: f64) -> ExerciseSession {
    ExerciseSession::new(gid(game_id), accuracy, SessionStatus::Completed, 1_756_400_000)
}

pub(crate) fn abandoned(game_id: &str, accuracy: f64) -> ExerciseSession {
    ExerciseSession::new(gid(game_id), accuracy, SessionStatus::Abandoned, 1_756_400_000)
}

/// History that clears the first five catalog games with top-star accuracy.
pub(crate) fn history_first_five_aced() -> Vec<ExerciseSession> {
    [
        "sound_safari",
        "rhyme_time_race",
        "syllable_stomper",
        "phoneme_blender",
        "sound_swap",
    ]
    .iter()
    .map(|id| completed(id, 0.95))
    .collect()
}
