// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use questmap::config::{CanvasSize, MapConfig};
use questmap::map::build_map;
use questmap::model::{
    AgeRange, DeficitArea, ExerciseSession, GameDefinition, GameId, MapNode, NodeKind, NodeState,
    SessionStatus,
};

fn gid(value: &str) -> GameId {
    GameId::new(value).unwrap_or_else(|err| panic!("bad game id {value}: {err}"))
}

fn catalog_of(ids: &[&str]) -> Vec<GameDefinition> {
    ids.iter()
        .enumerate()
        .map(|(idx, id)| {
            GameDefinition::new(
                gid(id),
                format!("Level {}", idx + 1),
                format!("Exercise {id}"),
                DeficitArea::PhonologicalAwareness,
                idx as u8 + 1,
                AgeRange { min: 4, max: 10 },
            )
        })
        .collect()
}

fn seven_games() -> Vec<GameDefinition> {
    catalog_of(&["g1", "g2", "g3", "g4", "g5", "g6", "g7"])
}

fn completed(game_id: &str, accuracy: f64) -> ExerciseSession {
    ExerciseSession::new(gid(game_id), accuracy, SessionStatus::Completed, 1_756_400_000)
}

fn canvas() -> CanvasSize {
    CanvasSize::new(800.0, 600.0).expect("canvas")
}

fn states(nodes: &[MapNode]) -> Vec<NodeState> {
    nodes.iter().map(MapNode::state).collect()
}

#[test]
fn fresh_world_seven_games_two_castles_first_level_current() {
    let map = build_map(&seven_games(), &[], 0, canvas(), &MapConfig::default()).expect("map");

    let nodes = map.nodes();
    assert_eq!(nodes.len(), 9);
    assert_eq!(
        nodes.iter().filter(|n| n.kind() == NodeKind::Castle).count(),
        2
    );
    assert_eq!(nodes[5].kind(), NodeKind::Castle);
    assert_eq!(nodes[8].kind(), NodeKind::Castle);

    assert_eq!(nodes[0].state(), NodeState::Current);
    assert!(nodes[1..]
        .iter()
        .all(|node| node.state() == NodeState::Locked));
}

#[test]
fn five_aced_levels_make_the_first_castle_current() {
    let sessions = ["g1", "g2", "g3", "g4", "g5"]
        .iter()
        .map(|id| completed(id, 0.95))
        .collect::<Vec<_>>();

    let map = build_map(&seven_games(), &sessions, 0, canvas(), &MapConfig::default())
        .expect("map");

    let nodes = map.nodes();
    assert_eq!(
        states(nodes),
        vec![
            NodeState::Completed,
            NodeState::Completed,
            NodeState::Completed,
            NodeState::Completed,
            NodeState::Completed,
            NodeState::Current,
            NodeState::Locked,
            NodeState::Locked,
            NodeState::Locked,
        ]
    );
    assert!(nodes[..5].iter().all(|node| node.stars() == 3));
}

#[test]
fn overrange_accuracy_is_clamped_and_ghost_sessions_are_ignored() {
    let sessions = vec![completed("g1", 1.4), completed("ghost", 0.99)];

    let map = build_map(&seven_games(), &sessions, 0, canvas(), &MapConfig::default())
        .expect("map");

    let nodes = map.nodes();
    assert_eq!(nodes[0].best_accuracy(), 1.0);
    assert_eq!(nodes[0].stars(), 3);
    assert!(nodes[1..]
        .iter()
        .all(|node| node.best_accuracy() == 0.0));
}

#[test]
fn node_count_matches_catalog_plus_checkpoint_arithmetic() {
    let config = MapConfig::default();
    for game_count in [1usize, 4, 5, 6, 10, 11, 17] {
        let ids = (0..game_count).map(|i| format!("g{i}")).collect::<Vec<_>>();
        let refs = ids.iter().map(String::as_str).collect::<Vec<_>>();
        let games = catalog_of(&refs);

        let map = build_map(&games, &[], 0, canvas(), &config).expect("map");

        let cadence = config.checkpoint_cadence;
        let castles = (game_count + cadence - 1) / cadence;
        assert_eq!(
            map.nodes().len(),
            game_count + castles,
            "game_count = {game_count}"
        );
    }
}

#[test]
fn at_most_one_current_node_across_progressions() {
    let games = seven_games();
    let all_ids = ["g1", "g2", "g3", "g4", "g5", "g6", "g7"];

    // Replay the whole progression one cleared level at a time.
    for cleared in 0..=all_ids.len() {
        let sessions = all_ids[..cleared]
            .iter()
            .map(|id| completed(id, 0.8))
            .collect::<Vec<_>>();
        let map = build_map(&games, &sessions, 0, canvas(), &MapConfig::default()).expect("map");

        let current = map
            .nodes()
            .iter()
            .filter(|node| node.state() == NodeState::Current)
            .count();
        assert!(current <= 1, "cleared = {cleared}");
    }
}

#[test]
fn completed_overlay_sits_exactly_on_the_road() {
    let sessions = ["g1", "g2", "g3"]
        .iter()
        .map(|id| completed(id, 0.7))
        .collect::<Vec<_>>();

    let map = build_map(&seven_games(), &sessions, 0, canvas(), &MapConfig::default())
        .expect("map");

    assert!(map.full_path().starts_with(map.completed_path()));
}

#[test]
fn rebuilding_the_same_world_is_bit_identical() {
    let games = seven_games();
    let sessions = vec![completed("g1", 0.66)];
    let config = MapConfig::default();

    let first = build_map(&games, &sessions, 9, canvas(), &config).expect("map");
    let second = build_map(&games, &sessions, 9, canvas(), &config).expect("map");

    assert_eq!(first, second);
}

#[test]
fn catalog_and_history_parse_from_collaborator_documents() {
    let games: Vec<GameDefinition> = serde_json::from_str(
        r#"[
            {
                "id": "sound_safari",
                "name": "Sound Safari",
                "description": "Identify sounds in words.",
                "area": "phonological_awareness",
                "difficulty": 1,
                "age_range": { "min": 4, "max": 8 }
            },
            {
                "id": "rhyme_time_race",
                "name": "Rhyme Time Race",
                "description": "Match rhyming word pairs.",
                "area": "phonological_awareness",
                "difficulty": 2,
                "age_range": { "min": 5, "max": 10 }
            }
        ]"#,
    )
    .expect("catalog document");

    let sessions: Vec<ExerciseSession> = serde_json::from_str(
        r#"[
            {
                "game_id": "sound_safari",
                "accuracy": 0.92,
                "status": "completed",
                "completed_at": 1756400000
            },
            {
                "game_id": "sound_safari",
                "accuracy": 0.41,
                "status": "abandoned",
                "completed_at": 1756300000
            }
        ]"#,
    )
    .expect("history document");

    let map = build_map(&games, &sessions, 1, canvas(), &MapConfig::default()).expect("map");

    let nodes = map.nodes();
    assert_eq!(nodes.len(), 3); // 2 levels + trailing castle
    assert_eq!(nodes[0].state(), NodeState::Completed);
    assert_eq!(nodes[0].stars(), 3);
    assert_eq!(nodes[1].state(), NodeState::Current);
}
