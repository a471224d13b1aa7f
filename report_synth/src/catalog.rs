use assessment_schema::{Domain, GameId};
use serde::Serialize;

/// One mini-game scheduled for a session, with its age-scaled difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedGame {
    pub game_id: GameId,
    pub name: &'static str,
    pub domain: Domain,
    pub total_rounds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_sequence_length: Option<u32>,
}

fn focus_tap(age: u32) -> PlannedGame {
    PlannedGame {
        game_id: GameId::FocusTap,
        name: if age <= 3 { "Tap the Star" } else { "Focus Tap" },
        domain: Domain::Attention,
        total_rounds: match age {
            0..=3 => 8,
            4..=6 => 12,
            _ => 16,
        },
        start_sequence_length: None,
    }
}

fn spot_difference(age: u32) -> PlannedGame {
    PlannedGame {
        game_id: GameId::SpotDifference,
        name: "Spot the Difference",
        domain: Domain::VisualAttention,
        total_rounds: match age {
            0..=4 => 6,
            5..=7 => 10,
            _ => 14,
        },
        start_sequence_length: None,
    }
}

fn memory_path(age: u32) -> PlannedGame {
    let (total_rounds, start) = match age {
        0..=4 => (6, 2),
        5..=7 => (8, 3),
        _ => (10, 4),
    };
    PlannedGame {
        game_id: GameId::MemoryPath,
        name: if age <= 3 { "Follow the Path" } else { "Memory Path" },
        domain: Domain::WorkingMemory,
        total_rounds,
        start_sequence_length: Some(start),
    }
}

/// Games to run, in order, for a child of `age`.
pub fn plan_for_age(age: u32) -> Vec<PlannedGame> {
    if age <= 3 {
        vec![focus_tap(age), memory_path(age)]
    } else {
        vec![focus_tap(age), spot_difference(age), memory_path(age)]
    }
}
