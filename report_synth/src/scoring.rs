use assessment_schema::{Counters, Domain, GameId, GameResult, Percent};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::catalog::PlannedGame;

/// Raw tallies collected while a mini-game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTally {
    FocusTap {
        hits: u32,
        misses: u32,
        false_taps: u32,
        reaction_times_ms: Vec<u64>,
    },
    SpotDifference {
        correct: u32,
        wrong: u32,
        reaction_times_ms: Vec<u64>,
    },
    MemoryPath {
        correct_rounds: u32,
        max_sequence_length: u32,
        reaction_times_ms: Vec<u64>,
    },
}

impl SessionTally {
    pub fn game_id(&self) -> GameId {
        match self {
            SessionTally::FocusTap { .. } => GameId::FocusTap,
            SessionTally::SpotDifference { .. } => GameId::SpotDifference,
            SessionTally::MemoryPath { .. } => GameId::MemoryPath,
        }
    }

    fn reaction_times(&self) -> &[u64] {
        match self {
            SessionTally::FocusTap {
                reaction_times_ms, ..
            }
            | SessionTally::SpotDifference {
                reaction_times_ms, ..
            }
            | SessionTally::MemoryPath {
                reaction_times_ms, ..
            } => reaction_times_ms,
        }
    }
}

/// Rounded mean of successful reaction times, 0 when there were none.
pub fn average_reaction(times_ms: &[u64]) -> u64 {
    if times_ms.is_empty() {
        return 0;
    }
    let sum = times_ms.iter().fold(0u64, |acc, &t| acc.saturating_add(t));
    (sum as f64 / times_ms.len() as f64).round() as u64
}

fn ratio(part: u32, whole: u64) -> f64 {
    part as f64 / whole.max(1) as f64
}

pub fn accuracy(tally: &SessionTally, total_rounds: u32) -> Percent {
    match tally {
        SessionTally::FocusTap {
            hits,
            misses,
            false_taps,
            ..
        } => {
            let attempts = u64::from(*hits) + u64::from(*misses) + u64::from(*false_taps);
            Percent::from_ratio(ratio(*hits, attempts))
        }
        SessionTally::SpotDifference { correct, .. } => {
            Percent::from_ratio(ratio(*correct, total_rounds.into()))
        }
        SessionTally::MemoryPath { correct_rounds, .. } => {
            Percent::from_ratio(ratio(*correct_rounds, total_rounds.into()))
        }
    }
}

fn counters(tally: &SessionTally) -> Counters {
    let mut out = Counters::new();
    match tally {
        SessionTally::FocusTap {
            hits,
            misses,
            false_taps,
            ..
        } => {
            out.insert("hits".into(), Value::from(*hits));
            out.insert("misses".into(), Value::from(*misses));
            out.insert("falseTaps".into(), Value::from(*false_taps));
        }
        SessionTally::SpotDifference { correct, wrong, .. } => {
            out.insert("correct".into(), Value::from(*correct));
            out.insert("wrong".into(), Value::from(*wrong));
        }
        SessionTally::MemoryPath {
            correct_rounds,
            max_sequence_length,
            ..
        } => {
            out.insert("correctRounds".into(), Value::from(*correct_rounds));
            out.insert("maxSequenceLength".into(), Value::from(*max_sequence_length));
        }
    }
    out
}

/// Builds the result record a finished mini-game hands to the session.
pub fn finish_game(plan: &PlannedGame, tally: &SessionTally, finished_at: DateTime<Utc>) -> GameResult {
    let game_id = tally.game_id();
    if plan.game_id != game_id {
        warn!(planned = %plan.game_id, played = %game_id, "tally does not match planned game");
    }

    // Results carry the fixed game name; the age-scaled title is for the plan only.
    GameResult {
        domain: game_domain(&game_id, plan),
        game_name: Some(game_id.display_name().to_string()),
        game_id,
        accuracy: accuracy(tally, plan.total_rounds),
        avg_reaction: average_reaction(tally.reaction_times()),
        total_rounds: Some(plan.total_rounds),
        timestamp: Some(finished_at),
        counters: counters(tally),
    }
}

fn game_domain(game_id: &GameId, plan: &PlannedGame) -> Domain {
    match game_id {
        GameId::FocusTap => Domain::Attention,
        GameId::SpotDifference => Domain::VisualAttention,
        GameId::MemoryPath => Domain::WorkingMemory,
        GameId::Other(_) => plan.domain.clone(),
    }
}
