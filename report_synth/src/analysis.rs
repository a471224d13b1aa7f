use assessment_schema::{DetailedScore, DomainObservation};
use serde_json::Value;

use crate::{
    classify::PerformanceTier,
    metrics::{count_or_zero, counter_text, GameStats},
    templates,
};

fn tier_opening(score: &DetailedScore) -> String {
    match PerformanceTier::of(score.score) {
        PerformanceTier::Excellent => templates::excellent_opening(&score.name),
        PerformanceTier::Good => templates::good_opening(&score.name),
        PerformanceTier::Moderate => templates::moderate_opening(&score.name),
        PerformanceTier::NeedsDevelopment => templates::needs_development_opening(&score.name),
    }
}

/// Numeric comparison against zero; numeric strings and `true` count too.
fn is_positive(v: Option<&Value>) -> bool {
    match v {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n > 0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().is_ok_and(|n| n > 0.0),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

fn game_fact(score: &DetailedScore) -> Option<String> {
    let data = &score.raw_data;
    let rounds = count_or_zero(data.total_rounds.map(Value::from).as_ref());

    match GameStats::of(data) {
        GameStats::FocusTap {
            hits, false_taps, ..
        } => {
            let premature = is_positive(false_taps).then(|| counter_text(false_taps));
            Some(templates::focus_tap_fact(
                &count_or_zero(hits),
                &rounds,
                premature.as_deref(),
            ))
        }
        GameStats::SpotDifference { correct, .. } => Some(templates::spot_difference_fact(
            &count_or_zero(correct),
            &rounds,
        )),
        GameStats::MemoryPath {
            correct_rounds,
            max_sequence_length,
        } => Some(templates::memory_path_fact(
            &count_or_zero(max_sequence_length),
            &count_or_zero(correct_rounds),
        )),
        GameStats::Unknown => None,
    }
}

pub(crate) fn observe(score: &DetailedScore) -> DomainObservation {
    let mut observation = tier_opening(score);
    if let Some(fact) = game_fact(score) {
        observation.push_str(&fact);
    }
    DomainObservation {
        domain: score.name.clone(),
        observation,
    }
}

pub(crate) fn analyse(scores: &[DetailedScore]) -> Vec<DomainObservation> {
    scores.iter().map(observe).collect()
}
