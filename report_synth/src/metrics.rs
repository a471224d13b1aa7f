use assessment_schema::{DetailedScore, Domain, GameId, GameResult, Metric};
use serde_json::Value;

/// Counters a known mini-game reports, borrowed from the result.
///
/// Counters may be absent on malformed input; they stay `None` here and are
/// rendered leniently by the callers.
#[derive(Debug, Clone, Copy)]
pub(crate) enum GameStats<'a> {
    FocusTap {
        hits: Option<&'a Value>,
        misses: Option<&'a Value>,
        false_taps: Option<&'a Value>,
    },
    SpotDifference {
        correct: Option<&'a Value>,
        wrong: Option<&'a Value>,
    },
    MemoryPath {
        correct_rounds: Option<&'a Value>,
        max_sequence_length: Option<&'a Value>,
    },
    Unknown,
}

impl<'a> GameStats<'a> {
    pub(crate) fn of(result: &'a GameResult) -> Self {
        match &result.game_id {
            GameId::FocusTap => GameStats::FocusTap {
                hits: result.counter("hits"),
                misses: result.counter("misses"),
                false_taps: result.counter("falseTaps"),
            },
            GameId::SpotDifference => GameStats::SpotDifference {
                correct: result.counter("correct"),
                wrong: result.counter("wrong"),
            },
            GameId::MemoryPath => GameStats::MemoryPath {
                correct_rounds: result.counter("correctRounds"),
                max_sequence_length: result.counter("maxSequenceLength"),
            },
            GameId::Other(_) => GameStats::Unknown,
        }
    }
}

/// Human label for a domain: `impulse_control` -> `Impulse Control`.
pub fn domain_label(domain: &Domain) -> String {
    match domain {
        Domain::WorkingMemory => "Working Memory".to_string(),
        Domain::VisualAttention => "Visual Attention".to_string(),
        other => title_case(&other.as_str().replace('_', " ")),
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}

/// Text form of a counter; absent counters render blank.
pub(crate) fn counter_text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_text(n),
        Some(other) => other.to_string(),
    }
}

/// Whole-valued floats print without a fraction (`9.0` as `9`).
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Text form of a counter with falsy values (absent, 0, "", false) shown as 0.
pub(crate) fn count_or_zero(v: Option<&Value>) -> String {
    if is_truthy(v) {
        counter_text(v)
    } else {
        "0".to_string()
    }
}

fn is_truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub(crate) fn rounds_text(result: &GameResult) -> String {
    result
        .total_rounds
        .map(|r| r.to_string())
        .unwrap_or_default()
}

fn fraction(done: Option<&Value>, result: &GameResult) -> Value {
    Value::String(format!("{}/{}", counter_text(done), rounds_text(result)))
}

fn raw(v: Option<&Value>) -> Value {
    v.cloned().unwrap_or(Value::Null)
}

pub(crate) fn game_metrics(result: &GameResult) -> Vec<Metric> {
    let mut metrics = Vec::new();

    if result.avg_reaction != 0 {
        metrics.push(Metric::new(
            "Avg Reaction Time",
            format!("{}ms", result.avg_reaction),
        ));
    }

    match GameStats::of(result) {
        GameStats::FocusTap {
            hits,
            misses,
            false_taps,
        } => {
            metrics.push(Metric::new("Hits", fraction(hits, result)));
            metrics.push(Metric::new("Misses", raw(misses)));
            metrics.push(Metric::new("False Taps", raw(false_taps)));
        }
        GameStats::SpotDifference { correct, wrong } => {
            metrics.push(Metric::new("Correct", fraction(correct, result)));
            metrics.push(Metric::new("Wrong", raw(wrong)));
        }
        GameStats::MemoryPath {
            correct_rounds,
            max_sequence_length,
        } => {
            metrics.push(Metric::new("Correct Rounds", fraction(correct_rounds, result)));
            metrics.push(Metric::new("Max Sequence", raw(max_sequence_length)));
        }
        GameStats::Unknown => {}
    }

    metrics
}

pub(crate) fn derive_scores(results: &[GameResult]) -> Vec<DetailedScore> {
    results
        .iter()
        .map(|result| DetailedScore {
            name: domain_label(&result.domain),
            domain: result.domain.clone(),
            game_used: result.game_used(),
            score: result.accuracy,
            metrics: game_metrics(result),
            raw_data: result.clone(),
        })
        .collect()
}
