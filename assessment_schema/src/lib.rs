use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt};

/// Game-specific counters (hits, wrong, maxSequenceLength, ...) kept verbatim.
pub type Counters = BTreeMap<String, serde_json::Value>;

/// Integer percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Rounds a ratio in `0.0..=1.0` to the nearest whole percent, half up.
    pub fn from_ratio(ratio: f64) -> Self {
        let pct = (ratio * 100.0).round().clamp(0.0, Self::MAX as f64);
        Self(pct as u8)
    }

    /// Mean rounded half up, or `None` for an empty input.
    pub fn mean<I: IntoIterator<Item = Percent>>(values: I) -> Option<Self> {
        let (sum, n) = values
            .into_iter()
            .fold((0u64, 0u64), |(sum, n), p| (sum + p.0 as u64, n + 1));
        if n == 0 {
            return None;
        }
        // Integer form of round(sum / n); the mean of 0..=100 values stays in range.
        Some(Self(((2 * sum + n) / (2 * n)) as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("percentage must be within 0..=100, got {value}"))
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameId {
    FocusTap,
    SpotDifference,
    MemoryPath,
    /// A mini-game this version does not know how to describe.
    Other(String),
}

impl GameId {
    pub fn as_str(&self) -> &str {
        match self {
            GameId::FocusTap => "focus_tap",
            GameId::SpotDifference => "spot_difference",
            GameId::MemoryPath => "memory_path",
            GameId::Other(id) => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            GameId::FocusTap => "Focus Tap",
            GameId::SpotDifference => "Spot the Difference",
            GameId::MemoryPath => "Memory Path",
            GameId::Other(id) => id,
        }
    }
}

impl From<String> for GameId {
    fn from(s: String) -> Self {
        match s.as_str() {
            "focus_tap" => GameId::FocusTap,
            "spot_difference" => GameId::SpotDifference,
            "memory_path" => GameId::MemoryPath,
            _ => GameId::Other(s),
        }
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        match id {
            GameId::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Domain {
    Attention,
    VisualAttention,
    WorkingMemory,
    Memory,
    Processing,
    ImpulseControl,
    Other(String),
}

impl Domain {
    pub fn as_str(&self) -> &str {
        match self {
            Domain::Attention => "attention",
            Domain::VisualAttention => "visual_attention",
            Domain::WorkingMemory => "working_memory",
            Domain::Memory => "memory",
            Domain::Processing => "processing",
            Domain::ImpulseControl => "impulse_control",
            Domain::Other(d) => d,
        }
    }
}

impl From<String> for Domain {
    fn from(s: String) -> Self {
        match s.as_str() {
            "attention" => Domain::Attention,
            "visual_attention" => Domain::VisualAttention,
            "working_memory" => Domain::WorkingMemory,
            "memory" => Domain::Memory,
            "processing" => Domain::Processing,
            "impulse_control" => Domain::ImpulseControl,
            _ => Domain::Other(s),
        }
    }
}

impl From<Domain> for String {
    fn from(d: Domain) -> Self {
        match d {
            Domain::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed mini-game, as emitted by the game runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub game_id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    pub domain: Domain,
    pub accuracy: Percent,
    /// Mean latency of successful trials in ms; 0 when there were none.
    #[serde(default)]
    pub avg_reaction: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub counters: Counters,
}

impl GameResult {
    pub fn counter(&self, key: &str) -> Option<&serde_json::Value> {
        self.counters.get(key)
    }

    pub fn game_used(&self) -> String {
        self.game_name
            .clone()
            .unwrap_or_else(|| self.game_id.display_name().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(deserialize_with = "non_empty_string")]
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    /// Text such as `"12/16"`, a raw counter, or null when the counter is absent.
    pub value: serde_json::Value,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Color band used when a detailed score is displayed or exported.
///
/// Its 80/60 breaks are a presentation concern and do not follow the
/// strength/development classification of the report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationBand {
    Green,
    Amber,
    Red,
}

impl PresentationBand {
    pub const GREEN_FROM: u8 = 80;
    pub const AMBER_FROM: u8 = 60;

    pub fn for_score(score: Percent) -> Self {
        match score.get() {
            s if s >= Self::GREEN_FROM => PresentationBand::Green,
            s if s >= Self::AMBER_FROM => PresentationBand::Amber,
            _ => PresentationBand::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresentationBand::Green => "Excellent",
            PresentationBand::Amber => "Satisfactory",
            PresentationBand::Red => "Needs Improvement",
        }
    }

    pub fn hex_color(self) -> &'static str {
        match self {
            PresentationBand::Green => "16A34A",
            PresentationBand::Amber => "CA8A04",
            PresentationBand::Red => "DC2626",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedScore {
    pub name: String,
    pub domain: Domain,
    pub game_used: String,
    pub score: Percent,
    pub metrics: Vec<Metric>,
    pub raw_data: GameResult,
}

impl DetailedScore {
    pub fn band(&self) -> PresentationBand {
        PresentationBand::for_score(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainObservation {
    pub domain: String,
    pub observation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub student_name: String,
    pub age: u32,
    pub assessment_date: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub executive_summary: String,
    pub detailed_scores: Vec<DetailedScore>,
    pub average_score: Percent,
    pub strengths: Vec<String>,
    pub areas_for_development: Vec<String>,
    pub detailed_analysis: Vec<DomainObservation>,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    GamesCompleted,
    ReportGenerated,
}

/// An assessment session as persisted by the student store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    #[serde(deserialize_with = "non_empty_string")]
    pub student_name: String,
    pub student_age: u32,
    #[serde(default)]
    pub results: Vec<GameResult>,
    #[serde(default)]
    pub status: AssessmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl AssessmentRecord {
    pub fn student(&self) -> Student {
        Student {
            name: self.student_name.clone(),
            age: self.student_age,
        }
    }

    /// Stores `report`, replacing any earlier one.
    pub fn attach_report(&mut self, report: Report) {
        self.report = Some(report);
        self.status = AssessmentStatus::ReportGenerated;
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("student name must be non-empty"));
    }
    Ok(s)
}
