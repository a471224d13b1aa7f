use assessment_schema::{AssessmentRecord, GameId, GameResult, Percent, Report, Student};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

mod analysis;
pub mod catalog;
mod classify;
mod error;
mod metrics;
mod recommend;
pub mod render;
pub mod scoring;
pub mod snapshot;
mod summary;
pub mod templates;

#[cfg(test)]
mod tests;

pub use catalog::{plan_for_age, PlannedGame};
pub use classify::{PerformanceTier, Standing};
pub use error::{SynthesisError, SynthesisErrorKind};
pub use metrics::domain_label;
pub use render::render_text;
pub use snapshot::{learning_snapshot, LearningSnapshot};

#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Completion time of the assessment; defaults to `generated_at`.
    pub assessment_date: Option<DateTime<Utc>>,
    /// Stamp for `Report::generated_at`; defaults to the wall clock.
    pub generated_at: Option<DateTime<Utc>>,
}

/// Options for [`generate_for_record`].
#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub synthesis: SynthesisOptions,
    /// Rebuild even when the record already carries a report.
    pub regenerate: bool,
}

pub fn synthesize(student: &Student, results: &[GameResult]) -> Result<Report, SynthesisError> {
    synthesize_with_options(student, results, &SynthesisOptions::default())
}

pub fn synthesize_with_options(
    student: &Student,
    results: &[GameResult],
    options: &SynthesisOptions,
) -> Result<Report, SynthesisError> {
    if results.is_empty() {
        return Err(SynthesisError::no_metrics().with_student(&student.name));
    }

    for r in results {
        if let GameId::Other(id) = &r.game_id {
            warn!(game_id = %id, domain = %r.domain, "unrecognized game id; no game-specific metrics");
        }
    }

    let detailed_scores = metrics::derive_scores(results);
    let average_score = Percent::mean(detailed_scores.iter().map(|s| s.score))
        .ok_or_else(SynthesisError::no_metrics)?;
    let classification = classify::classify(&detailed_scores);
    let detailed_analysis = analysis::analyse(&detailed_scores);
    let recommendations = recommend::recommend(&detailed_scores);
    let executive_summary = summary::executive_summary(student, average_score, &classification);

    debug!(
        student = %student.name,
        domains = detailed_scores.len(),
        average = average_score.get(),
        strengths = classification.strengths.len(),
        development = classification.development.len(),
        recommendations = recommendations.len(),
        "synthesized report"
    );

    let generated_at = options.generated_at.unwrap_or_else(Utc::now);

    Ok(Report {
        student_name: student.name.clone(),
        age: student.age,
        assessment_date: options.assessment_date.unwrap_or(generated_at),
        generated_at,
        executive_summary,
        average_score,
        strengths: classification.strengths_or_fallback(),
        areas_for_development: classification.development_or_fallback(),
        detailed_scores,
        detailed_analysis,
        recommendations,
        next_steps: templates::NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Report for a stored assessment: the existing one unless regeneration is
/// requested, otherwise a fresh synthesis from the record's results.
pub fn generate_for_record(
    record: &AssessmentRecord,
    options: &RecordOptions,
) -> Result<Report, SynthesisError> {
    if let (Some(existing), false) = (&record.report, options.regenerate) {
        debug!(student = %record.student_name, "reusing stored report");
        return Ok(existing.clone());
    }

    let options = SynthesisOptions {
        assessment_date: options.synthesis.assessment_date.or(record.completed_at),
        ..options.synthesis.clone()
    };
    synthesize_with_options(&record.student(), &record.results, &options)
        .map_err(|e| e.with_context("assessment record"))
}

