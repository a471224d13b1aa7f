use assessment_schema::{Percent, Student};

use crate::{classify::Classification, classify::PerformanceTier, templates};

pub(crate) fn executive_summary(
    student: &Student,
    average: Percent,
    classification: &Classification,
) -> String {
    let mut summary = templates::summary_opening(&student.name, student.age);

    summary.push_str(&match PerformanceTier::of(average) {
        PerformanceTier::Excellent => templates::summary_excellent(average),
        PerformanceTier::Good => templates::summary_good(average),
        PerformanceTier::Moderate => templates::summary_moderate(average),
        PerformanceTier::NeedsDevelopment => templates::summary_needs_development(average),
    });

    if !classification.strengths.is_empty() {
        summary.push_str(&templates::summary_strength_count(
            classification.strengths.len(),
        ));
    }
    if !classification.development.is_empty() {
        summary.push_str(&templates::summary_development_count(
            classification.development.len(),
        ));
    }

    summary.push_str(templates::SUMMARY_CLOSING);
    summary
}
