use std::fmt;

use assessment_schema::Report;
use serde_json::Value;

use crate::templates;

pub const NO_STRENGTHS: &str = "No major strengths identified yet";
pub const NO_CONCERNS: &str = "No critical concerns identified";
pub const NO_ANALYSIS: &str = "No detailed analysis available.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";
pub const NO_NEXT_STEPS: &str = "No next steps available.";

/// Plain-text view of a report for terminals and logs.
pub struct TextReport<'a>(pub &'a Report);

pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

fn metric_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bullets(f: &mut fmt::Formatter<'_>, items: &[String], empty: &str) -> fmt::Result {
    if items.is_empty() {
        return writeln!(f, "  ({empty})");
    }
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;

        writeln!(f, "Learning Assessment Report")?;
        writeln!(f, "Student: {}", r.student_name)?;
        writeln!(f, "Age: {}", r.age)?;
        writeln!(f, "Assessment Date: {}", r.assessment_date.format("%Y-%m-%d"))?;
        writeln!(f, "Average Score: {}%", r.average_score)?;
        writeln!(f)?;

        writeln!(f, "Executive Summary")?;
        writeln!(f, "  {}", r.executive_summary)?;
        writeln!(f)?;

        writeln!(f, "Detailed Scores")?;
        for s in &r.detailed_scores {
            let band = s.band();
            writeln!(
                f,
                "  - {} ({}): {}% [{}]",
                s.name,
                s.game_used,
                s.score,
                band.label()
            )?;
            for m in &s.metrics {
                writeln!(f, "      {}: {}", m.label, metric_value(&m.value))?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Strengths")?;
        bullets(f, &r.strengths, NO_STRENGTHS)?;
        writeln!(f)?;

        writeln!(f, "Areas for Development")?;
        bullets(f, &r.areas_for_development, NO_CONCERNS)?;
        writeln!(f)?;

        writeln!(f, "Detailed Analysis")?;
        if r.detailed_analysis.is_empty() {
            writeln!(f, "  ({NO_ANALYSIS})")?;
        }
        for a in &r.detailed_analysis {
            writeln!(f, "  - {}: {}", a.domain, a.observation)?;
        }
        writeln!(f)?;

        writeln!(f, "Recommendations")?;
        if r.recommendations.is_empty() {
            writeln!(f, "  ({NO_RECOMMENDATIONS})")?;
        }
        for (i, rec) in r.recommendations.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, rec.title)?;
            writeln!(f, "     {}", rec.description)?;
        }
        writeln!(f)?;

        writeln!(f, "Next Steps")?;
        if r.next_steps.is_empty() {
            writeln!(f, "  ({NO_NEXT_STEPS})")?;
        }
        for (i, step) in r.next_steps.iter().enumerate() {
            writeln!(f, "  {}. {step}", i + 1)?;
        }
        writeln!(f)?;

        writeln!(f, "Disclaimer")?;
        write!(f, "  {}", templates::DISCLAIMER)
    }
}
