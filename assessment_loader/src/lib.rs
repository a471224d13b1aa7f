use std::{fs, path::Path};

use anyhow::{ensure, Context};
use assessment_schema::{AssessmentRecord, GameResult};
use tracing::debug;

pub fn load_record_from_path(path: impl AsRef<Path>) -> anyhow::Result<AssessmentRecord> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("failed to read assessment: {}", path.display()))?;
    let record: AssessmentRecord = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse assessment json: {}", path.display()))?;
    debug!(path = %path.display(), results = record.results.len(), "loaded assessment record");
    Ok(record)
}

pub fn load_record_from_str(json: &str) -> anyhow::Result<AssessmentRecord> {
    let record: AssessmentRecord =
        serde_json::from_str(json).context("failed to parse assessment json")?;
    Ok(record)
}

/// Reads a bare JSON array of game results, in play order.
pub fn load_results_from_path(path: impl AsRef<Path>) -> anyhow::Result<Vec<GameResult>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("failed to read results: {}", path.display()))?;
    let results: Vec<GameResult> = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse results json: {}", path.display()))?;
    Ok(results)
}

pub fn save_record_to_path(record: &AssessmentRecord, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    ensure!(
        !record.student_name.trim().is_empty(),
        "refusing to save a record without a student name"
    );
    let json = serde_json::to_string_pretty(record).context("failed to serialize assessment")?;
    fs::write(path, json).with_context(|| format!("failed to write: {}", path.display()))?;
    Ok(())
}
