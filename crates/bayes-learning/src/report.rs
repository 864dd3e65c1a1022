//! JSON evaluation report for CLI and library output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::pipeline::{PipelineOutcome, PipelineSummary};

/// Evaluation report merging run metadata, the summary and the accuracy.
///
/// Use this for both JSON output (`--json`) and file writing
/// (`--emit-report`).
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the training table
    pub training_file: String,
    /// Path to the test table
    pub test_file: String,
    /// Path to the key table
    pub keys_file: String,
    /// Path to the written predictions file (if any)
    pub predictions_file: Option<String>,
    /// Accuracy on the test table, as a percentage
    pub accuracy: f64,
    /// Two-decimal display form of the accuracy
    pub accuracy_display: String,
    /// Detailed run summary
    pub summary: PipelineSummary,
}

impl EvaluationReport {
    /// Build a report from a pipeline outcome and the run's file paths.
    pub fn new(
        training_file: &str,
        test_file: &str,
        keys_file: &str,
        predictions_file: Option<String>,
        outcome: &PipelineOutcome,
    ) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            training_file: training_file.to_string(),
            test_file: test_file.to_string(),
            keys_file: keys_file.to_string(),
            predictions_file,
            accuracy: outcome.evaluation.accuracy(),
            accuracy_display: outcome.evaluation.accuracy_display(),
            summary: outcome.summary.clone(),
        }
    }

    /// Write the report as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;

        info!("Report written to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::PipelineConfig;
    use crate::pipeline::Pipeline;
    use bayes_processing::Table;
    use std::collections::HashMap;

    fn outcome() -> PipelineOutcome {
        let training = Table::new(vec![
            vec!["g1".into(), "A".into(), "loc1".into()],
            vec!["g2".into(), "B".into(), "loc2".into()],
        ])
        .unwrap();
        let test = Table::new(vec![vec!["t1".into(), "A".into(), "?".into()]]).unwrap();
        let keys: HashMap<String, String> = HashMap::from([("t1".into(), "loc1".into())]);

        Pipeline::builder()
            .config(PipelineConfig::default())
            .build()
            .unwrap()
            .run(training, test, &keys)
            .unwrap()
    }

    #[test]
    fn test_report_carries_accuracy() {
        let report = EvaluationReport::new("train.csv", "test.csv", "keys.txt", None, &outcome());
        assert_eq!(report.accuracy, 100.0);
        assert_eq!(report.accuracy_display, "100.00%");
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = EvaluationReport::new(
            "train.csv",
            "test.csv",
            "keys.txt",
            Some("predictions.csv".to_string()),
            &outcome(),
        );
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"accuracy_display\": \"100.00%\""));
        assert!(json.contains("\"predictions_file\": \"predictions.csv\""));
    }

    #[test]
    fn test_write_to_file_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/run_report.json");
        let report = EvaluationReport::new("train.csv", "test.csv", "keys.txt", None, &outcome());

        report.write_to_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("training_file"));
    }
}
