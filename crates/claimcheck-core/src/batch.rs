//! Batch verification over JSONL claim/evidence records.
//!
//! Each line holds one record: `{"claim": "...", "evidence": [...]}` where the
//! evidence array may mix bare strings and `{title, snippet}` objects.
//! Malformed lines are skipped and counted, never fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::evidence::EvidenceItem;
use crate::verifier::{ClaimVerifier, VerificationResult, Verdict};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub claim: String,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

/// Aggregate counters over one batch run.
#[derive(Debug, Default, Clone)]
pub struct BatchMetrics {
    pub total_records: usize,
    pub skipped_lines: usize,
    pub verified: usize,
    pub single_source: usize,
    pub unverified: usize,
    pub no_evidence: usize,
    pub average_confidence: f64,
}

impl BatchMetrics {
    pub fn record(&mut self, result: &VerificationResult) {
        self.total_records += 1;
        match result.verdict {
            Verdict::Verified => self.verified += 1,
            Verdict::SingleSource => self.single_source += 1,
            Verdict::Unverified => self.unverified += 1,
            Verdict::NoEvidence => self.no_evidence += 1,
        }
        self.average_confidence = ((self.average_confidence * (self.total_records - 1) as f64)
            + result.confidence)
            / self.total_records as f64;
    }

    pub fn summary(&self) -> String {
        format!(
            "checked {} claim(s) • {} verified • {} single-source • {} unverified • {} without evidence • avg confidence {:.2} • {} line(s) skipped",
            self.total_records,
            self.verified,
            self.single_source,
            self.unverified,
            self.no_evidence,
            self.average_confidence,
            self.skipped_lines
        )
    }
}

/// Per-record results plus aggregate metrics for one JSONL file.
pub struct BatchReport {
    pub metrics: BatchMetrics,
    pub results: Vec<VerificationResult>,
}

impl BatchReport {
    pub fn analyze(verifier: &ClaimVerifier, path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("failed to open batch file {}", path.as_ref().display()))?;
        let mut metrics = BatchMetrics::default();
        let mut results = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<BatchRecord>(&line) {
                Ok(record) => {
                    let result = verifier.verify(&record.claim, &record.evidence);
                    metrics.record(&result);
                    results.push(result);
                }
                Err(err) => {
                    tracing::debug!(%err, "skipping malformed batch record");
                    metrics.skipped_lines += 1;
                }
            }
        }

        Ok(Self { metrics, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn batch_report_aggregates_verdicts() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"{{"claim":"Sam Altman is OpenAI CEO","evidence":["Sam Altman is the CEO of OpenAI.","The head of OpenAI is Sam Altman."]}}"#
        )
        .unwrap();
        writeln!(file, r#"{{"claim":"X","evidence":[]}}"#).unwrap();
        writeln!(file, "not json at all").unwrap();
        writeln!(
            file,
            r#"{{"claim":"Pigs fly over Mars","evidence":["The repo rate is unchanged."]}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let verifier = ClaimVerifier::default();
        let report = BatchReport::analyze(&verifier, file.path()).expect("report");

        assert_eq!(report.metrics.total_records, 3);
        assert_eq!(report.metrics.verified, 1);
        assert_eq!(report.metrics.no_evidence, 1);
        assert_eq!(report.metrics.unverified, 1);
        assert_eq!(report.metrics.skipped_lines, 1);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let verifier = ClaimVerifier::default();
        assert!(BatchReport::analyze(&verifier, "/nonexistent/batch.jsonl").is_err());
    }

    #[test]
    fn average_confidence_is_a_running_mean() {
        let mut metrics = BatchMetrics::default();
        let verifier = ClaimVerifier::default();

        let high = verifier.verify(
            "Jupiter is the largest planet",
            &[EvidenceItem::text("Jupiter is the largest planet.")],
        );
        let zero = verifier.verify("X", &[]);

        metrics.record(&high);
        metrics.record(&zero);

        assert!((metrics.average_confidence - 0.5).abs() < 1e-9);
    }
}
