//! Keyword-overlap claim verification.
//!
//! Lexical overlap between a claim and each evidence snippet stands in as a
//! proxy for semantic support: the claim is reduced to a keyword set, every
//! snippet is scanned for those keywords, and a snippet that contains enough
//! of them counts as one corroborating match. Two independent matches make a
//! claim `VERIFIED`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClaimcheckError;
use crate::evidence::EvidenceItem;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("invalid word regex"));

/// Articles, prepositions, and common verbs stripped from claims before
/// keyword extraction.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "for", "of", "by", "with", "to", "in",
    "as", "are", "was", "were", "it",
];

/// Categorical outcome of a verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Evidence collection was missing or empty.
    NoEvidence,
    /// No evidence item met the match threshold.
    Unverified,
    /// Exactly one evidence item corroborates the claim.
    SingleSource,
    /// Enough independent evidence items corroborate the claim.
    Verified,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::NoEvidence => "NO_EVIDENCE",
            Verdict::Unverified => "UNVERIFIED",
            Verdict::SingleSource => "SINGLE_SOURCE",
            Verdict::Verified => "VERIFIED",
        }
    }

    /// Whether a downstream synthesizer may include the claim in a final
    /// answer.
    pub fn is_synthesizable(&self) -> bool {
        matches!(self, Verdict::Verified | Verdict::SingleSource)
    }
}

/// Tunable knobs for the verifier.
#[derive(Debug, Clone)]
pub struct VerifierSettings {
    /// Words stripped from the claim before keyword extraction.
    pub stop_words: BTreeSet<String>,
    /// Tokens of this length or shorter are discarded as noise.
    pub length_floor: usize,
    /// Minimum fraction of claim keywords that must appear in an evidence
    /// item for it to count as a match.
    pub match_threshold: f64,
    /// Matches required for a `VERIFIED` verdict.
    pub verified_min_matches: usize,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            length_floor: 2,
            match_threshold: 0.6,
            verified_min_matches: 2,
        }
    }
}

impl VerifierSettings {
    pub fn validate(&self) -> Result<(), ClaimcheckError> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(ClaimcheckError::InvalidConfiguration(format!(
                "match_threshold must be within (0, 1], got {}",
                self.match_threshold
            )));
        }
        if self.verified_min_matches == 0 {
            return Err(ClaimcheckError::InvalidConfiguration(
                "verified_min_matches must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Immutable outcome of checking one claim against one evidence set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// The claim text as supplied by the caller.
    pub claim: String,
    pub verdict: Verdict,
    /// Number of evidence items meeting the match threshold.
    pub matches: usize,
    /// `matches / max(1, evidence count)`, rounded to two decimals.
    pub confidence: f64,
    /// Ordinal positions of the matching evidence items.
    pub matched_indices: Vec<usize>,
    /// Whether the verdict is strong enough to include the claim downstream.
    pub is_synthesizable: bool,
    /// Human-readable explanation, populated for sentinel outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Scores claims against evidence snippets using keyword overlap.
///
/// Pure and stateless: identical inputs always yield identical results, and
/// a shared reference may be used from any number of callers at once.
pub struct ClaimVerifier {
    settings: VerifierSettings,
}

impl ClaimVerifier {
    pub fn new(settings: VerifierSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &VerifierSettings {
        &self.settings
    }

    /// Score `claim` against `evidence` and return a structured verdict.
    ///
    /// Never fails: an empty evidence set yields the `NO_EVIDENCE` sentinel
    /// and a claim that reduces to an empty keyword set simply matches
    /// nothing.
    pub fn verify(&self, claim: &str, evidence: &[EvidenceItem]) -> VerificationResult {
        if evidence.is_empty() {
            debug!(%claim, "no evidence supplied");
            return VerificationResult {
                claim: claim.to_string(),
                verdict: Verdict::NoEvidence,
                matches: 0,
                confidence: 0.0,
                matched_indices: Vec::new(),
                is_synthesizable: false,
                reason: Some("no evidence provided".to_string()),
            };
        }

        let keywords = self.claim_keywords(claim);
        let mut matched_indices = Vec::new();

        if keywords.is_empty() {
            debug!(%claim, "claim reduced to an empty keyword set");
        } else {
            for (idx, item) in evidence.iter().enumerate() {
                let text = item.comparison_text();
                let found = keywords
                    .iter()
                    .filter(|keyword| text.contains(keyword.as_str()))
                    .count();
                let ratio = found as f64 / keywords.len() as f64;
                if ratio >= self.settings.match_threshold {
                    matched_indices.push(idx);
                }
            }
        }

        let matches = matched_indices.len();
        let confidence = round2(matches as f64 / evidence.len().max(1) as f64);
        let verdict = if matches >= self.settings.verified_min_matches {
            Verdict::Verified
        } else if matches == 1 {
            Verdict::SingleSource
        } else {
            Verdict::Unverified
        };

        debug!(
            %claim,
            matches,
            confidence,
            verdict = verdict.as_str(),
            "claim scored"
        );

        VerificationResult {
            claim: claim.to_string(),
            verdict,
            matches,
            confidence,
            matched_indices,
            is_synthesizable: verdict.is_synthesizable(),
            reason: None,
        }
    }

    /// Lower-case the claim, split on `\w+` runs, drop stop words and short
    /// tokens.
    fn claim_keywords(&self, claim: &str) -> BTreeSet<String> {
        let lowered = claim.to_lowercase();
        WORD_PATTERN
            .find_iter(&lowered)
            .map(|token| token.as_str().to_string())
            .filter(|token| token.len() > self.settings.length_floor)
            .filter(|token| !self.settings.stop_words.contains(token))
            .collect()
    }
}

impl Default for ClaimVerifier {
    fn default() -> Self {
        Self::new(VerifierSettings::default())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
