//! Claim verification primitives for research-agent pipelines.
//!
//! This crate scores a natural-language claim against a set of candidate
//! evidence snippets using keyword overlap, and returns a structured verdict
//! an orchestrator can inspect to decide whether a fact is safe to include in
//! a synthesized answer. Search, fetching, and the reasoning loop that gather
//! the evidence live elsewhere; this crate owns only the scoring.

mod batch;
mod config;
mod error;
mod evidence;
mod verifier;

pub use batch::{BatchMetrics, BatchRecord, BatchReport};
pub use config::{Config, ConfigLoader, LoggingConfig, VerifierConfig};
pub use error::ClaimcheckError;
pub use evidence::EvidenceItem;
pub use verifier::{ClaimVerifier, VerificationResult, Verdict, VerifierSettings};
