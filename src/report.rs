//! Analysis report
//!
//! Everything the presentation layer consumes from one pipeline run: the
//! record itself, its identity hash, the uniqueness score and band, the
//! ordered remediation list and the static risk table.

use serde::Serialize;

use crate::error::Result;
use crate::hashing;
use crate::record::FingerprintRecord;
use crate::remedy::{self, AttributeRisk, FixEntry};
use crate::score::{self, UniquenessBand};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub fingerprint: FingerprintRecord,
    /// 64 lowercase hex characters; the displayed fingerprint identity.
    pub hash: String,
    pub score: u8,
    pub band: UniquenessBand,
    pub fixes: Vec<FixEntry>,
    pub risks: Vec<AttributeRisk>,
}

impl AnalysisReport {
    /// Derive every consumer-facing output from an assembled record.
    pub fn from_record(record: FingerprintRecord) -> Result<Self> {
        let hash = hashing::fingerprint_hash(&record)?;
        let score = score::uniqueness_score(&record);
        let fixes = remedy::evaluate_fixes(&record);

        log::debug!("fingerprint {hash} scored {score}/100");

        Ok(AnalysisReport {
            hash,
            score,
            band: UniquenessBand::from_score(score),
            fixes,
            risks: remedy::RISK_TABLE.to_vec(),
            fingerprint: record,
        })
    }
}
