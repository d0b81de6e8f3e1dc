use serde::Serialize;

use super::{reader::ReaderResult, risk::RiskResult, AgentDescriptor, FindingList, RiskLevel};

const SUMMARY_TOKENS: usize = 50;
const ELLIPSIS: &str = "...";

pub const NO_RECOMMENDATIONS: &str = "No recommendations.";
pub const MISSING_DATES: &str = "Ensure dates are clearly specified.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub agent_name: &'static str,
    pub contract_length: usize,
    pub summary: String,
    pub recommendations: FindingList,
}

/// Builds a short preview of the contract and advice based on upstream results.
///
/// Unlike the other analyzers this one depends on the reader and risk output,
/// so it takes them as explicit parameters rather than implementing [`super::Agent`].
#[derive(Debug, Default, Clone)]
pub struct SummaryAgent;

impl SummaryAgent {
    pub const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Summary Agent",
        job: "Create summary",
    };

    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str, reader: &ReaderResult, risk: &RiskResult) -> SummaryResult {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut summary = words
            .iter()
            .take(SUMMARY_TOKENS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if words.len() > SUMMARY_TOKENS {
            summary.push_str(ELLIPSIS);
        }

        let mut recommendations: Vec<String> = recommendations_for(risk.risk_level)
            .iter()
            .map(|r| r.to_string())
            .collect();
        if reader.dates.is_sentinel() {
            recommendations.push(MISSING_DATES.to_string());
        }

        SummaryResult {
            agent_name: Self::DESCRIPTOR.name,
            contract_length: words.len(),
            summary,
            recommendations: FindingList::or_sentinel(recommendations, NO_RECOMMENDATIONS),
        }
    }
}

fn recommendations_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => &[
            "Seek legal advice before signing.",
            "Negotiate or remove the high-risk clauses.",
            "Request a cap on liability and penalties.",
        ],
        RiskLevel::Medium => &[
            "Review the flagged clauses with legal counsel.",
            "Clarify termination and penalty terms.",
            "Record any negotiated changes in writing.",
        ],
        RiskLevel::Low => &[
            "Double-check the flagged terms before signing.",
            "Confirm obligations are mutual.",
            "Keep a signed copy for your records.",
        ],
        RiskLevel::VeryLow => &[
            "Contract appears low risk.",
            "Keep a signed copy for your records.",
        ],
    }
}
