use serde::Serialize;
use tracing::{debug, instrument};

use super::{
    advisory::{
        AmendmentRecommender, AmendmentResult, ContractScorer, MissingClauseDetector,
        MissingClauseResult, NegotiationAdvisor, NegotiationResult, RedFlagAgent, RedFlagResult,
        ScoreResult,
    },
    clauses::{ClauseCategorizer, ClauseResult},
    jurisdiction::{JurisdictionAgent, JurisdictionResult},
    obligation::{ObligationAgent, ObligationResult},
    reader::{ReaderAgent, ReaderResult},
    risk::{RiskAgent, RiskResult},
    summary::{SummaryAgent, SummaryResult},
    Agent, AgentDescriptor, AnalyzerConfig, AnalyzerError,
};

/// Every analyzer in pipeline order.
pub const AGENTS: &[AgentDescriptor] = &[
    ReaderAgent::DESCRIPTOR,
    RiskAgent::DESCRIPTOR,
    SummaryAgent::DESCRIPTOR,
    JurisdictionAgent::DESCRIPTOR,
    ObligationAgent::DESCRIPTOR,
    ClauseCategorizer::DESCRIPTOR,
    NegotiationAdvisor::DESCRIPTOR,
    MissingClauseDetector::DESCRIPTOR,
    RedFlagAgent::DESCRIPTOR,
    ContractScorer::DESCRIPTOR,
    AmendmentRecommender::DESCRIPTOR,
];

/// Outcome marker carried at the top of every combined report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
}

/// One section per analyzer, keyed the way the HTTP API exposes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedReport {
    pub status: ReportStatus,
    pub contract_reader: ReaderResult,
    pub risk_checker: RiskResult,
    pub summary: SummaryResult,
    pub jurisdiction: JurisdictionResult,
    pub obligations: ObligationResult,
    pub clauses: ClauseResult,
    pub negotiation_advice: NegotiationResult,
    pub missing_clauses: MissingClauseResult,
    pub red_flags: RedFlagResult,
    pub contract_score: ScoreResult,
    pub amendments: AmendmentResult,
}

/// Runs every analyzer over a contract and assembles the combined report.
///
/// All patterns are compiled here, once; after construction `analyze` cannot
/// fail, so a single instance can be shared across requests.
pub struct ContractAnalyzer {
    reader: ReaderAgent,
    risk: RiskAgent,
    summary: SummaryAgent,
    jurisdiction: JurisdictionAgent,
    obligations: ObligationAgent,
    clauses: ClauseCategorizer,
    negotiation: NegotiationAdvisor,
    missing_clauses: MissingClauseDetector,
    red_flags: RedFlagAgent,
    scorer: ContractScorer,
    amendments: AmendmentRecommender,
}

impl ContractAnalyzer {
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Ok(Self {
            reader: ReaderAgent::new()?,
            risk: RiskAgent::with_thresholds(config.risk)?,
            summary: SummaryAgent::new(),
            jurisdiction: JurisdictionAgent::new()?,
            obligations: ObligationAgent::new()?,
            clauses: ClauseCategorizer::new()?,
            negotiation: NegotiationAdvisor::new()?,
            missing_clauses: MissingClauseDetector::new()?,
            red_flags: RedFlagAgent::new()?,
            scorer: ContractScorer::new()?,
            amendments: AmendmentRecommender::new()?,
        })
    }

    pub fn agents(&self) -> &'static [AgentDescriptor] {
        AGENTS
    }

    #[instrument(name = "analyze_contract", skip(self, text), fields(input_len = text.len()))]
    pub fn analyze(&self, text: &str) -> CombinedReport {
        let contract_reader = self.reader.analyze(text);
        let risk_checker = self.risk.analyze(text);
        let summary = self.summary.analyze(text, &contract_reader, &risk_checker);

        let report = CombinedReport {
            status: ReportStatus::Success,
            jurisdiction: self.jurisdiction.analyze(text),
            obligations: self.obligations.analyze(text),
            clauses: self.clauses.analyze(text),
            negotiation_advice: self.negotiation.analyze(text),
            missing_clauses: self.missing_clauses.analyze(text),
            red_flags: self.red_flags.analyze(text),
            contract_score: self.scorer.analyze(text),
            amendments: self.amendments.analyze(text),
            contract_reader,
            risk_checker,
            summary,
        };
        debug!(
            risk_level = report.risk_checker.risk_level.as_str(),
            score = report.contract_score.contract_score,
            "contract analysis completed"
        );
        report
    }
}
