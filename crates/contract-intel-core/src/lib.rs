pub mod agents;
pub mod report;

pub use agents::{
    advisory::Rating,
    clauses::ClauseCategory,
    pipeline::{CombinedReport, ContractAnalyzer, ReportStatus, AGENTS},
    Agent, AgentDescriptor, AnalyzerConfig, AnalyzerError, FindingList, KeywordTable, RiskLevel,
    RiskThresholds,
};
pub use report::{render_report, OutputFormat};
