//! Analyzers driven purely by fixed `keyword -> advice` tables.
//!
//! Each table is matched case-insensitively as plain substrings of the full
//! contract, and results are reported in table order.

use serde::Serialize;

use super::{patterns, Agent, AgentDescriptor, AnalyzerError, FindingList, KeywordTable};

pub const NO_NEGOTIATION_POINTS: &str = "No major negotiation points found";
pub const ALL_CLAUSES_FOUND: &str = "All standard clauses found";
pub const NO_RED_FLAGS: &str = "No major red flags";
pub const NO_AMENDMENTS: &str = "No major amendments needed";

const MAX_SCORE: u32 = 100;

fn advice_table(
    table: &'static str,
    rules: &[(&'static str, &'static str)],
) -> Result<KeywordTable<&'static str>, AnalyzerError> {
    KeywordTable::new(table, rules.to_vec())
}

fn fired_advice(table: &KeywordTable<&'static str>, text: &str) -> Vec<String> {
    table
        .present(text)
        .map(|(_, advice)| advice.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegotiationResult {
    pub agent_name: &'static str,
    pub negotiation_tips: FindingList,
}

pub struct NegotiationAdvisor {
    rules: KeywordTable<&'static str>,
}

impl NegotiationAdvisor {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            rules: advice_table("negotiation", patterns::advisory::NEGOTIATION)?,
        })
    }
}

impl Agent for NegotiationAdvisor {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Negotiation Advisor",
        job: "Suggest what to negotiate",
    };

    type Output = NegotiationResult;

    fn analyze(&self, text: &str) -> NegotiationResult {
        NegotiationResult {
            agent_name: Self::DESCRIPTOR.name,
            negotiation_tips: FindingList::or_sentinel(
                fired_advice(&self.rules, text),
                NO_NEGOTIATION_POINTS,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingClauseResult {
    pub agent_name: &'static str,
    pub missing_clauses: FindingList,
}

/// Reports which standard clause keywords never appear in the contract.
pub struct MissingClauseDetector {
    required: KeywordTable<()>,
}

impl MissingClauseDetector {
    pub fn new() -> Result<Self, AnalyzerError> {
        let required = patterns::advisory::REQUIRED_CLAUSES
            .iter()
            .map(|keyword| (*keyword, ()))
            .collect();
        Ok(Self {
            required: KeywordTable::new("required_clauses", required)?,
        })
    }
}

impl Agent for MissingClauseDetector {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Missing Clause Detector",
        job: "Find missing standard clauses",
    };

    type Output = MissingClauseResult;

    fn analyze(&self, text: &str) -> MissingClauseResult {
        let missing = self
            .required
            .absent(text)
            .map(|(keyword, _)| keyword.to_string())
            .collect();
        MissingClauseResult {
            agent_name: Self::DESCRIPTOR.name,
            missing_clauses: FindingList::or_sentinel(missing, ALL_CLAUSES_FOUND),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedFlagResult {
    pub agent_name: &'static str,
    pub red_flags: FindingList,
}

pub struct RedFlagAgent {
    rules: KeywordTable<&'static str>,
}

impl RedFlagAgent {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            rules: advice_table("red_flags", patterns::advisory::RED_FLAGS)?,
        })
    }
}

impl Agent for RedFlagAgent {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Red Flag Detector",
        job: "Highlight hidden red flags",
    };

    type Output = RedFlagResult;

    fn analyze(&self, text: &str) -> RedFlagResult {
        RedFlagResult {
            agent_name: Self::DESCRIPTOR.name,
            red_flags: FindingList::or_sentinel(fired_advice(&self.rules, text), NO_RED_FLAGS),
        }
    }
}

/// Overall quality bucket for a contract score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub agent_name: &'static str,
    /// Always within `0..=100`.
    pub contract_score: u32,
    pub rating: Rating,
}

/// Starts every contract at 100 and deducts a fixed penalty per risky phrase present.
pub struct ContractScorer {
    penalties: KeywordTable<u32>,
}

impl ContractScorer {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            penalties: KeywordTable::new(
                "score_penalties",
                patterns::advisory::SCORE_PENALTIES.to_vec(),
            )?,
        })
    }
}

impl Agent for ContractScorer {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Contract Scorer",
        job: "Score contract quality",
    };

    type Output = ScoreResult;

    fn analyze(&self, text: &str) -> ScoreResult {
        let deducted: u32 = self.penalties.present(text).map(|(_, penalty)| *penalty).sum();
        let contract_score = MAX_SCORE.saturating_sub(deducted);
        ScoreResult {
            agent_name: Self::DESCRIPTOR.name,
            contract_score,
            rating: Rating::from_score(contract_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmendmentResult {
    pub agent_name: &'static str,
    pub amendments: FindingList,
}

pub struct AmendmentRecommender {
    rules: KeywordTable<&'static str>,
}

impl AmendmentRecommender {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            rules: advice_table("amendments", patterns::advisory::AMENDMENTS)?,
        })
    }
}

impl Agent for AmendmentRecommender {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Amendment Recommender",
        job: "Suggest helpful revisions",
    };

    type Output = AmendmentResult;

    fn analyze(&self, text: &str) -> AmendmentResult {
        AmendmentResult {
            agent_name: Self::DESCRIPTOR.name,
            amendments: FindingList::or_sentinel(fired_advice(&self.rules, text), NO_AMENDMENTS),
        }
    }
}
