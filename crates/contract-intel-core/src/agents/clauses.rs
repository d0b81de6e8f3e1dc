use regex::Regex;
use serde::Serialize;

use super::{compile, patterns, Agent, AgentDescriptor, AnalyzerError};

pub const NOT_FOUND: &str = "Not found";

/// Standard clause families recognised by the categorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseCategory {
    Termination,
    Confidentiality,
    Indemnity,
    PaymentTerms,
}

impl ClauseCategory {
    pub const ALL: [ClauseCategory; 4] = [
        Self::Termination,
        Self::Confidentiality,
        Self::Indemnity,
        Self::PaymentTerms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Termination => "Termination",
            Self::Confidentiality => "Confidentiality",
            Self::Indemnity => "Indemnity",
            Self::PaymentTerms => "Payment Terms",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::Termination => patterns::clauses::TERMINATION,
            Self::Confidentiality => patterns::clauses::CONFIDENTIALITY,
            Self::Indemnity => patterns::clauses::INDEMNITY,
            Self::PaymentTerms => patterns::clauses::PAYMENT_TERMS,
        }
    }
}

/// First matching clause text per category, or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseMap {
    #[serde(rename = "Termination")]
    pub termination: String,
    #[serde(rename = "Confidentiality")]
    pub confidentiality: String,
    #[serde(rename = "Indemnity")]
    pub indemnity: String,
    #[serde(rename = "Payment Terms")]
    pub payment_terms: String,
}

impl ClauseMap {
    pub fn get(&self, category: ClauseCategory) -> &str {
        match category {
            ClauseCategory::Termination => &self.termination,
            ClauseCategory::Confidentiality => &self.confidentiality,
            ClauseCategory::Indemnity => &self.indemnity,
            ClauseCategory::PaymentTerms => &self.payment_terms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseResult {
    pub agent_name: &'static str,
    pub clauses: ClauseMap,
}

pub struct ClauseCategorizer {
    patterns: Vec<(ClauseCategory, Regex)>,
}

impl ClauseCategorizer {
    pub fn new() -> Result<Self, AnalyzerError> {
        let patterns = ClauseCategory::ALL
            .into_iter()
            .map(|category| Ok((category, compile(category.label(), category.pattern())?)))
            .collect::<Result<Vec<_>, AnalyzerError>>()?;
        Ok(Self { patterns })
    }

    fn first_clause(&self, category: ClauseCategory, text: &str) -> String {
        self.patterns
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .and_then(|(_, regex)| regex.find(text))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

impl Agent for ClauseCategorizer {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Clause Categorizer",
        job: "Group clauses by type",
    };

    type Output = ClauseResult;

    fn analyze(&self, text: &str) -> ClauseResult {
        ClauseResult {
            agent_name: Self::DESCRIPTOR.name,
            clauses: ClauseMap {
                termination: self.first_clause(ClauseCategory::Termination, text),
                confidentiality: self.first_clause(ClauseCategory::Confidentiality, text),
                indemnity: self.first_clause(ClauseCategory::Indemnity, text),
                payment_terms: self.first_clause(ClauseCategory::PaymentTerms, text),
            },
        }
    }
}
