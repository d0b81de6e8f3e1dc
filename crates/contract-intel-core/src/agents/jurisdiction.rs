use regex::Regex;
use serde::Serialize;

use super::{compile, patterns, Agent, AgentDescriptor, AnalyzerError, FindingList};

pub const NO_JURISDICTION: &str = "No jurisdiction clause found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionResult {
    pub agent_name: &'static str,
    pub jurisdictions: FindingList,
}

/// Finds governing-law lead-ins together with the rest of their clause.
pub struct JurisdictionAgent {
    clause: Regex,
}

impl JurisdictionAgent {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            clause: compile("jurisdiction_clause", patterns::jurisdiction::CLAUSE)?,
        })
    }
}

impl Agent for JurisdictionAgent {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Jurisdiction Checker",
        job: "Identify governing law clauses",
    };

    type Output = JurisdictionResult;

    fn analyze(&self, text: &str) -> JurisdictionResult {
        let found = self
            .clause
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        JurisdictionResult {
            agent_name: Self::DESCRIPTOR.name,
            jurisdictions: FindingList::or_sentinel(found, NO_JURISDICTION),
        }
    }
}
