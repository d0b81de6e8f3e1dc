use regex::Regex;
use serde::Serialize;

use super::{compile, patterns, Agent, AgentDescriptor, AnalyzerError, FindingList};

pub const NO_OBLIGATIONS: &str = "No clear obligations found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObligationResult {
    pub agent_name: &'static str,
    pub obligations: FindingList,
}

/// Lists duty-bearing sentences.
///
/// Actor-led matches come first, followed by every modal clause regardless of
/// actor, so the same duty usually appears twice. Callers that want unique
/// entries must dedup themselves.
pub struct ObligationAgent {
    passes: [Regex; 2],
}

impl ObligationAgent {
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            passes: [
                compile("obligation_with_actor", patterns::obligation::WITH_ACTOR)?,
                compile("obligation_modal", patterns::obligation::MODAL_ONLY)?,
            ],
        })
    }
}

impl Agent for ObligationAgent {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Obligation Extractor",
        job: "List responsibilities",
    };

    type Output = ObligationResult;

    fn analyze(&self, text: &str) -> ObligationResult {
        let found = self
            .passes
            .iter()
            .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().trim().to_string()))
            .collect();
        ObligationResult {
            agent_name: Self::DESCRIPTOR.name,
            obligations: FindingList::or_sentinel(found, NO_OBLIGATIONS),
        }
    }
}
