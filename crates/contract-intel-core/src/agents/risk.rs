use regex::Regex;
use serde::Serialize;
use tracing::trace;

use super::{
    compile, patterns, Agent, AgentDescriptor, AnalyzerError, FindingList, RiskLevel,
    RiskThresholds,
};

pub const NO_RISKY_PHRASES: &str = "No risky phrases found";
pub const NO_WARNINGS: &str = "No major warning flags";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub agent_name: &'static str,
    pub risk_level: RiskLevel,
    /// Distinct risk terms, lowercased, in order of first occurrence.
    pub risky_phrases: FindingList,
    pub warnings: FindingList,
}

/// Scores a contract by how many distinct risk terms it uses.
pub struct RiskAgent {
    terms: Regex,
    thresholds: RiskThresholds,
}

impl RiskAgent {
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_thresholds(RiskThresholds::default())
    }

    pub fn with_thresholds(thresholds: RiskThresholds) -> Result<Self, AnalyzerError> {
        thresholds.validate()?;
        let alternation = patterns::risk::TERMS
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");
        let terms = compile("risk_terms", &format!(r"(?i)\b(?:{alternation})\b"))?;
        Ok(Self { terms, thresholds })
    }

    /// Matches mapped back onto their `TERMS` entry.
    ///
    /// Unicode case folding lets `ſ` stand in for `s`; such matches have no
    /// ASCII-equal entry and are skipped.
    fn distinct_terms(&self, text: &str) -> Vec<String> {
        let mut seen: Vec<&'static str> = Vec::new();
        for mat in self.terms.find_iter(text) {
            let canonical = patterns::risk::TERMS
                .iter()
                .copied()
                .find(|term| term.eq_ignore_ascii_case(mat.as_str()));
            match canonical {
                Some(term) if !seen.contains(&term) => seen.push(term),
                Some(_) => {}
                None => trace!(matched = mat.as_str(), "skipping non-ascii case fold"),
            }
        }
        seen.into_iter().map(str::to_string).collect()
    }
}

impl Agent for RiskAgent {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Risk Checker",
        job: "Find risky parts",
    };

    type Output = RiskResult;

    fn analyze(&self, text: &str) -> RiskResult {
        let terms = self.distinct_terms(text);
        let risk_level = RiskLevel::from_count_with_thresholds(terms.len(), &self.thresholds);
        let warnings = patterns::risk::WARNINGS
            .iter()
            .filter(|(category, _)| category.iter().any(|term| terms.iter().any(|t| t == term)))
            .map(|(_, warning)| warning.to_string())
            .collect();

        RiskResult {
            agent_name: Self::DESCRIPTOR.name,
            risk_level,
            risky_phrases: FindingList::or_sentinel(terms, NO_RISKY_PHRASES),
            warnings: FindingList::or_sentinel(warnings, NO_WARNINGS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk() -> RiskAgent {
        RiskAgent::new().expect("risk patterns compile")
    }

    #[test]
    fn empty_text_is_very_low_risk() {
        let result = risk().analyze("");
        assert_eq!(result.risk_level, RiskLevel::VeryLow);
        assert_eq!(result.risky_phrases, FindingList::Sentinel(NO_RISKY_PHRASES));
        assert_eq!(result.warnings, FindingList::Sentinel(NO_WARNINGS));
    }

    #[test]
    fn counts_distinct_terms_not_occurrences() {
        let result = risk().analyze("Penalty applies. Another PENALTY applies. A third penalty.");
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.risky_phrases, FindingList::Found(vec!["penalty".into()]));
    }

    #[test]
    fn four_distinct_terms_is_high_risk() {
        let text = "Any breach voids the deal; damages and a penalty follow, and either side may terminate.";
        let result = risk().analyze(text);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.risky_phrases,
            FindingList::Found(vec![
                "breach".into(),
                "damages".into(),
                "penalty".into(),
                "terminate".into(),
            ])
        );
    }

    #[test]
    fn warnings_follow_category_order() {
        let text = "The vendor must indemnify the client and may terminate for breach.";
        let result = risk().analyze(text);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        let warnings: Vec<_> = result.warnings.iter().collect();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].starts_with("Termination"));
        assert!(warnings[1].starts_with("Liability"));
        assert!(warnings[2].starts_with("Breach"));
    }

    #[test]
    fn multi_word_terms_match_as_phrases() {
        let result = risk().analyze("Includes termination without cause and a non-compete.");
        assert_eq!(
            result.risky_phrases,
            FindingList::Found(vec!["termination without cause".into(), "non-compete".into()])
        );
    }

    #[test]
    fn terms_inside_other_words_are_ignored() {
        let result = risk().analyze("Pursue the issue in the courtyard.");
        assert_eq!(result.risk_level, RiskLevel::VeryLow);
    }

    #[test]
    fn case_variants_collapse_to_one_term() {
        let result = risk().analyze("DAMAGES, Damages and damages.");
        assert_eq!(result.risky_phrases, FindingList::Found(vec!["damages".into()]));
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.warnings.iter().next().unwrap().starts_with("Damages"));
    }

    #[test]
    fn non_ascii_case_folds_are_not_extra_terms() {
        let result = risk().analyze("Sue and \u{17f}ue; damage\u{17f}");
        assert_eq!(result.risky_phrases, FindingList::Found(vec!["sue".into()]));
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.warnings, FindingList::Sentinel(NO_WARNINGS));
    }

    #[test]
    fn custom_thresholds_shift_levels() {
        let agent = RiskAgent::with_thresholds(RiskThresholds { medium: 1, high: 2 })
            .expect("valid thresholds");
        assert_eq!(agent.analyze("penalty").risk_level, RiskLevel::Medium);
        assert_eq!(agent.analyze("penalty and breach").risk_level, RiskLevel::High);
    }
}
