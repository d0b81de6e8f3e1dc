use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

pub mod advisory;
pub mod clauses;
pub mod jurisdiction;
pub mod obligation;
/// Pattern tables, grouped by the analyzer that owns them.
pub mod patterns;
pub mod pipeline;
pub mod reader;
pub mod risk;
pub mod summary;

/// A stateless analyzer that derives one category of findings from raw contract text.
pub trait Agent: Send + Sync {
    /// Static name/job pair exposed by the agents listing.
    const DESCRIPTOR: AgentDescriptor;

    type Output: Serialize;

    /// Run the analyzer. Total over all inputs, including the empty string.
    fn analyze(&self, text: &str) -> Self::Output;
}

/// Human-readable name and job description for one analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentDescriptor {
    pub name: &'static str,
    pub job: &'static str,
}

/// Ordered matches for one concern, or the placeholder emitted when nothing matched.
///
/// Both variants serialize as a JSON array of strings, so consumers never see
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingList {
    Found(Vec<String>),
    Sentinel(&'static str),
}

impl FindingList {
    pub fn or_sentinel(items: Vec<String>, sentinel: &'static str) -> Self {
        if items.is_empty() {
            Self::Sentinel(sentinel)
        } else {
            Self::Found(items)
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel(_))
    }

    /// Number of entries as serialized (a sentinel counts as one).
    pub fn len(&self) -> usize {
        match self {
            Self::Found(items) => items.len(),
            Self::Sentinel(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let (items, sentinel): (&[String], Option<&str>) = match self {
            Self::Found(items) => (items.as_slice(), None),
            Self::Sentinel(sentinel) => (&[], Some(*sentinel)),
        };
        items.iter().map(String::as_str).chain(sentinel)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|item| item == needle)
    }
}

impl Serialize for FindingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Qualitative risk derived from the number of distinct risk terms in a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_count(distinct_terms: usize) -> Self {
        Self::from_count_with_thresholds(distinct_terms, &RiskThresholds::default())
    }

    pub fn from_count_with_thresholds(distinct_terms: usize, thresholds: &RiskThresholds) -> Self {
        if distinct_terms >= thresholds.high {
            Self::High
        } else if distinct_terms >= thresholds.medium {
            Self::Medium
        } else if distinct_terms >= 1 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "VERY_LOW",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Distinct-term counts at which a contract moves into the medium and high risk levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub medium: usize,
    pub high: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { medium: 2, high: 4 }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.medium == 0 || self.medium > self.high {
            return Err(AnalyzerError::InvalidThresholds {
                medium: self.medium,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// Tunables shared by the analyzers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub risk: RiskThresholds,
}

/// Errors raised while building analyzers.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("pattern `{name}` failed to compile")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("keyword table `{table}` failed to build")]
    KeywordTable {
        table: &'static str,
        #[source]
        source: aho_corasick::BuildError,
    },
    #[error("risk thresholds must satisfy 1 <= medium <= high (got medium {medium}, high {high})")]
    InvalidThresholds { medium: usize, high: usize },
}

pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex, AnalyzerError> {
    Regex::new(pattern).map_err(|source| AnalyzerError::InvalidPattern { name, source })
}

/// Case-insensitive substring rules compiled into a single automaton.
///
/// Answers which entries occur in a text; results always follow table order.
#[derive(Debug, Clone)]
pub struct KeywordTable<T> {
    automaton: AhoCorasick,
    entries: Vec<(&'static str, T)>,
}

impl<T> KeywordTable<T> {
    pub fn new(table: &'static str, entries: Vec<(&'static str, T)>) -> Result<Self, AnalyzerError> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(entries.iter().map(|(keyword, _)| *keyword))
            .map_err(|source| AnalyzerError::KeywordTable { table, source })?;
        Ok(Self { automaton, entries })
    }

    fn hits(&self, text: &str) -> Vec<bool> {
        let mut hits = vec![false; self.entries.len()];
        for mat in self.automaton.find_overlapping_iter(text) {
            hits[mat.pattern().as_usize()] = true;
        }
        hits
    }

    /// Payloads of every keyword present in `text`.
    pub fn present<'a>(&'a self, text: &str) -> impl Iterator<Item = (&'static str, &'a T)> + 'a {
        self.select(text, true)
    }

    /// Payloads of every keyword absent from `text`.
    pub fn absent<'a>(&'a self, text: &str) -> impl Iterator<Item = (&'static str, &'a T)> + 'a {
        self.select(text, false)
    }

    fn select<'a>(
        &'a self,
        text: &str,
        wanted: bool,
    ) -> impl Iterator<Item = (&'static str, &'a T)> + 'a {
        self.entries
            .iter()
            .zip(self.hits(text))
            .filter(move |(_, hit)| *hit == wanted)
            .map(|((keyword, payload), _)| (*keyword, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_serializes_as_single_entry_list() {
        let list = FindingList::or_sentinel(Vec::new(), "No dates found");
        assert!(list.is_sentinel());
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!(["No dates found"])
        );
    }

    #[test]
    fn found_items_keep_order() {
        let list = FindingList::or_sentinel(vec!["b".into(), "a".into(), "b".into()], "none");
        assert!(!list.is_sentinel());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn risk_level_thresholds_match_default_table() {
        assert_eq!(RiskLevel::from_count(0), RiskLevel::VeryLow);
        assert_eq!(RiskLevel::from_count(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_count(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_count(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_count(4), RiskLevel::High);
        assert_eq!(RiskLevel::from_count(40), RiskLevel::High);
    }

    #[test]
    fn thresholds_reject_inverted_bounds() {
        let thresholds = RiskThresholds { medium: 5, high: 3 };
        let err = thresholds.validate().expect_err("medium above high should fail");
        assert!(matches!(
            err,
            AnalyzerError::InvalidThresholds { medium: 5, high: 3 }
        ));
        assert!(RiskThresholds { medium: 0, high: 3 }.validate().is_err());
        assert!(RiskThresholds::default().validate().is_ok());
    }

    #[test]
    fn keyword_table_is_case_insensitive_and_ordered() {
        let table = KeywordTable::new("test", vec![("beta", 2), ("alpha", 1), ("gamma", 3)])
            .expect("table should build");
        let present: Vec<_> = table.present("ALPHA then Beta").map(|(_, v)| *v).collect();
        assert_eq!(present, vec![2, 1]);
        let absent: Vec<_> = table.absent("ALPHA then Beta").map(|(k, _)| k).collect();
        assert_eq!(absent, vec!["gamma"]);
    }

    #[test]
    fn keyword_table_reports_overlapping_keywords() {
        let table = KeywordTable::new("overlap", vec![("termination", ()), ("termination without cause", ())])
            .expect("table should build");
        assert_eq!(table.present("Termination without cause applies").count(), 2);
    }

    #[test]
    fn invalid_pattern_names_the_rule() {
        let err = compile("broken", "(unclosed").expect_err("pattern should be rejected");
        assert!(err.to_string().contains("broken"));
    }
}
