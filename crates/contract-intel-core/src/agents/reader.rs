use regex::Regex;
use serde::Serialize;
use tracing::trace;

use super::{compile, patterns, Agent, AgentDescriptor, AnalyzerError, FindingList};

pub const NO_PARTIES: &str = "Parties not clearly identified";
pub const NO_DATES: &str = "No dates found";
pub const NO_AMOUNTS: &str = "No monetary amounts found";

/// Parties, dates and monetary amounts pulled from the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderResult {
    pub agent_name: &'static str,
    pub parties: FindingList,
    pub dates: FindingList,
    pub amounts: FindingList,
}

/// Extracts the basic facts of a contract.
///
/// Parties are resolved in two stages: a labelled `Party A`/`Party B` pair
/// wins outright, otherwise every role noun mentioned in the text is listed.
pub struct ReaderAgent {
    party_a: Vec<Regex>,
    party_b: Vec<Regex>,
    roles: Vec<(&'static str, Regex)>,
    dates: Vec<Regex>,
    amounts: Vec<Regex>,
}

impl ReaderAgent {
    pub fn new() -> Result<Self, AnalyzerError> {
        let compile_all = |table: &[(&'static str, &str)]| {
            table
                .iter()
                .map(|(name, pattern)| compile(*name, pattern))
                .collect::<Result<Vec<_>, _>>()
        };
        let roles = patterns::reader::ROLES
            .iter()
            .map(|(label, pattern)| Ok((*label, compile("party_role", pattern)?)))
            .collect::<Result<Vec<_>, AnalyzerError>>()?;
        let month_day_year = patterns::reader::month_day_year();
        let day_month_year = patterns::reader::day_month_year();

        Ok(Self {
            party_a: compile_all(patterns::reader::PARTY_A)?,
            party_b: compile_all(patterns::reader::PARTY_B)?,
            roles,
            dates: vec![
                compile("numeric_date", patterns::reader::NUMERIC_DATE)?,
                compile("month_day_year", &month_day_year)?,
                compile("day_month_year", &day_month_year)?,
            ],
            amounts: vec![
                compile("dollar_sign", patterns::reader::DOLLAR_SIGN)?,
                compile("dollars_word", patterns::reader::DOLLARS_WORD)?,
                compile("usd_suffix", patterns::reader::USD_SUFFIX)?,
            ],
        })
    }

    fn labelled_party(candidates: &[Regex], text: &str) -> Option<String> {
        candidates.iter().find_map(|regex| {
            let name = regex.captures(text)?.get(1)?.as_str().trim();
            (!name.is_empty()).then(|| name.to_string())
        })
    }

    fn parties(&self, text: &str) -> FindingList {
        let party_a = Self::labelled_party(&self.party_a, text);
        let party_b = Self::labelled_party(&self.party_b, text);
        if let (Some(a), Some(b)) = (party_a, party_b) {
            return FindingList::Found(vec![format!("Party A: {a}"), format!("Party B: {b}")]);
        }

        trace!("no labelled party pair, falling back to role vocabulary");
        let roles = self
            .roles
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(label, _)| label.to_string())
            .collect();
        FindingList::or_sentinel(roles, NO_PARTIES)
    }

    fn union(regexes: &[Regex], text: &str) -> Vec<String> {
        regexes
            .iter()
            .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}

impl Agent for ReaderAgent {
    const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
        name: "Contract Reader",
        job: "Extract basic info",
    };

    type Output = ReaderResult;

    fn analyze(&self, text: &str) -> ReaderResult {
        ReaderResult {
            agent_name: Self::DESCRIPTOR.name,
            parties: self.parties(text),
            dates: FindingList::or_sentinel(Self::union(&self.dates, text), NO_DATES),
            amounts: FindingList::or_sentinel(Self::union(&self.amounts, text), NO_AMOUNTS),
        }
    }
}
