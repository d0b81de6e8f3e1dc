use std::fmt::Write;

use crate::agents::{clauses::ClauseCategory, pipeline::CombinedReport, FindingList};

/// Output styles supported by the report renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

/// Produce a report string from a `CombinedReport` using the desired format.
pub fn render_report(report: &CombinedReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Human => render_human(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

fn render_human(report: &CombinedReport) -> anyhow::Result<String> {
    let reader = &report.contract_reader;
    let risk = &report.risk_checker;
    let score = &report.contract_score;

    let mut out = String::new();
    writeln!(
        out,
        "Contract Score: {} ({:?})",
        score.contract_score, score.rating
    )?;
    writeln!(out, "Risk Level: {}", risk.risk_level.as_str())?;
    writeln!(out, "Length: {} words", report.summary.contract_length)?;
    writeln!(out)?;

    if !report.summary.summary.is_empty() {
        writeln!(out, "Summary:")?;
        writeln!(out, "  {}", sanitize(&report.summary.summary))?;
        writeln!(out)?;
    }

    section(&mut out, "Parties", &reader.parties)?;
    section(&mut out, "Dates", &reader.dates)?;
    section(&mut out, "Amounts", &reader.amounts)?;
    section(&mut out, "Risky Phrases", &risk.risky_phrases)?;
    section(&mut out, "Warnings", &risk.warnings)?;
    section(&mut out, "Jurisdiction", &report.jurisdiction.jurisdictions)?;
    section(&mut out, "Obligations", &report.obligations.obligations)?;

    writeln!(out, "Clauses:")?;
    for category in ClauseCategory::ALL {
        writeln!(
            out,
            "  - {label:>15}: {text}",
            label = category.label(),
            text = sanitize(report.clauses.clauses.get(category))
        )?;
    }
    writeln!(out)?;

    section(
        &mut out,
        "Negotiation Tips",
        &report.negotiation_advice.negotiation_tips,
    )?;
    section(
        &mut out,
        "Missing Clauses",
        &report.missing_clauses.missing_clauses,
    )?;
    section(&mut out, "Red Flags", &report.red_flags.red_flags)?;
    section(&mut out, "Amendments", &report.amendments.amendments)?;
    section(
        &mut out,
        "Recommendations",
        &report.summary.recommendations,
    )?;

    Ok(out)
}

fn section(out: &mut String, title: &str, items: &FindingList) -> std::fmt::Result {
    writeln!(out, "{title}:")?;
    for item in items.iter() {
        writeln!(out, "  - {}", sanitize(item))?;
    }
    writeln!(out)
}

fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\n' | '\r' => ' ',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContractAnalyzer;

    fn sample_report() -> CombinedReport {
        ContractAnalyzer::new()
            .unwrap()
            .analyze("The Vendor shall indemnify the Client.\nPayment terms: net 30.")
    }

    #[test]
    fn human_report_contains_sections() {
        let output = render_report(&sample_report(), OutputFormat::Human).unwrap();
        assert!(output.contains("Contract Score: 90 (Good)"));
        assert!(output.contains("Risk Level: LOW"));
        assert!(output.contains("Payment Terms: Payment terms: net 30"));
        assert!(output.contains("Limit indemnification scope."));
    }

    #[test]
    fn json_report_serializes() {
        let report = sample_report();
        let output = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["contract_score"]["contract_score"], 90);
        assert!(value["obligations"]["obligations"].is_array());
    }

    #[test]
    fn yaml_report_serializes() {
        let output = render_report(&sample_report(), OutputFormat::Yaml).unwrap();
        assert!(output.contains("status: success"));
        assert!(output.contains("risk_level: LOW"));
    }
}
