//! Pattern sources for every analyzer, grouped by the analyzer that compiles them.
//!
//! Nothing in here is compiled; each analyzer builds its own `Regex` or
//! keyword automaton from these tables when it is constructed.

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

pub mod reader {
    /// Labelled patterns for the first party, tried in order.
    ///
    /// Captures never cross parentheses, quotes or a line break, so one
    /// party's label cannot leak into the other's name.
    pub const PARTY_A: &[(&str, &str)] = &[
        ("party_a_between", r#"(?i)\bbetween\s+([^()"“”\n]+?)\s*\(?["“]?Party A["”]?\)?"#),
        ("party_a_label", r#"(?i)\bParty A\s*[:\-]\s*([^()"“”\n,.;]+)"#),
        ("party_a_quoted", r#"(?i)["“]([^()"“”\n]+?)["”]\s*\(?Party A\)?"#),
    ];

    /// Labelled patterns for the second party, tried in order.
    pub const PARTY_B: &[(&str, &str)] = &[
        ("party_b_and", r#"(?i)\band\s+([^()"“”\n]+?)\s*\(?["“]?Party B["”]?\)?"#),
        ("party_b_label", r#"(?i)\bParty B\s*[:\-]\s*([^()"“”\n,.;]+)"#),
        ("party_b_quoted", r#"(?i)["“]([^()"“”\n]+?)["”]\s*\(?Party B\)?"#),
    ];

    /// Role nouns used when no labelled party pair is present: `(label, pattern)`.
    pub const ROLES: &[(&str, &str)] = &[
        ("Party A", r"(?i)\bparty a\b"),
        ("Party B", r"(?i)\bparty b\b"),
        ("Client", r"(?i)\bclient\b"),
        ("Vendor", r"(?i)\bvendor\b"),
        ("Service Provider", r"(?i)\bservice provider\b"),
        ("Company", r"(?i)\bcompany\b"),
        ("Contractor", r"(?i)\bcontractor\b"),
    ];

    pub const NUMERIC_DATE: &str = r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b";

    pub fn month_day_year() -> String {
        format!(r"(?i)\b(?:{})\s+\d{{1,2}},\s*\d{{4}}\b", super::MONTHS)
    }

    pub fn day_month_year() -> String {
        format!(r"(?i)\b\d{{1,2}}\s+(?:{})\s+\d{{4}}\b", super::MONTHS)
    }

    /// `$` amounts; comma-grouped figures take precedence over bare digits.
    pub const DOLLAR_SIGN: &str = r"\$\d{1,3}(?:,\d{3})+(?:\.\d{2})?|\$\d+(?:\.\d{2})?";
    pub const DOLLARS_WORD: &str = r"(?i)\b\d[\d,]*(?:\.\d+)?\s+dollars\b";
    pub const USD_SUFFIX: &str = r"\b\d[\d,]*(?:\.\d+)?\s+USD\b";
}

pub mod risk {
    pub const TERMS: &[&str] = &[
        "termination without cause",
        "legal action",
        "non-compete",
        "indemnify",
        "penalty",
        "terminate",
        "breach",
        "liability",
        "void",
        "forfeit",
        "damages",
        "default",
        "sue",
        "court",
        "cancel",
    ];

    /// `(category terms, warning)`, in reporting order.
    pub const WARNINGS: &[(&[&str], &str)] = &[
        (
            &["terminate", "cancel", "termination without cause"],
            "Termination terms found: check notice periods and exit conditions.",
        ),
        (
            &["penalty", "forfeit"],
            "Penalty terms found: check amounts and triggering conditions.",
        ),
        (
            &["liability", "indemnify"],
            "Liability terms found: check caps and indemnification scope.",
        ),
        (
            &["breach", "default"],
            "Breach terms found: check cure periods and remedies.",
        ),
        (
            &["damages"],
            "Damages terms found: check for limits on recoverable damages.",
        ),
    ];
}

pub mod jurisdiction {
    pub const CLAUSE: &str = r"(?i)(?:governed by|jurisdiction of|under the laws of)\s+[^.,\n]+";
}

pub mod obligation {
    pub const WITH_ACTOR: &str = r"(?i)\b(?:party [ab]|vendor|contractor|client|service provider|company)\b.*?\b(?:shall|must|agrees to|is responsible for)\b.*?[.;]";
    pub const MODAL_ONLY: &str = r"(?i)\b(?:shall|must|agrees to|is responsible for)\b.*?[.;]";
}

pub mod clauses {
    /// Keyword through the end of its sentence or line.
    pub const TERMINATION: &str = r"(?i)\btermination\b[^.\n]*";
    pub const CONFIDENTIALITY: &str = r"(?i)\bconfidentiality\b[^.\n]*";
    pub const INDEMNITY: &str = r"(?i)\bindemnity\b[^.\n]*";
    pub const PAYMENT_TERMS: &str = r"(?i)\bpayment terms\b[^.\n]*";
}

pub mod advisory {
    pub const NEGOTIATION: &[(&str, &str)] = &[
        (
            "termination without cause",
            "Negotiate a mutual termination clause.",
        ),
        ("indemnify", "Limit indemnification scope."),
    ];

    pub const REQUIRED_CLAUSES: &[&str] = &[
        "termination",
        "confidentiality",
        "payment terms",
        "dispute resolution",
    ];

    pub const RED_FLAGS: &[(&str, &str)] = &[
        ("unilateral change", "Contract allows one-sided changes"),
        (
            "automatic renewal",
            "Auto-renewal without clear notice period",
        ),
    ];

    pub const SCORE_PENALTIES: &[(&str, u32)] = &[
        ("indemnify", 10),
        ("termination without cause", 15),
        ("unilateral change", 15),
    ];

    pub const AMENDMENTS: &[(&str, &str)] = &[
        ("penalty", "Consider clarifying or softening penalty terms."),
        (
            "termination without cause",
            "Suggest mutual termination clause.",
        ),
    ];
}
