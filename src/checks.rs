use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict of a single check, of a compared object, or of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
    Inconclusive,
}

impl Status {
    pub fn icon(self) -> &'static str {
        match self {
            Status::Success => "\u{2705}",    // white heavy check mark
            Status::Failure => "\u{274c}",    // cross mark
            Status::Inconclusive => "\u{2753}", // question mark
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The statistical checks the analysis engine knows how to run on a pair of
/// matched histograms. Serialized spellings are the canonical check names
/// used in configuration files and engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    Chi2Test,
    KolmogorovTest,
    RatioCheck,
    ResidualCheck,
    IntegralCheck,
}

impl CheckKind {
    /// Canonical order, also the default-config order.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Chi2Test,
        CheckKind::KolmogorovTest,
        CheckKind::RatioCheck,
        CheckKind::ResidualCheck,
        CheckKind::IntegralCheck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Chi2Test => "Chi2Test",
            CheckKind::KolmogorovTest => "KolmogorovTest",
            CheckKind::RatioCheck => "RatioCheck",
            CheckKind::ResidualCheck => "ResidualCheck",
            CheckKind::IntegralCheck => "IntegralCheck",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one check applied to one matched object pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub status: Status,
    /// Short engine-provided description, e.g. the test statistic value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Success).unwrap(), "\"SUCCESS\"");
        assert_eq!(serde_json::to_string(&Status::Failure).unwrap(), "\"FAILURE\"");
        assert_eq!(
            serde_json::to_string(&Status::Inconclusive).unwrap(),
            "\"INCONCLUSIVE\""
        );
    }

    #[test]
    fn check_kind_round_trips_canonical_names() {
        for kind in CheckKind::ALL {
            let s = serde_json::to_string(&kind).unwrap();
            assert_eq!(s, format!("\"{kind}\""));
            let back: CheckKind = serde_json::from_str(&s).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_check_name_is_rejected() {
        assert!(serde_json::from_str::<CheckKind>("\"AndersonDarling\"").is_err());
    }
}
