use thiserror::Error;

/// Étape du pipeline qui a accepté l'adresse.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// the strict oracle accepted the original candidate
    StrictOracle,
    /// the oracle only accepted once the TLD was swapped for the probe TLD
    TldProbe,
    /// structural rules passed and the oracle stage is disabled
    Structural,
}

impl Acceptance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acceptance::StrictOracle => "strict-oracle",
            Acceptance::TldProbe => "tld-probe",
            Acceptance::Structural => "structural",
        }
    }
}

/// First rule an address failed. One variant per check, in pipeline order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(tag = "code", rename_all = "snake_case"))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("empty input")]
    Empty,
    #[error("must contain exactly one '@' (found {count})")]
    SeparatorCount { count: usize },
    #[error("local part is empty")]
    LocalEmpty,
    #[error("local part length {len} > 64")]
    LocalTooLong { len: usize },
    #[error("local part has invalid char {ch:?}")]
    LocalInvalidChar { ch: char },
    #[error("local part cannot start/end with '.'")]
    LocalDotEdge,
    #[error("local part contains '..'")]
    LocalConsecutiveDots,
    #[error("domain is empty")]
    DomainEmpty,
    #[error("domain length {len} > 253")]
    DomainTooLong { len: usize },
    #[error("domain must contain at least one dot")]
    DomainNoDot,
    #[error("domain cannot start/end with '.' or '-'")]
    DomainEdge,
    #[error("domain needs at least 2 labels (found {count})")]
    TooFewLabels { count: usize },
    #[error("empty domain label")]
    LabelEmpty,
    #[error("domain label '{label}' length {len} > 63")]
    LabelTooLong { label: String, len: usize },
    #[error("domain label '{label}' must be alphanumeric with inner hyphens only")]
    LabelSyntax { label: String },
    #[error("tld '{tld}' shorter than 2 chars")]
    TldTooShort { tld: String },
    #[error("tld '{tld}' has invalid chars")]
    TldInvalidChars { tld: String },
    #[error("tld '{tld}' has no letter")]
    TldNumeric { tld: String },
    #[error("rejected by strict validator, even with probe tld")]
    StrictRejected,
}

/// Résultat détaillé d'un appel à [`crate::EmailValidator::check`].
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub original: String,
    pub ok: bool,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ascii_domain: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub accepted_by: Option<Acceptance>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<Rejection>,
}

impl ValidationReport {
    pub(crate) fn accepted(original: &str, ascii_domain: Option<String>, by: Acceptance) -> Self {
        Self {
            original: original.to_string(),
            ok: true,
            ascii_domain,
            accepted_by: Some(by),
            reason: None,
        }
    }

    pub(crate) fn rejected(original: &str, ascii_domain: Option<String>, why: Rejection) -> Self {
        Self {
            original: original.to_string(),
            ok: false,
            ascii_domain,
            accepted_by: None,
            reason: Some(why),
        }
    }
}

/// Configuration errors. Validation itself never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid probe tld '{tld}': {source}")]
    InvalidProbeTld {
        tld: String,
        #[source]
        source: Rejection,
    },
}

impl EmailError {
    pub(crate) fn invalid_probe_tld(tld: &str, source: Rejection) -> Self {
        Self::InvalidProbeTld {
            tld: tld.to_string(),
            source,
        }
    }
}
