#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use super::domain::check_tld;
use super::types::EmailError;

pub const DEFAULT_PROBE_TLD: &str = "com";

/// Configuration knobs for [`crate::EmailValidator`].
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// TLD substituted into the probe address when the strict validator refuses.
    pub probe_tld: String,
    /// Normalize IDN domains before the structural checks.
    pub idn: bool,
    /// Run the strict validator stage after the structural rules.
    pub strict_fallback: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            probe_tld: DEFAULT_PROBE_TLD.to_string(),
            idn: true,
            strict_fallback: true,
        }
    }
}

impl ValidatorOptions {
    /// Set the probe TLD. It must itself satisfy the TLD rules.
    pub fn with_probe_tld(mut self, tld: &str) -> Result<Self, EmailError> {
        check_tld(tld).map_err(|source| EmailError::invalid_probe_tld(tld, source))?;
        self.probe_tld = tld.to_string();
        Ok(self)
    }

    pub fn with_idn(mut self, idn: bool) -> Self {
        self.idn = idn;
        self
    }

    pub fn with_strict_fallback(mut self, strict_fallback: bool) -> Self {
        self.strict_fallback = strict_fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rejection;

    #[test]
    fn defaults() {
        let opts = ValidatorOptions::default();
        assert_eq!(opts.probe_tld, "com");
        assert!(opts.idn);
        assert!(opts.strict_fallback);
    }

    #[test]
    fn probe_tld_must_be_a_valid_tld() {
        let opts = ValidatorOptions::default().with_probe_tld("org").expect("valid");
        assert_eq!(opts.probe_tld, "org");

        let err = ValidatorOptions::default()
            .with_probe_tld("42")
            .expect_err("numeric tld");
        assert!(matches!(
            err,
            EmailError::InvalidProbeTld {
                source: Rejection::TldNumeric { .. },
                ..
            }
        ));
        assert!(ValidatorOptions::default().with_probe_tld("c").is_err());
        assert!(ValidatorOptions::default().with_probe_tld("c.om").is_err());
    }
}
