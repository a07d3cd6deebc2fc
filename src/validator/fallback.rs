//! Second opinion from a strict format validator.
//!
//! Strict validators tend to refuse TLDs they do not know yet. When the oracle
//! rejects the original address, the same address is retried with its TLD
//! swapped for a reference one: if that passes, the refusal was about the TLD
//! alone and the address is accepted.
//!
//! Known limitation: the swap can hide defects that only show up with the
//! original TLD length (e.g. a domain just over a length bound).

use email_address::EmailAddress;

use super::domain::replace_tld;
use super::types::{Acceptance, Rejection};

/// Black-box strict email-format check.
pub trait StrictValidator: Send + Sync {
    fn is_strict_valid(&self, candidate: &str) -> bool;
}

/// [`StrictValidator`] backed by the `email_address` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAddressOracle;

impl StrictValidator for EmailAddressOracle {
    fn is_strict_valid(&self, candidate: &str) -> bool {
        EmailAddress::is_valid(candidate)
    }
}

/// Build the probe address: `local@domain` with the last label replaced.
pub(crate) fn probe_address(local: &str, domain: &str, probe_tld: &str) -> String {
    format!("{local}@{}", replace_tld(domain, probe_tld))
}

/// Steps 10–12: oracle on the original candidate, then on the probe.
///
/// `local`/`domain` come from the normalized split, `original` is the
/// caller's untouched input.
pub(crate) fn run_fallback(
    oracle: &dyn StrictValidator,
    original: &str,
    local: &str,
    domain: &str,
    probe_tld: &str,
) -> Result<Acceptance, Rejection> {
    if oracle.is_strict_valid(original) {
        return Ok(Acceptance::StrictOracle);
    }

    let probe = probe_address(local, domain, probe_tld);
    if oracle.is_strict_valid(&probe) {
        #[cfg(feature = "with-tracing")]
        tracing::debug!(%probe, "strict validator only accepts the probe tld");
        return Ok(Acceptance::TldProbe);
    }

    Err(Rejection::StrictRejected)
}
