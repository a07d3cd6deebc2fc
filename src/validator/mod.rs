mod domain;
mod fallback;
mod idn;
mod local;
mod options;
mod types;


pub use fallback::{EmailAddressOracle, StrictValidator};
pub use idn::{IdnNormalizer, IdnaNormalizer};
pub use options::{DEFAULT_PROBE_TLD, ValidatorOptions};
pub use types::{Acceptance, EmailError, Rejection, ValidationReport};

use domain::check_domain;
use fallback::run_fallback;
use idn::normalize_candidate;
use local::check_local;

/// Validateur d'adresses: règles structurelles + oracle strict avec sonde TLD.
///
/// Stateless: one instance can be shared between threads and reused for any
/// number of calls.
pub struct EmailValidator {
    options: ValidatorOptions,
    idn: Option<Box<dyn IdnNormalizer>>,
    strict: Box<dyn StrictValidator>,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new(ValidatorOptions::default())
    }
}

impl std::fmt::Debug for EmailValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailValidator")
            .field("options", &self.options)
            .field("idn", &self.idn.is_some())
            .finish_non_exhaustive()
    }
}

impl EmailValidator {
    /// Validator with the default collaborators ([`IdnaNormalizer`], [`EmailAddressOracle`]).
    pub fn new(options: ValidatorOptions) -> Self {
        Self {
            options,
            idn: Some(Box::new(IdnaNormalizer)),
            strict: Box::new(EmailAddressOracle),
        }
    }

    pub fn with_idn<N>(mut self, normalizer: N) -> Self
    where
        N: IdnNormalizer + 'static,
    {
        self.idn = Some(Box::new(normalizer));
        self
    }

    pub fn without_idn(mut self) -> Self {
        self.idn = None;
        self
    }

    pub fn with_strict<S>(mut self, strict: S) -> Self
    where
        S: StrictValidator + 'static,
    {
        self.strict = Box::new(strict);
        self
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// `true` if `candidate` is a plausible address. Never panics.
    pub fn validate(&self, candidate: &str) -> bool {
        self.check(candidate).ok
    }

    /// Same pipeline as [`validate`](Self::validate), keeping the verdict details.
    pub fn check(&self, candidate: &str) -> ValidationReport {
        let report = self.run(candidate);

        #[cfg(feature = "with-tracing")]
        match (&report.accepted_by, &report.reason) {
            (Some(by), _) => tracing::debug!(candidate, accepted_by = by.as_str(), "email accepted"),
            (_, Some(why)) => tracing::debug!(candidate, reason = %why, "email rejected"),
            _ => {}
        }

        report
    }

    fn run(&self, candidate: &str) -> ValidationReport {
        if candidate.is_empty() {
            return ValidationReport::rejected(candidate, None, Rejection::Empty);
        }

        let normalizer = if self.options.idn {
            self.idn.as_deref()
        } else {
            None
        };
        let (normalized, ascii_domain) = normalize_candidate(candidate, normalizer);

        let count = normalized.matches('@').count();
        if count != 1 {
            return ValidationReport::rejected(
                candidate,
                ascii_domain,
                Rejection::SeparatorCount { count },
            );
        }
        let Some((local, domain)) = normalized.split_once('@') else {
            return ValidationReport::rejected(
                candidate,
                ascii_domain,
                Rejection::SeparatorCount { count },
            );
        };

        if let Err(why) = check_local(local).and_then(|()| check_domain(domain)) {
            return ValidationReport::rejected(candidate, ascii_domain, why);
        }

        if !self.options.strict_fallback {
            return ValidationReport::accepted(candidate, ascii_domain, Acceptance::Structural);
        }

        match run_fallback(
            self.strict.as_ref(),
            candidate,
            local,
            domain,
            &self.options.probe_tld,
        ) {
            Ok(by) => ValidationReport::accepted(candidate, ascii_domain, by),
            Err(why) => ValidationReport::rejected(candidate, ascii_domain, why),
        }
    }
}

/// Valide `candidate` avec la configuration par défaut.
pub fn validate_email(candidate: &str) -> bool {
    EmailValidator::default().validate(candidate)
}

/// Comme [`validate_email`], mais renvoie le rapport détaillé.
pub fn check_email(candidate: &str) -> ValidationReport {
    EmailValidator::default().check(candidate)
}
