//! IDN normalization seam.
//!
//! The validator only needs one operation from an IDN implementation: turn a
//! domain into its ASCII-compatible form, or say it cannot. [`IdnaNormalizer`]
//! is the default backed by the `idna` crate (UTS #46).

use std::borrow::Cow;

/// Converts a domain to its ASCII-compatible encoding.
///
/// Returning `None` means "cannot normalize": the caller keeps the original
/// domain and carries on.
pub trait IdnNormalizer: Send + Sync {
    fn to_ascii(&self, domain: &str) -> Option<String>;
}

/// UTS #46 processing via [`idna::domain_to_ascii`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaNormalizer;

impl IdnNormalizer for IdnaNormalizer {
    fn to_ascii(&self, domain: &str) -> Option<String> {
        idna::domain_to_ascii(domain).ok()
    }
}

/// Réécrit le domaine de `candidate` en ASCII si possible.
///
/// Returns the candidate to run structural checks on, plus the ASCII domain
/// when the original one is not plain ASCII.
pub(crate) fn normalize_candidate<'a>(
    candidate: &'a str,
    normalizer: Option<&dyn IdnNormalizer>,
) -> (Cow<'a, str>, Option<String>) {
    let (Some(normalizer), Some((local, domain))) = (normalizer, candidate.split_once('@')) else {
        return (Cow::Borrowed(candidate), None);
    };

    match normalizer.to_ascii(domain) {
        Some(ascii) if ascii != domain => {
            let rebuilt = format!("{local}@{ascii}");
            // casse ASCII seule: pas d'IDN à signaler
            let reported = (!domain.is_ascii()).then_some(ascii);
            (Cow::Owned(rebuilt), reported)
        }
        Some(_) => (Cow::Borrowed(candidate), None),
        None => {
            #[cfg(feature = "with-tracing")]
            tracing::trace!(domain, "idn normalization failed, keeping original domain");
            (Cow::Borrowed(candidate), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Refuse;

    impl IdnNormalizer for Refuse {
        fn to_ascii(&self, _domain: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn idna_encodes_unicode_domain() {
        let ascii = IdnaNormalizer.to_ascii("exämple.com").expect("idna ok");
        assert_eq!(ascii, "xn--exmple-cua.com");
    }

    #[test]
    fn rewrites_domain_only() {
        let (candidate, ascii) = normalize_candidate("Jörg@exämple.com", Some(&IdnaNormalizer));
        assert_eq!(candidate, "Jörg@xn--exmple-cua.com");
        assert_eq!(ascii.as_deref(), Some("xn--exmple-cua.com"));
    }

    #[test]
    fn unchanged_ascii_domain_is_borrowed() {
        let (candidate, ascii) = normalize_candidate("user@example.com", Some(&IdnaNormalizer));
        assert!(matches!(candidate, Cow::Borrowed(_)));
        assert!(ascii.is_none());
    }

    #[test]
    fn uppercase_ascii_domain_is_not_reported_as_idn() {
        let (candidate, ascii) = normalize_candidate("USER@EXAMPLE.COM", Some(&IdnaNormalizer));
        assert_eq!(candidate, "USER@example.com");
        assert!(ascii.is_none());
    }

    #[test]
    fn failure_keeps_original() {
        let (candidate, ascii) = normalize_candidate("user@exämple.com", Some(&Refuse));
        assert_eq!(candidate, "user@exämple.com");
        assert!(ascii.is_none());
    }

    #[test]
    fn no_separator_or_no_normalizer() {
        let (candidate, _) = normalize_candidate("nobody", Some(&IdnaNormalizer));
        assert_eq!(candidate, "nobody");
        let (candidate, _) = normalize_candidate("user@exämple.com", None);
        assert_eq!(candidate, "user@exämple.com");
    }
}
