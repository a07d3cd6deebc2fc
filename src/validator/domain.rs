use once_cell::sync::Lazy;

use regex::Regex;

use super::types::Rejection;

pub(crate) const MAX_DOMAIN_LEN: usize = 253;
pub(crate) const MAX_LABEL_LEN: usize = 63;

static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$").expect("label regex is valid")
});

/// Valide le domaine (déjà converti en ASCII si possible): longueur, bords,
/// labels puis TLD. S'arrête à la première règle en échec.
pub(crate) fn check_domain(domain: &str) -> Result<(), Rejection> {
    if domain.is_empty() {
        return Err(Rejection::DomainEmpty);
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(Rejection::DomainTooLong { len: domain.len() });
    }
    if !domain.contains('.') {
        return Err(Rejection::DomainNoDot);
    }
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return Err(Rejection::DomainEdge);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(Rejection::TooFewLabels {
            count: labels.len(),
        });
    }
    for label in &labels {
        check_label(label)?;
    }

    // labels.len() >= 2
    check_tld(labels[labels.len() - 1])
}

fn check_label(label: &str) -> Result<(), Rejection> {
    if label.is_empty() {
        return Err(Rejection::LabelEmpty);
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(Rejection::LabelTooLong {
            label: label.to_string(),
            len: label.len(),
        });
    }
    if !LABEL_RE.is_match(label) {
        return Err(Rejection::LabelSyntax {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// TLD: >= 2 chars, `[A-Za-z0-9-]` (autorise `xn--`), au moins une lettre.
pub(crate) fn check_tld(tld: &str) -> Result<(), Rejection> {
    if tld.len() < 2 {
        return Err(Rejection::TldTooShort {
            tld: tld.to_string(),
        });
    }
    if !tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(Rejection::TldInvalidChars {
            tld: tld.to_string(),
        });
    }
    if !tld.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(Rejection::TldNumeric {
            tld: tld.to_string(),
        });
    }
    Ok(())
}

/// Remplace uniquement le dernier label de `domain` par `tld`.
pub(crate) fn replace_tld(domain: &str, tld: &str) -> String {
    match domain.rsplit_once('.') {
        Some((head, _)) => format!("{head}.{tld}"),
        None => tld.to_string(),
    }
}
