use super::types::Rejection;

pub(crate) const MAX_LOCAL_LEN: usize = 64;

/// Règles local part: 1..=64 octets, `[A-Za-z0-9._+-]`, '.' non initial/terminal, pas de "..".
pub(crate) fn check_local(local: &str) -> Result<(), Rejection> {
    if local.is_empty() {
        return Err(Rejection::LocalEmpty);
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err(Rejection::LocalTooLong { len: local.len() });
    }
    if let Some(ch) = local.chars().find(|c| !is_local_char(*c)) {
        return Err(Rejection::LocalInvalidChar { ch });
    }
    if local.starts_with('.') || local.ends_with('.') {
        return Err(Rejection::LocalDotEdge);
    }
    if local.contains("..") {
        return Err(Rejection::LocalConsecutiveDots);
    }
    Ok(())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}
