//! Syntactic format checking — the collaborator in front of the prober.
//!
//! This is deliberately a shape check, not a full RFC 5321/5322 grammar:
//! the prober only needs a splittable `local@domain` string, and the mail
//! server gets the final word anyway.

use crate::probe::{ProbeConfig, ProbeError, check_mailbox_exists};

/// Check that `email` looks like a plausible address.
///
/// Errors on empty input, mirroring the probe entry points; any other
/// malformation returns `Ok(false)`.
pub fn validate_format(email: &str) -> Result<bool, ProbeError> {
    let input = email.trim();
    if input.is_empty() {
        return Err(ProbeError::EmptyAddress);
    }
    let Some((local, domain)) = input.rsplit_once('@') else {
        return Ok(false);
    };
    Ok(is_local_ok(local) && is_domain_ok(domain))
}

/// Format check, then SMTP probe. A format-invalid address is reported as
/// non-existent without touching the network.
pub fn email_exists(email: &str, config: &ProbeConfig) -> Result<bool, ProbeError> {
    if !validate_format(email)? {
        return Ok(false);
    }
    check_mailbox_exists(email, config)
}

fn is_local_ok(local: &str) -> bool {
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local.chars().all(is_atom_char)
}

fn is_atom_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ".!#$%&'*+-/=?^_`{|}~".contains(ch)
}

fn is_domain_ok(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 255 {
        return false;
    }
    domain.split('.').all(is_label_ok)
}

fn is_label_ok(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}
