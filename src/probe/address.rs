use std::fmt;

use super::error::ProbeError;

/// A mailbox address split into local part and domain.
///
/// The split happens on the *last* `@`, so a quoted local part containing
/// `@` survives heuristically. Both parts are guaranteed non-empty; this is
/// the only validation the prober performs.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxAddress {
    local: String,
    domain: String,
}

impl MailboxAddress {
    /// Split `input` on its last `@`.
    pub fn parse(input: &str) -> Result<Self, ProbeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ProbeError::EmptyAddress);
        }
        let Some((local, domain)) = trimmed.rsplit_once('@') else {
            return Err(ProbeError::MissingAtSign);
        };
        Self::new(local, domain)
    }

    pub fn new(local: impl Into<String>, domain: impl Into<String>) -> Result<Self, ProbeError> {
        let local = local.into();
        let domain = domain.into();
        if local.is_empty() {
            return Err(ProbeError::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(ProbeError::EmptyDomain);
        }
        Ok(Self { local, domain })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for MailboxAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}
