use thiserror::Error;

/// Input errors raised before any DNS or socket activity.
///
/// Ordinary network conditions (unreachable hosts, timeouts, protocol
/// rejections) are never surfaced as errors; they resolve to a `false`
/// probe result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("email address cannot be empty")]
    EmptyAddress,
    #[error("email address is missing an '@' separator")]
    MissingAtSign,
    #[error("email address has an empty local part")]
    EmptyLocalPart,
    #[error("email address has an empty domain")]
    EmptyDomain,
}
