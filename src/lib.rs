#![forbid(unsafe_code)]
//! mailprobe — best-effort SMTP mailbox existence probing.
//!
//! The crate never delivers mail. It resolves the MX hosts of the target
//! domain, opens a plaintext SMTP session against the first reachable host
//! and runs a partial handshake (`HELO` / `MAIL FROM` / `RCPT TO`) whose
//! final response code decides whether the mailbox plausibly exists.

pub mod mx;
pub mod probe;
pub mod validator;

pub use mx::{Error as MxError, MxRecord, query_mx};
pub use probe::{
    MailboxAddress, ProbeConfig, ProbeError, check_mailbox_exists, probe, response_code,
};
pub use validator::{email_exists, validate_format};
