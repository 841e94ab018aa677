//! SMTP mailbox probing.
//!
//! The public entry point is [`check_mailbox_exists`], which resolves the MX
//! hosts for the address's domain and executes a minimal SMTP dialogue
//! against the first host that accepts a connection. [`probe`] runs the same
//! dialogue against a caller-supplied host list.
//!
//! The dialogue never goes past `RCPT TO`: the server's response code to the
//! proposed recipient is the existence signal. Everything network-shaped
//! (unreachable hosts, timeouts, malformed replies) resolves to `false`;
//! only empty call-time input is an error.

mod address;
mod engine;
mod error;
mod options;
mod reply;
mod session;

pub use address::MailboxAddress;
pub use engine::{check_mailbox_exists, probe};
pub use error::ProbeError;
pub use options::ProbeConfig;
pub use reply::response_code;
