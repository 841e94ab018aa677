use tracing::{debug, warn};

use crate::mx::{self, MxRecord};

use super::address::MailboxAddress;
use super::error::ProbeError;
use super::options::ProbeConfig;
use super::reply::{mentions_loopback, response_code};
use super::session::SmtpSession;

/// Run the SMTP dialogue against an ordered host list.
///
/// Returns `Ok(true)` when the `RCPT TO` response code is one of
/// `config.valid_response_codes`. Every network-shaped failure (no host
/// reachable, timeout, malformed reply, protocol rejection) returns
/// `Ok(false)`. An empty host list fails closed without opening a socket.
///
/// Only connection failures advance to the next host: once a server has
/// answered, its verdict is final, even when negative.
pub fn probe(
    records: &[MxRecord],
    mailbox: &MailboxAddress,
    config: &ProbeConfig,
) -> Result<bool, ProbeError> {
    let Some(mut session) = SmtpSession::connect_first(records, config) else {
        if config.debug {
            debug!("no socket connection created");
        }
        return Ok(false);
    };

    let greeting = session.read_reply();
    if response_code(&greeting) != 220 {
        session.close();
        return Ok(false);
    }

    let helo = session.exchange(&format!("HELO {}", config.helo_hostname));
    if mentions_loopback(&helo) {
        session.close();
        return Ok(false);
    }

    // The MAIL FROM reply code is deliberately not checked.
    let _ = session.exchange(&format!("MAIL FROM: <{}>", config.sender_address));

    let rcpt = session.exchange(&format!("RCPT TO: <{mailbox}>"));
    let found = config
        .valid_response_codes
        .contains(&response_code(&rcpt));

    session.close();
    Ok(found)
}

/// Split `email`, resolve the domain's MX hosts and probe them.
///
/// The only error condition is an empty local part or domain, raised before
/// any DNS or socket activity. DNS-level failures fail closed to `false`.
pub fn check_mailbox_exists(email: &str, config: &ProbeConfig) -> Result<bool, ProbeError> {
    let mailbox = MailboxAddress::parse(email)?;
    let records = match resolve_records(mailbox.domain(), config) {
        Ok(records) => records,
        Err(err) => {
            warn!(domain = mailbox.domain(), error = %err, "MX resolution failed");
            return Ok(false);
        }
    };
    probe(&records, &mailbox, config)
}

fn resolve_records(domain: &str, config: &ProbeConfig) -> Result<Vec<MxRecord>, mx::Error> {
    let resolver = mx::build_resolver(&config.name_servers)?;
    mx::query_mx_with(&resolver, domain)
}
