use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use tracing::debug;

use crate::mx::MxRecord;

use super::options::ProbeConfig;

// Large enough for SMTP single and multi-line replies.
const MAX_REPLY_BYTES: usize = 2048;

/// One SMTP connection to a single exchange host.
///
/// The socket is exclusively owned and lives for at most one host attempt;
/// dropping the session closes it, so every terminal transition of the
/// probe, including timeouts, releases the connection.
pub(crate) struct SmtpSession {
    stream: TcpStream,
    host: String,
    debug: bool,
}

impl SmtpSession {
    /// Walk the ordered host list and keep the first exchange that accepts
    /// a connection within the connect timeout. Hosts that refuse, reset or
    /// time out simply advance the cursor.
    pub(crate) fn connect_first(records: &[MxRecord], config: &ProbeConfig) -> Option<Self> {
        for record in records {
            match Self::connect_host(&record.exchange, config) {
                Ok(session) => return Some(session),
                Err(err) => {
                    if config.debug {
                        debug!(host = %record.exchange, error = %err, "connection attempt failed");
                    }
                }
            }
        }
        None
    }

    fn connect_host(host: &str, config: &ProbeConfig) -> io::Result<Self> {
        let mut last_err = None;
        for addr in (host, config.port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, config.connect_timeout()) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(config.read_timeout()))?;
                    stream.set_write_timeout(Some(config.read_timeout()))?;
                    return Ok(Self {
                        stream,
                        host: host.to_string(),
                        debug: config.debug,
                    });
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::AddrNotAvailable, "no socket address resolved")
        }))
    }

    /// One bounded read. A timeout, reset or closed connection collapses to
    /// an empty reply, which carries no response code.
    pub(crate) fn read_reply(&mut self) -> String {
        let mut buf = [0u8; MAX_REPLY_BYTES];
        let read = match self.stream.read(&mut buf) {
            Ok(n) => n,
            Err(err) => {
                if self.debug {
                    debug!(host = %self.host, error = %err, "read failed");
                }
                0
            }
        };
        let reply = String::from_utf8_lossy(&buf[..read]).into_owned();
        if self.debug && !reply.is_empty() {
            debug!(host = %self.host, "<<< {}", reply.trim_end());
        }
        reply
    }

    /// Write one CRLF-terminated line. Write failures are swallowed; the
    /// following read will come back empty and the probe rejects.
    pub(crate) fn send_line(&mut self, line: &str) -> bool {
        if self.debug {
            debug!(host = %self.host, ">>> {line}");
        }
        let mut data = line.as_bytes().to_vec();
        data.extend_from_slice(b"\r\n");
        self.stream
            .write_all(&data)
            .and_then(|()| self.stream.flush())
            .is_ok()
    }

    /// Send `line` and read the peer's reply.
    pub(crate) fn exchange(&mut self, line: &str) -> String {
        if !self.send_line(line) {
            return String::new();
        }
        self.read_reply()
    }

    /// Best-effort farewell; the reply, if any, is not read. Consumes the
    /// session, which closes the socket.
    pub(crate) fn close(mut self) {
        let _ = self.send_line("QUIT");
    }
}
