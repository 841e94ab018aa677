use std::net::IpAddr;
use std::time::Duration;

/// Configuration knobs for one probe invocation.
///
/// Overrides merge into the defaults via struct-update syntax:
///
/// ```
/// use mailprobe::ProbeConfig;
///
/// let config = ProbeConfig {
///     helo_hostname: "probe.example".to_string(),
///     ..ProbeConfig::default()
/// };
/// assert_eq!(config.port, 25);
/// ```
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Emit the raw SMTP transcript on the tracing debug channel.
    pub debug: bool,
    pub port: u16,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Hostname announced in `HELO`.
    pub helo_hostname: String,
    /// DNS servers to query instead of the system configuration.
    pub name_servers: Vec<IpAddr>,
    /// `RCPT TO` response codes treated as "mailbox plausible". The soft
    /// failures 451/452 are included: a deferral means the address was not
    /// rejected outright.
    pub valid_response_codes: Vec<u16>,
    /// Envelope sender announced in `MAIL FROM`.
    pub sender_address: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            port: 25,
            connect_timeout_secs: 3,
            read_timeout_secs: 5,
            helo_hostname: "localhost".to_string(),
            name_servers: Vec::new(),
            valid_response_codes: vec![250, 451, 452],
            sender_address: "user@localhost".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
