use std::net::IpAddr;

use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::Resolver;

use super::{Error, MxRecord};

/// Lookup MX records for `domain` using the system resolver.
///
/// The domain is normalized via IDNA before querying DNS. The returned
/// records are sorted by ascending preference; equal preferences keep the
/// DNS response order. A domain without MX records yields an empty `Vec`.
pub fn query_mx(domain: &str) -> Result<Vec<MxRecord>, Error> {
    let resolver = build_resolver(&[])?;
    query_mx_with(&resolver, domain)
}

/// Same as [`query_mx`], against a caller-supplied resolver implementation.
pub fn query_mx_with<R>(resolver: &R, domain: &str) -> Result<Vec<MxRecord>, Error>
where
    R: LookupMx,
{
    let ascii = normalize_domain(domain)?;
    let mut records = resolver.lookup_mx(&ascii).map_err(Error::lookup)?;

    // Stable sort: ties keep the resolver-returned order.
    records.sort_by_key(|record| record.preference);
    Ok(records)
}

/// Build a synchronous resolver. An empty `name_servers` list selects the
/// system configuration; otherwise the given servers are queried on port 53.
pub fn build_resolver(name_servers: &[IpAddr]) -> Result<Resolver, Error> {
    if name_servers.is_empty() {
        Resolver::from_system_conf().map_err(Error::resolver_init)
    } else {
        let group = NameServerConfigGroup::from_ips_clear(name_servers, 53, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), group);
        Resolver::new(config, ResolverOpts::default()).map_err(Error::resolver_init)
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = match Resolver::mx_lookup(self, domain) {
            Ok(lookup) => lookup,
            // "query succeeded, zero records" is not an error.
            Err(err) if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        (self.on_lookup)(domain)
    }
}
