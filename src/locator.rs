use std::net::{IpAddr, SocketAddr};
use crate::geoip::{GeoDatabase, GeoError};
use crate::{resolver, DomainList, Result};

/// Per-domain resolve-and-report engine.
///
/// Owns the database handle for the run; domains are processed strictly one
/// at a time, addresses within a domain in resolver order, first country hit
/// wins.
pub struct Locator {
    geoip: GeoDatabase,
    stats: Statistics,
}

/// Diagnostic counters for a run. Logged at the end, never printed to stdout.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_domains: u64,
    pub located: u64,
    pub resolve_failures: u64,
    pub unmatched: u64,
}

impl Locator {
    pub fn new(geoip: GeoDatabase) -> Self {
        Locator {
            geoip,
            stats: Statistics::default(),
        }
    }

    /// Process every domain in the list, printing one result line per
    /// geolocated domain.
    pub async fn run(&mut self, domains: &mut DomainList) -> Result<()> {
        while let Some(domain) = domains.next_domain().await? {
            if let Some((ip, country)) = self.process_domain(&domain).await {
                println!("{}", result_line(&domain, ip, &country));
            }
        }

        tracing::info!(
            "processed {} domains: {} located, {} unresolvable, {} without a country match",
            self.stats.total_domains,
            self.stats.located,
            self.stats.resolve_failures,
            self.stats.unmatched
        );

        Ok(())
    }

    /// Resolve one domain and find the first address with a country mapping.
    ///
    /// Resolution failures and lookup-call failures are reported to the
    /// diagnostic stream and recovered locally; a domain whose addresses all
    /// miss yields `None` with no diagnostic (visible at debug level only).
    pub async fn process_domain(&mut self, domain: &str) -> Option<(IpAddr, String)> {
        self.stats.total_domains += 1;

        let addrs = match resolver::resolve_domain(domain).await {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::error!("failed to resolve domain {}: {}", domain, e);
                self.stats.resolve_failures += 1;
                return None;
            }
        };

        let found = first_country_match(domain, &addrs, |ip| self.geoip.country_name(ip));
        match found {
            Some(hit) => {
                self.stats.located += 1;
                Some(hit)
            }
            None => {
                tracing::debug!("no country match for domain {}", domain);
                self.stats.unmatched += 1;
                None
            }
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

/// The stdout contract: domain, resolved IP, country name.
pub(crate) fn result_line(domain: &str, ip: IpAddr, country: &str) -> String {
    format!("domain {domain}'s IP address {ip} belongs to country: {country}")
}

/// Walk addresses in resolver order and return the first with a country
/// name. Lookup-call failures are reported and skipped; no further address
/// is consulted after a hit.
fn first_country_match<F>(
    domain: &str,
    addrs: &[SocketAddr],
    mut lookup: F,
) -> Option<(IpAddr, String)>
where
    F: FnMut(IpAddr) -> std::result::Result<Option<String>, GeoError>,
{
    for addr in addrs {
        let ip = addr.ip();
        match lookup(ip) {
            Ok(Some(country)) => return Some((ip, country)),
            Ok(None) => continue,
            Err(e) => {
                tracing::error!("failed to look up {} for domain {}: {}", ip, domain, e);
                continue;
            }
        }
    }

    None
}
