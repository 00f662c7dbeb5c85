use std::io;
use std::net::SocketAddr;
use tokio::net::lookup_host;

/// Resolve a domain through the system resolver (both IPv4 and IPv6).
///
/// Addresses are returned in the order the platform resolver produced them;
/// callers must not assume anything stronger. Resolution failures carry the
/// resolver's own error message.
pub async fn resolve_domain(domain: &str) -> io::Result<Vec<SocketAddr>> {
    let addrs = lookup_host((domain, 0u16)).await?;
    Ok(addrs.collect())
}
