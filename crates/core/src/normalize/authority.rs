//! Scheme, host, and port canonicalization.

use url::{Host, Url};

use super::NormalizeError;

/// Default port for a supported scheme.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Drop the port when it equals the default for `scheme`.
///
/// Defaulting is per scheme: `http` on 443 and `https` on 80 keep their port.
pub fn canonical_port(scheme: &str, port: Option<u16>) -> Option<u16> {
    port.filter(|&p| default_port(scheme) != Some(p))
}

/// Remove leading `www.` labels.
///
/// Repeats until the host no longer starts with `www.`, and stops short of
/// producing an empty host (`www.` alone is returned unchanged).
pub fn strip_www(host: &str) -> &str {
    let mut host = host;
    while let Some(rest) = host.strip_prefix("www.") {
        if rest.is_empty() {
            break;
        }
        host = rest;
    }
    host
}

/// Canonical host of a parsed `http(s)` URL.
///
/// The parser has already applied IDNA ToASCII to domain hosts, so an
/// internationalized name arrives here in punycode and a host that fails IDNA
/// never parses at all. IP literals are kept in their serialized form.
pub fn canonical_host(url: &Url) -> Result<String, NormalizeError> {
    match url.host() {
        Some(Host::Domain(domain)) => {
            let lowered = domain.to_ascii_lowercase();
            Ok(strip_www(&lowered).to_owned())
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => {
            url.host_str().map(str::to_owned).ok_or_else(NormalizeError::url_required)
        }
        None => Err(NormalizeError::url_required()),
    }
}
