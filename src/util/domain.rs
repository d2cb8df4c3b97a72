use std::net::IpAddr;
use url::Url;

/// Derives the display domain for an article URL.
///
/// Parses `url` as an absolute URL, takes its host and strips one leading
/// `www.`. Returns `None` when the string does not parse, has no host, or the
/// remaining domain is empty. Callers render the article without a source
/// annotation in that case.
///
/// # Examples
///
/// ```
/// use newsboard::util::derive_domain;
///
/// assert_eq!(derive_domain("https://www.ibm.com/quantum").as_deref(), Some("ibm.com"));
/// assert_eq!(derive_domain("https://blog.google/technology/").as_deref(), Some("blog.google"));
/// assert_eq!(derive_domain("not a url"), None);
/// ```
pub fn derive_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_owned())
    }
}

/// Returns true when `host` names the local machine.
///
/// Accepts `localhost` and any loopback IP literal, with or without the
/// brackets `Url::host_str` puts around IPv6 addresses.
pub fn is_local_host(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }

    // Strip brackets from IPv6 addresses for parsing
    let host_for_parse = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    host_for_parse
        .parse::<IpAddr>()
        .is_ok_and(|ip| ip.is_loopback())
}
