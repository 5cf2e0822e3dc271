//! Normalizes a user-supplied string — a bare domain or a full URL — into
//! its scheme, authority, domain, path and query components, and validates
//! the domain component against the syntactic form the permutation
//! generator and enrichment pipeline both expect.

use fancy_regex::Regex;

lazy_static! {
    /// Loosely follows RFC 3986 appendix B, with a named `domain` group that
    /// strips a trailing `:port` and is lowercased before use.
    static ref URL_REGEX: Regex = Regex::new(
        r"^(?P<scheme>[a-zA-Z][a-zA-Z0-9+.-]*)://(?P<authority>[^/?#]+)(?P<path>[^?#]*)(?:\?(?P<query>[^#]*))?"
    ).unwrap();
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unable to parse {input:?} as a url or domain name")]
    Unparseable { input: String },

    #[error("domain {found:?} does not match the accepted syntactic form")]
    InvalidDomain { found: String },
}

/// The normalized, component-wise view of a parsed URL or domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub authority: String,
    pub domain: String,
    pub path: String,
    pub query: Option<String>,
}

impl ParsedUrl {
    /// Reassemble the normalized components into a single URI string.
    pub fn full_uri(&self) -> String {
        let mut uri = format!("{}://{}{}", self.scheme, self.domain, self.path);

        if let Some(query) = &self.query {
            uri.push('?');
            uri.push_str(query);
        }

        uri
    }
}

/// Parses `input` as a URL, prepending `http://` when no scheme separator is
/// present. The scheme is forced to `http` whenever the input did not
/// specify `http` or `https` explicitly, mirroring the original tool's
/// "we only ever care about reaching the candidate over the web" stance.
pub fn parse(input: &str) -> Result<ParsedUrl, ParseError> {
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{input}")
    };

    let captures = URL_REGEX
        .captures(&with_scheme)
        .ok()
        .flatten()
        .ok_or_else(|| ParseError::Unparseable {
            input: input.to_string(),
        })?;

    let scheme = captures
        .name("scheme")
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();
    let scheme = if scheme == "https" { scheme } else { "http".to_string() };

    let authority = captures
        .name("authority")
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::Unparseable {
            input: input.to_string(),
        })?;

    let domain = authority
        .rsplit_once(':')
        .map_or(authority, |(host, _port)| host)
        .to_lowercase();

    crate::permutate::Domain::new(&domain).map_err(|_| ParseError::InvalidDomain {
        found: domain.clone(),
    })?;

    let path = captures.name("path").map(|m| m.as_str().to_string()).unwrap_or_default();
    let query = captures.name("query").map(|m| m.as_str().to_string());

    Ok(ParsedUrl {
        scheme,
        authority: authority.to_string(),
        domain,
        path,
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_domain_defaults_to_http() {
        let parsed = parse("example.com").unwrap();

        assert_eq!(parsed.scheme, "http");
        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.path, "");
        assert_eq!(parsed.query, None);
    }

    #[test]
    fn test_parse_preserves_https_scheme() {
        let parsed = parse("https://example.com/login?next=/account").unwrap();

        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.path, "/login");
        assert_eq!(parsed.query.as_deref(), Some("next=/account"));
    }

    #[test]
    fn test_parse_strips_port_from_domain() {
        let parsed = parse("http://example.com:8080/").unwrap();

        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.authority, "example.com:8080");
    }

    #[test]
    fn test_parse_forces_non_http_scheme_to_http() {
        let parsed = parse("ftp://example.com").unwrap();
        assert_eq!(parsed.scheme, "http");
    }

    #[test]
    fn test_parse_rejects_invalid_domain() {
        assert!(parse("not a domain").is_err());
    }

    #[test]
    fn test_full_uri_reassembly() {
        let parsed = parse("https://example.com/a/b?c=d").unwrap();
        assert_eq!(parsed.full_uri(), "https://example.com/a/b?c=d");
    }
}
