// src/classify.rs
// =============================================================================
// This module classifies URL strings. It answers three questions:
//
// 1. Is this a real, absolute URL at all? (is_valid_url)
// 2. Does it belong to the site we are crawling? (is_same_domain)
// 3. Does it point at a file with a recognizable extension, or at a
//    navigable page we could crawl further? (extract_extension)
//
// Everything in here is a pure function: same input, same answer, no state.
// Malformed input never panics or returns an error past this boundary; a
// string that doesn't parse is simply "not valid" / "not same domain" /
// "no extension".
//
// Rust concepts:
// - Option<T>: For answers that may be absent (no extension)
// - The url crate: Parsing, and the normalization it gives us for free
//   (lower-cased hosts, default ports stripped)
// - Iterator adapters: chars().all(...) for character checks
// =============================================================================

use url::Url;

// Turns user input like "example.com" into a proper base URL.
//
// People type bare domains; a URL parser needs a scheme. When the input
// doesn't already start with http:// or https://, we assume https://.
//
// Examples:
//   "example.com"          -> "https://example.com"
//   "http://example.com"   -> unchanged
//   "  example.com  "      -> trimmed, then prefixed
pub fn normalize_seed(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

// Returns the authority component of a parsed URL: "host" or "host:port".
//
// The url crate has already lower-cased the host and dropped default ports
// (https://Example.COM:443/ parses with host "example.com" and no port),
// so two authorities that name the same endpoint compare equal as strings.
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;

    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

// Checks whether a string is an absolute URL with a scheme and an authority.
//
// "https://example.com/x" -> true
// "example.com"           -> false (no scheme, won't parse as absolute)
// "mailto:a@b.com"        -> false (a scheme, but no authority)
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => authority(&url).is_some(),
        Err(_) => false,
    }
}

// Checks whether a URL belongs to the crawled site.
//
// A link is in scope when its authority equals the base authority exactly,
// or is a subdomain of it (ends with "." + base authority). The dot prefix
// is what keeps "notexample.com" from matching "example.com".
//
// An explicit non-default port has to match on both sides:
// "example.com:8443" is not the same authority as "example.com".
pub fn is_same_domain(candidate: &str, base_authority: &str) -> bool {
    let url = match Url::parse(candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };

    match authority(&url) {
        Some(auth) => {
            auth == base_authority || auth.ends_with(&format!(".{}", base_authority))
        }
        None => false,
    }
}

// Extracts a file-extension token from a URL's path, if it has one.
//
// Rules:
// - Only the path counts; query strings and fragments are ignored
// - The token is whatever follows the LAST '.' in the path, lower-cased
// - It is accepted only if it is 1-5 ASCII alphanumeric characters
// - Accepted tokens come back with a leading dot, e.g. ".pdf"
//
// Anything that fails these rules is treated as having no extension, which
// the crawler reads as "presumably an HTML page worth descending into".
// The length and character limits reject things like "/v1.2/page" (the
// "2/page" suffix has a slash) and "/a/b.toolong12" (too long).
pub fn extract_extension(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    let path = url.path();

    let (_, suffix) = path.rsplit_once('.')?;
    let token = suffix.to_lowercase();

    if token.is_empty() || token.len() > 5 {
        return None;
    }

    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(format!(".{}", token))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Option instead of an error?
//    - "This URL has no extension" is a normal answer, not a failure
//    - Option<String> makes the caller handle both cases explicitly
//    - Errors are for things that went wrong; None is a fact about the input
//
// 2. What does rsplit_once('.') do?
//    - Splits a string at the LAST occurrence of '.'
//    - Returns Some((before, after)) or None if there's no '.' at all
//    - "/docs/archive.tar.gz".rsplit_once('.') gives ("/docs/archive.tar", "gz")
//
// 3. Why ASCII alphanumeric instead of char::is_alphanumeric?
//    - Real file extensions (pdf, jpg, html, xlsx) are plain ASCII
//    - The Unicode version would accept accented letters, which never
//      appear in genuine extensions but do appear in percent-decoded paths
//
// 4. What normalization does Url::parse give us?
//    - Hosts are lower-cased: "EXAMPLE.com" becomes "example.com"
//    - Default ports disappear: "https://example.com:443" has port() == None
//    - That's why plain string comparison of authorities is enough here
//
// 5. Why the "." prefix in the subdomain check?
//    - "sub.example.com".ends_with(".example.com") is true
//    - "notexample.com".ends_with(".example.com") is false
//    - Without the dot, any host merely ending in the base name would match
//
// 6. What makes these functions "pure"?
//    - No global state, no I/O, no mutation of anything outside the function
//    - Calling them twice with the same input always gives the same answer
//    - Pure functions are trivial to unit test, which the tests below exploit
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_domain() {
        assert_eq!(normalize_seed("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_keeps_explicit_scheme() {
        assert_eq!(normalize_seed("http://example.com"), "http://example.com");
        assert_eq!(normalize_seed("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_seed("  example.com  "), "https://example.com");
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
        assert!(is_valid_url("https://sub.example.com:8080/x"));
    }

    #[test]
    fn test_invalid_urls() {
        // No scheme: doesn't parse as an absolute URL
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/just/a/path"));
        assert!(!is_valid_url(""));
        // A scheme but no authority
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("tel:+15551234567"));
        assert!(!is_valid_url("javascript:void(0)"));
        assert!(!is_valid_url("data:text/plain,hello"));
    }

    #[test]
    fn test_same_domain_exact_match() {
        assert!(is_same_domain("https://example.com/page", "example.com"));
        assert!(is_same_domain("http://example.com", "example.com"));
    }

    #[test]
    fn test_same_domain_subdomain() {
        assert!(is_same_domain("https://sub.example.com/x", "example.com"));
        assert!(is_same_domain("https://a.b.example.com/", "example.com"));
    }

    #[test]
    fn test_other_domains_rejected() {
        assert!(!is_same_domain("https://other.org/y", "example.com"));
        // Suffix match alone is not enough; the dot boundary matters
        assert!(!is_same_domain("https://notexample.com", "example.com"));
    }

    #[test]
    fn test_same_domain_is_case_insensitive_on_host() {
        // The parser lower-cases hosts, so this matches
        assert!(is_same_domain("https://EXAMPLE.com/x", "example.com"));
    }

    #[test]
    fn test_dotted_numeric_hosts_must_be_real_ipv4() {
        // The parser treats a host whose last label is numeric as an IPv4
        // address; "sub.127.0.0.1" is not one, so the whole URL is invalid
        assert!(!is_valid_url("http://sub.127.0.0.1:8080/x"));
        assert!(!is_same_domain("http://sub.127.0.0.1:8080/x", "127.0.0.1:8080"));
        assert!(is_valid_url("http://127.0.0.1:8080/x"));
    }

    #[test]
    fn test_same_domain_port_handling() {
        // Default port is stripped by the parser
        assert!(is_same_domain("https://example.com:443/x", "example.com"));
        // An explicit non-default port is a different authority
        assert!(!is_same_domain("https://example.com:8443/x", "example.com"));
        assert!(is_same_domain(
            "http://127.0.0.1:8080/x",
            "127.0.0.1:8080"
        ));
    }

    #[test]
    fn test_malformed_input_is_not_same_domain() {
        assert!(!is_same_domain("not a url", "example.com"));
        assert!(!is_same_domain("mailto:a@example.com", "example.com"));
    }

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(
            extract_extension("https://example.com/a/b.PDF"),
            Some(".pdf".to_string())
        );
    }

    #[test]
    fn test_extension_rejects_long_suffix() {
        assert_eq!(extract_extension("https://example.com/a/b.toolong12"), None);
    }

    #[test]
    fn test_extension_none_without_dot() {
        assert_eq!(extract_extension("https://example.com/a/b"), None);
        assert_eq!(extract_extension("https://example.com/"), None);
    }

    #[test]
    fn test_extension_ignores_query() {
        assert_eq!(
            extract_extension("https://example.com/report.pdf?session=1"),
            Some(".pdf".to_string())
        );
        // The dot lives in the query, not the path
        assert_eq!(extract_extension("https://example.com/page?f=a.pdf"), None);
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(
            extract_extension("https://example.com/archive.tar.gz"),
            Some(".gz".to_string())
        );
        // The suffix after the last dot contains a slash, so no extension
        assert_eq!(extract_extension("https://example.com/v1.2/page"), None);
    }

    #[test]
    fn test_extension_rejects_empty_suffix() {
        assert_eq!(extract_extension("https://example.com/file."), None);
    }

    #[test]
    fn test_classifier_is_idempotent() {
        let url = "https://sub.example.com/doc.pdf";
        assert_eq!(is_valid_url(url), is_valid_url(url));
        assert_eq!(
            is_same_domain(url, "example.com"),
            is_same_domain(url, "example.com")
        );
        assert_eq!(extract_extension(url), extract_extension(url));
    }
}
