//! URL syntax and domain checks
//!
//! Syntactic only; nothing here ever touches the network.

use crate::models::ValidationError;
use url::Url;

/// Parse an absolute URL, mapping failure to the malformed-url error.
pub fn parse_absolute_url(url_string: &str) -> Result<Url, ValidationError> {
    Url::parse(url_string)
        .map_err(|_| ValidationError::InvalidUrl(format!("url: {} is malformed", url_string)))
}

pub fn is_http_or_https(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// A website link must parse as an absolute URL and use http or https.
pub fn check_website_url(website_url: &str) -> Result<Url, ValidationError> {
    let parsed = parse_absolute_url(website_url)?;
    if !is_http_or_https(&parsed) {
        return Err(ValidationError::InvalidUrl(format!(
            "Make sure to include http or https in url links, {} is not a valid url",
            website_url
        )));
    }
    Ok(parsed)
}

/// Exact host equality; no subdomain matching.
pub fn url_in_domain(url_string: &str, domain: &str) -> Result<bool, ValidationError> {
    let parsed = parse_absolute_url(url_string)?;
    Ok(parsed.host_str() == Some(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_accepted() {
        assert!(check_website_url("https://example.com").is_ok());
        assert!(check_website_url("http://example.com/page?q=1").is_ok());
    }

    #[test]
    fn test_other_schemes_rejected() {
        let err = check_website_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl(_)));
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_relative_url_malformed() {
        let err = check_website_url("example.com/store").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_domain_is_exact_match() {
        assert!(url_in_domain("https://play.google.com/store/apps/x", "play.google.com").unwrap());
        assert!(!url_in_domain("https://evil.com", "play.google.com").unwrap());
        // no subdomain matching
        assert!(!url_in_domain("https://sub.play.google.com/x", "play.google.com").unwrap());
    }
}
