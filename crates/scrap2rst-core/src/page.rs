//! Page URL derivation.
//!
//! A page lives at `https://host/<project>/<page>`. The raw text of the
//! page is served from `https://host/api/pages/<project>/<page>/text`, and
//! internal page references resolve against `https://host/<project>`.

use crate::error::{Result, Scrap2RstError};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left unescaped in an API path segment. `/` is escaped so a
/// page title containing slashes stays a single segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A parsed page URL.
///
/// # Example
///
/// ```
/// use scrap2rst_core::PageUrl;
///
/// let page = PageUrl::parse("https://scrapbox.io/proj/page").unwrap();
/// assert_eq!(page.api_url(), "https://scrapbox.io/api/pages/proj/page/text");
/// assert_eq!(page.base_url(), "https://scrapbox.io/proj");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    project: String,
    page: String,
}

impl PageUrl {
    /// Parse a page URL. The first path segment is the project.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input.trim())?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Scrap2RstError::Url(format!("{} has no host", input)));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        let (project, rest) = match segments.split_first() {
            Some((project, rest)) => (project.to_string(), rest),
            None => {
                return Err(Scrap2RstError::Url(format!(
                    "{} has no project segment",
                    input
                )))
            }
        };

        let page = rest
            .iter()
            .map(|seg| percent_decode_str(seg).decode_utf8_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        Ok(Self { url, project, page })
    }

    /// The project name (first path segment, as it appears in the URL).
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The decoded page title; empty for a project URL.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// URL of the raw-text API endpoint for this page.
    ///
    /// URLs that already point into `/api/` are returned unchanged.
    pub fn api_url(&self) -> String {
        if self.url.path().starts_with("/api/") {
            return self.url.to_string();
        }

        let mut api = format!(
            "{}/api/pages/{}",
            self.url.origin().ascii_serialization(),
            self.project
        );
        if !self.page.is_empty() {
            api.push('/');
            api.extend(utf8_percent_encode(&self.page, SEGMENT));
        }
        api.push_str("/text");

        if let Some(query) = self.url.query() {
            api.push('?');
            api.push_str(query);
        }
        api
    }

    /// Base URL that internal page references resolve against.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.url.origin().ascii_serialization(),
            self.project
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let page = PageUrl::parse("https://scrapbox.io/proj/page").unwrap();
        assert_eq!(page.api_url(), "https://scrapbox.io/api/pages/proj/page/text");
    }

    #[test]
    fn test_api_url_encodes_slash_in_page() {
        let page = PageUrl::parse("https://scrapbox.io/proj/page/with/slash").unwrap();
        assert_eq!(page.page(), "page/with/slash");
        assert_eq!(
            page.api_url(),
            "https://scrapbox.io/api/pages/proj/page%2Fwith%2Fslash/text"
        );
    }

    #[test]
    fn test_api_url_normalizes_existing_escapes() {
        let page = PageUrl::parse("https://scrapbox.io/proj/a%20b").unwrap();
        assert_eq!(page.page(), "a b");
        assert_eq!(page.api_url(), "https://scrapbox.io/api/pages/proj/a%20b/text");
    }

    #[test]
    fn test_api_url_passthrough() {
        let input = "https://scrapbox.io/api/pages/proj/page/text";
        let page = PageUrl::parse(input).unwrap();
        assert_eq!(page.api_url(), input);
    }

    #[test]
    fn test_base_url() {
        let page = PageUrl::parse("https://scrapbox.io/proj/some/page").unwrap();
        assert_eq!(page.project(), "proj");
        assert_eq!(page.base_url(), "https://scrapbox.io/proj");
    }

    #[test]
    fn test_project_only() {
        let page = PageUrl::parse("https://scrapbox.io/proj/").unwrap();
        assert_eq!(page.page(), "");
        assert_eq!(page.api_url(), "https://scrapbox.io/api/pages/proj/text");
    }

    #[test]
    fn test_missing_project_is_error() {
        assert!(matches!(
            PageUrl::parse("https://scrapbox.io/"),
            Err(Scrap2RstError::Url(_))
        ));
    }

    #[test]
    fn test_invalid_url_is_error() {
        assert!(PageUrl::parse("scrapbox page").is_err());
        assert!(PageUrl::parse("mailto:someone@example.com").is_err());
    }
}
