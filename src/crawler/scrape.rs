use anyhow::{anyhow, Result};
use log2::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

use super::config::CrawlConfig;

/// An anchor pulled off a page: the raw `href` attribute and the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

/// Fetch one page body. Non-success statuses and non-HTML responses are
/// errors, so callers treat them the same way as transport failures.
pub async fn fetch_page(url: &Url, client: &Client, config: &CrawlConfig) -> Result<String> {
    let response = client
        .get(url.clone())
        .timeout(Duration::from_secs(config.request_timeout_sec))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("Failed to fetch page {}: {}", url, response.status()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !content_type.contains("text/html") {
        return Err(anyhow!("Not an HTML page {}: {:?}", url, content_type));
    }

    let html = response.text().await?;
    debug!("Fetched {} ({} bytes)", url, html.len());

    Ok(html)
}

/// Collect every anchor whose href starts with `prefix`, in document order.
/// Duplicates are kept; the graph deduplicates and the frontier is allowed to
/// see the same link twice.
pub fn extract_article_links(html: &str, prefix: &str) -> Result<Vec<PageLink>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if href.starts_with(prefix) {
                links.push(PageLink {
                    href: href.to_string(),
                    text: element.text().collect(),
                });
            }
        }
    }

    Ok(links)
}

/// Resolve an href against the page it appeared on. No further cleanup is
/// applied: fragments and trailing slashes stay, so the graph keys match the
/// URLs exactly as pages name them.
pub fn resolve_href(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    base.join(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_prefix_links_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/wiki/First">First</a>
                <a href="/other/Skip">Skip</a>
                <a href="https://elsewhere.example/wiki/Skip">Skip too</a>
                <a href="/wiki/Second">Second</a>
            </body></html>
        "#;

        let links = extract_article_links(html, "/wiki/").unwrap();

        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/wiki/First", "/wiki/Second"]);
    }

    #[test]
    fn duplicate_links_are_kept() {
        let html = r#"
            <a href="/wiki/Same">once</a>
            <a href="/wiki/Same">twice</a>
        "#;

        let links = extract_article_links(html, "/wiki/").unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, links[1].href);
    }

    #[test]
    fn visible_text_includes_nested_markup() {
        let html = r#"<a href="/wiki/Styled"><b>Bold</b> and plain</a>"#;

        let links = extract_article_links(html, "/wiki/").unwrap();

        assert_eq!(links[0].text, "Bold and plain");
    }

    #[test]
    fn anchors_without_matching_prefix_are_dropped() {
        let html = r##"
            <a href="#section">fragment only</a>
            <a href="/wiki">no trailing slash</a>
            <a>no href at all</a>
        "##;

        let links = extract_article_links(html, "/wiki/").unwrap();

        assert!(links.is_empty());
    }

    #[test]
    fn resolve_joins_relative_href_against_base() {
        let base = Url::parse("https://en.wikipedia.org/wiki/Paris").unwrap();

        let resolved = resolve_href(&base, "/wiki/France").unwrap();

        assert_eq!(resolved.as_str(), "https://en.wikipedia.org/wiki/France");
    }

    #[test]
    fn resolve_keeps_fragments_and_trailing_slashes() {
        let base = Url::parse("https://en.wikipedia.org/wiki/Paris").unwrap();

        let with_fragment = resolve_href(&base, "/wiki/France#History").unwrap();
        let with_slash = resolve_href(&base, "/wiki/France/").unwrap();

        assert_eq!(
            with_fragment.as_str(),
            "https://en.wikipedia.org/wiki/France#History"
        );
        assert_eq!(with_slash.as_str(), "https://en.wikipedia.org/wiki/France/");
    }
}
