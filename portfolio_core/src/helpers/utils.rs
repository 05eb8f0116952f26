use std::sync::LazyLock;

use regex::Regex;

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((https?://[^)]+)\)").expect("markdown image regex"));

static HTML_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=["'](https?://[^"']+)["']"#).expect("html image regex"));

static LAST_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"page=(\d+)>; rel="last""#).expect("link header regex"));

/// First image referenced by a README, markdown syntax first, then an HTML `src`.
pub fn extract_image_from_markdown(text: &str) -> Option<String> {
    if let Some(captures) = MARKDOWN_IMAGE.captures(text) {
        return Some(captures.get(1)?.as_str().to_string());
    }

    if let Some(captures) = HTML_IMAGE.captures(text) {
        return Some(captures.get(1)?.as_str().to_string());
    }

    None
}

/// Page number of the `rel="last"` relation in a GitHub `Link` header.
pub fn last_page_from_link(link: &str) -> Option<u64> {
    LAST_PAGE
        .captures(link)
        .and_then(|captures| captures.get(1))
        .and_then(|page| page.as_str().parse::<u64>().ok())
}
