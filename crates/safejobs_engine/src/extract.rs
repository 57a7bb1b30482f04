use scraper::{Html, Selector};

/// Pulls an ordered list of text snippets out of an HTML document.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Collects the trimmed text of every element matching `tag`, in document
/// order. Elements with no text are skipped.
#[derive(Debug, Clone)]
pub struct HeadingExtractor {
    tag: String,
}

impl HeadingExtractor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Default for HeadingExtractor {
    fn default() -> Self {
        Self::new("h3")
    }
}

impl Extractor for HeadingExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(&self.tag) else {
            return Vec::new();
        };
        let doc = Html::parse_document(html);
        doc.select(&selector)
            .map(|node| node.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}
