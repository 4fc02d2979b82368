//! Parsed HTML document with selector-style lookups
//!
//! Every metric reads the page through this type. Lookups take CSS selector
//! strings; a selector that fails to parse matches nothing.

use scraper::{ElementRef, Html, Selector};

/// Immutable, queryable view of a fetched page
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document
    ///
    /// # Example
    ///
    /// ```
    /// use seo_scan::scanner::Document;
    ///
    /// let doc = Document::parse(r#"<html lang="en"><head><title>Test</title></head></html>"#);
    /// assert_eq!(doc.text_of_first("title"), Some("Test".to_string()));
    /// assert_eq!(doc.root_attr("lang"), Some("en"));
    /// ```
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Returns all elements matching a selector, in document order
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Counts elements matching a selector
    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    /// Reads an attribute from the first element matching a selector
    ///
    /// Only the first match is consulted; later matches are ignored even if
    /// the first one lacks the attribute.
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.select(selector)
            .first()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    /// Text content of the first element matching a selector
    pub fn text_of_first(&self, selector: &str) -> Option<String> {
        self.select(selector).first().map(element_text)
    }

    /// Concatenated text content of every element matching a selector
    pub fn text_of_all(&self, selector: &str) -> String {
        self.select(selector).iter().map(element_text).collect()
    }

    /// Reads an attribute from the root `<html>` element
    pub fn root_attr(&self, attr: &str) -> Option<&str> {
        self.html.root_element().value().attr(attr)
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
