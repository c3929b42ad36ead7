//! The document the applicator writes into.
//!
//! A browser host implements [`StyleDocument`] over the real DOM;
//! [`VirtualDocument`] keeps the same state in memory.

use std::collections::BTreeSet;

/// Id of the stylesheet element holding generated theme variables.
pub const THEME_STYLESHEET_ID: &str = "dynamic-theme-styles";

/// The narrow set of document mutations theming needs.
pub trait StyleDocument {
    fn add_root_class(&mut self, class: &str);
    fn remove_root_class(&mut self, class: &str);
    fn add_body_class(&mut self, class: &str);
    fn remove_body_class(&mut self, class: &str);

    /// Replaces the text of the stylesheet element `id`, creating the
    /// element first if it does not exist.
    fn upsert_stylesheet(&mut self, id: &str, css: &str);
}

/// A stylesheet element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

/// In-memory document state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualDocument {
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
    stylesheets: Vec<StyleElement>,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.root_classes.iter().map(String::as_str)
    }

    pub fn body_classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.body_classes.iter().map(String::as_str)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// Text of the stylesheet element `id`.
    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.stylesheets
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.css.as_str())
    }

    /// All stylesheet elements, in creation order.
    pub fn stylesheets(&self) -> &[StyleElement] {
        &self.stylesheets
    }
}

impl StyleDocument for VirtualDocument {
    fn add_root_class(&mut self, class: &str) {
        self.root_classes.insert(class.to_string());
    }

    fn remove_root_class(&mut self, class: &str) {
        self.root_classes.remove(class);
    }

    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    fn upsert_stylesheet(&mut self, id: &str, css: &str) {
        match self.stylesheets.iter_mut().find(|s| s.id == id) {
            Some(element) => element.css = css.to_string(),
            None => self.stylesheets.push(StyleElement {
                id: id.to_string(),
                css: css.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        let mut doc = VirtualDocument::new();
        doc.add_root_class("dark");
        doc.add_root_class("dark");
        doc.add_body_class("text-lg");
        assert_eq!(doc.root_classes().collect::<Vec<_>>(), ["dark"]);
        assert!(doc.has_body_class("text-lg"));

        doc.remove_root_class("dark");
        doc.remove_root_class("light");
        assert!(!doc.has_root_class("dark"));
    }

    #[test]
    fn test_upsert_stylesheet_reuses_element() {
        let mut doc = VirtualDocument::new();
        doc.upsert_stylesheet(THEME_STYLESHEET_ID, "a");
        doc.upsert_stylesheet(THEME_STYLESHEET_ID, "b");
        doc.upsert_stylesheet("other", "c");

        assert_eq!(doc.stylesheets().len(), 2);
        assert_eq!(doc.stylesheet(THEME_STYLESHEET_ID), Some("b"));
        assert_eq!(doc.stylesheet("missing"), None);
    }
}
