//! Document fixtures for tests.
//!
//! Layers reference catalog entries by handle, so the fixture builds catalogs first
//! and hands out layers wired to them by resource name.

use crate::model::{Document, Node, Page, SharedStyle, StyleKind, SymbolMaster};

pub struct DocumentFixture {
    pub doc: Document,
}

impl Default for DocumentFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFixture {
    pub fn new() -> Self {
        Self {
            doc: Document {
                pages: vec![Page::new("Page 1")],
                ..Document::default()
            },
        }
    }

    pub fn text_styles(mut self, names: &[&str]) -> Self {
        self.doc
            .catalogs
            .text_styles
            .extend(names.iter().map(|n| SharedStyle::new(*n)));
        self
    }

    pub fn layer_styles(mut self, names: &[&str]) -> Self {
        self.doc
            .catalogs
            .layer_styles
            .extend(names.iter().map(|n| SharedStyle::new(*n)));
        self
    }

    pub fn symbols(mut self, names: &[&str]) -> Self {
        self.doc
            .catalogs
            .symbols
            .extend(names.iter().map(|n| SymbolMaster::new(*n)));
        self
    }

    pub fn page(mut self, name: &str) -> Self {
        self.doc.pages.push(Page::new(name));
        self
    }

    /// Append a root layer to the last page.
    pub fn layer(mut self, node: Node) -> Self {
        if let Some(page) = self.doc.pages.last_mut() {
            page.layers.push(node);
        }
        self
    }

    /// A text layer using the named text style.
    pub fn text(&self, name: &str, style: &str) -> Node {
        let id = self
            .doc
            .catalogs
            .find_style(StyleKind::Text, style)
            .unwrap_or_else(|| panic!("fixture has no text style '{}'", style))
            .id;
        Node::text(name).with_style(id)
    }

    /// A shape layer using the named layer style.
    pub fn shape(&self, name: &str, style: &str) -> Node {
        let id = self
            .doc
            .catalogs
            .find_style(StyleKind::Layer, style)
            .unwrap_or_else(|| panic!("fixture has no layer style '{}'", style))
            .id;
        Node::shape(name).with_style(id)
    }

    /// A symbol instance of the named master.
    pub fn instance(&self, name: &str, symbol: &str) -> Node {
        let id = self
            .doc
            .catalogs
            .find_symbol(symbol)
            .unwrap_or_else(|| panic!("fixture has no symbol '{}'", symbol))
            .id;
        Node::instance(name, id)
    }

    pub fn build(self) -> Document {
        self.doc
    }
}
