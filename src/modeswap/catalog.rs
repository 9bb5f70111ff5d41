//! # Resource Catalogs
//!
//! A document owns three flat catalogs: text styles, layer styles, and symbol
//! masters. Layers refer to catalog entries through [`StyleId`] / [`SymbolId`]
//! handles; the catalogs are the only owners.
//!
//! Name lookup is a linear scan returning the first exact (case-sensitive,
//! untrimmed) match in catalog order. Duplicate names make that lookup ambiguous;
//! switching accepts this silently and [`Catalogs::duplicates`] exists so the
//! `doctor` command can surface them.

use crate::model::{SharedStyle, StyleId, StyleKind, SymbolId, SymbolMaster};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for SharedStyle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for SymbolMaster {
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn find_by_exact_name<'a, T: Named>(entries: &'a [T], name: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.name() == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    TextStyles,
    LayerStyles,
    Symbols,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::TextStyles => f.write_str("text styles"),
            CatalogKind::LayerStyles => f.write_str("layer styles"),
            CatalogKind::Symbols => f.write_str("symbols"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    pub catalog: CatalogKind,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default)]
    pub text_styles: Vec<SharedStyle>,
    #[serde(default)]
    pub layer_styles: Vec<SharedStyle>,
    #[serde(default)]
    pub symbols: Vec<SymbolMaster>,
}

impl Catalogs {
    pub fn styles(&self, kind: StyleKind) -> &[SharedStyle] {
        match kind {
            StyleKind::Text => &self.text_styles,
            StyleKind::Layer => &self.layer_styles,
        }
    }

    pub fn style(&self, kind: StyleKind, id: StyleId) -> Option<&SharedStyle> {
        self.styles(kind).iter().find(|style| style.id == id)
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolMaster> {
        self.symbols.iter().find(|symbol| symbol.id == id)
    }

    pub fn find_style(&self, kind: StyleKind, name: &str) -> Option<&SharedStyle> {
        find_by_exact_name(self.styles(kind), name)
    }

    pub fn find_symbol(&self, name: &str) -> Option<&SymbolMaster> {
        find_by_exact_name(&self.symbols, name)
    }

    /// Names that occur more than once within a catalog, in first-occurrence order.
    pub fn duplicates(&self) -> Vec<DuplicateName> {
        let mut found = Vec::new();
        found.extend(duplicates_in(CatalogKind::TextStyles, &self.text_styles));
        found.extend(duplicates_in(CatalogKind::LayerStyles, &self.layer_styles));
        found.extend(duplicates_in(CatalogKind::Symbols, &self.symbols));
        found
    }
}

fn duplicates_in<T: Named>(catalog: CatalogKind, entries: &[T]) -> Vec<DuplicateName> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for entry in entries {
        let count = counts.entry(entry.name()).or_insert(0);
        if *count == 0 {
            order.push(entry.name());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|name| {
            let count = counts[name];
            (count > 1).then(|| DuplicateName {
                catalog,
                name: name.to_string(),
                count,
            })
        })
        .collect()
}
