use crate::catalog::Catalogs;
use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Free-form visual properties (fills, borders, typography) or symbol override values,
/// keyed by the host's property or override-point name.
pub type Properties = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn opposite(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// The token written into names, e.g. `button/dark/primary`.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Capitalized form used in user-facing reports.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(format!("Unknown mode '{}' (expected light or dark)", other)),
        }
    }
}

/// Handle to an entry in one of the shared-style catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub Uuid);

impl StyleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StyleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle to an entry in the symbol master catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub Uuid);

impl SymbolId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which shared-style catalog a style lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Text,
    Layer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Container,
    Text,
    Shape,
    SymbolInstance,
}

impl NodeKind {
    pub fn has_children(self) -> bool {
        matches!(self, NodeKind::Container)
    }

    pub fn has_symbol_reference(self) -> bool {
        matches!(self, NodeKind::SymbolInstance)
    }

    /// Text layers draw from the text-style catalog, everything else from layer styles.
    pub fn style_kind(self) -> StyleKind {
        match self {
            NodeKind::Text => StyleKind::Text,
            _ => StyleKind::Layer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: Properties,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: Properties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            style: None,
            symbol: None,
            props: Properties::new(),
            overrides: Properties::new(),
            children: Vec::new(),
        }
    }

    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Container)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Text)
    }

    pub fn shape(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Shape)
    }

    pub fn instance(name: impl Into<String>, symbol: SymbolId) -> Self {
        let mut node = Self::new(name, NodeKind::SymbolInstance);
        node.symbol = Some(symbol);
        node
    }

    pub fn with_style(mut self, style: StyleId) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_override(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.overrides.insert(key.into(), value);
        self
    }

    /// Append a child. Only containers own children; on other kinds this is a no-op.
    pub fn child(mut self, child: Node) -> Self {
        if self.kind.has_children() {
            self.children.push(child);
        }
        self
    }

    pub fn has_shared_style(&self) -> bool {
        self.style.is_some()
    }

    pub fn has_symbol_reference(&self) -> bool {
        self.kind.has_symbol_reference() && self.symbol.is_some()
    }

    /// Children in traversal order; empty for anything but containers.
    pub fn child_nodes(&self) -> &[Node] {
        if self.kind.has_children() {
            &self.children
        } else {
            &[]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyle {
    pub id: StyleId,
    pub name: String,
    /// Canonical properties copied onto a layer when the style is applied.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: Properties,
}

impl SharedStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StyleId::new(),
            name: name.into(),
            props: Properties::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMaster {
    pub id: SymbolId,
    pub name: String,
    /// Override points exposed by this master. Empty means any override is accepted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub override_points: Vec<String>,
}

impl SymbolMaster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SymbolId::new(),
            name: name.into(),
            override_points: Vec::new(),
        }
    }

    pub fn with_override_point(mut self, point: impl Into<String>) -> Self {
        self.override_points.push(point.into());
        self
    }

    /// Filter overrides captured from a previous master down to the ones this master
    /// can carry. Returns the kept overrides and the names of the dropped ones.
    pub fn accept_overrides(&self, overrides: Properties) -> (Properties, Vec<String>) {
        if self.override_points.is_empty() {
            return (overrides, Vec::new());
        }
        let mut dropped = Vec::new();
        let kept = overrides
            .into_iter()
            .filter(|(key, _)| {
                let keep = self.override_points.iter().any(|p| p == key);
                if !keep {
                    dropped.push(key.clone());
                }
                keep
            })
            .collect();
        (kept, dropped)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Node>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    pub fn layer(mut self, node: Node) -> Self {
        self.layers.push(node);
        self
    }
}

/// A design document: the resource catalogs plus the page tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub catalogs: Catalogs,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub current_page: usize,
}

impl Document {
    pub fn current_page(&self) -> Result<&Page> {
        self.pages.get(self.current_page).ok_or_else(|| {
            SwitchError::Store(format!(
                "Current page {} does not exist ({} pages)",
                self.current_page,
                self.pages.len()
            ))
        })
    }

    /// Borrow the catalogs for reading alongside the current page for writing.
    pub fn split_current_mut(&mut self) -> Result<(&Catalogs, &mut Page)> {
        let index = self.current_page;
        let count = self.pages.len();
        let page = self.pages.get_mut(index).ok_or_else(|| {
            SwitchError::Store(format!(
                "Current page {} does not exist ({} pages)",
                index, count
            ))
        })?;
        Ok((&self.catalogs, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(" DARK ".parse::<Mode>().unwrap(), Mode::Dark);
        assert_eq!("Light".parse::<Mode>().unwrap(), Mode::Light);
        assert!("dim".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_opposite_and_label() {
        assert_eq!(Mode::Light.opposite(), Mode::Dark);
        assert_eq!(Mode::Dark.opposite(), Mode::Light);
        assert_eq!(Mode::Dark.label(), "Dark");
    }

    #[test]
    fn only_containers_take_children() {
        let group = Node::container("Group").child(Node::text("Label"));
        assert_eq!(group.child_nodes().len(), 1);

        let shape = Node::shape("Box").child(Node::text("Ignored"));
        assert!(shape.child_nodes().is_empty());
    }

    #[test]
    fn symbol_reference_requires_instance_kind() {
        let mut shape = Node::shape("Box");
        shape.symbol = Some(SymbolId::new());
        assert!(!shape.has_symbol_reference());

        let instance = Node::instance("Button", SymbolId::new());
        assert!(instance.has_symbol_reference());
    }

    #[test]
    fn text_layers_use_text_styles() {
        assert_eq!(NodeKind::Text.style_kind(), StyleKind::Text);
        assert_eq!(NodeKind::Shape.style_kind(), StyleKind::Layer);
        assert_eq!(NodeKind::SymbolInstance.style_kind(), StyleKind::Layer);
    }

    #[test]
    fn accept_overrides_drops_unknown_points() {
        let master = SymbolMaster::new("button/dark/primary").with_override_point("label");
        let mut overrides = Properties::new();
        overrides.insert("label".into(), json!("OK"));
        overrides.insert("icon".into(), json!("check"));

        let (kept, dropped) = master.accept_overrides(overrides);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept["label"], json!("OK"));
        assert_eq!(dropped, vec!["icon".to_string()]);
    }

    #[test]
    fn accept_overrides_without_points_keeps_everything() {
        let master = SymbolMaster::new("button/dark/primary");
        let mut overrides = Properties::new();
        overrides.insert("label".into(), json!("OK"));

        let (kept, dropped) = master.accept_overrides(overrides);
        assert_eq!(kept.len(), 1);
        assert!(dropped.is_empty());
    }

    #[test]
    fn current_page_out_of_range_is_a_store_error() {
        let mut doc = Document::default();
        assert!(matches!(doc.current_page(), Err(SwitchError::Store(_))));
        assert!(doc.split_current_mut().is_err());
    }

    #[test]
    fn document_json_shape() {
        let style = SharedStyle::new("text/light/body");
        let doc = Document {
            catalogs: Catalogs {
                text_styles: vec![style.clone()],
                ..Catalogs::default()
            },
            pages: vec![Page::new("Page 1").layer(Node::text("Body").with_style(style.id))],
            current_page: 0,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["text_styles"][0]["name"], json!("text/light/body"));
        assert_eq!(value["pages"][0]["layers"][0]["kind"], json!("text"));

        let parsed: Document = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, doc);
    }
}
