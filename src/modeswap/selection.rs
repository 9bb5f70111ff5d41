//! # Selection
//!
//! A selection is the ordered list of layers a command starts from, addressed by
//! [`NodePath`]: child indexes from the current page's root layers downwards.
//!
//! Outside callers pick layers with selectors, which come in two forms:
//!
//! - **Index paths**: 1-based and dotted, `2` is the second root layer, `1.3` the
//!   third child of the first root layer.
//! - **Layer names**: exact match against every layer of the current page, in
//!   document order. All matches are selected.
//!
//! As with pad indexes, inputs are read as index paths only if every input parses
//! as one. Otherwise all of them are treated as names.

use crate::error::{Result, SwitchError};
use crate::model::{Node, Page};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indexes: Vec<usize>) -> Self {
        Self(indexes)
    }

    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn indexes(&self) -> &[usize] {
        &self.0
    }

    /// True if `other` is this layer or lies somewhere beneath it.
    pub fn covers(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }

    fn child(&self, index: usize) -> Self {
        let mut indexes = self.0.clone();
        indexes.push(index);
        Self(indexes)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| (i + 1).to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for NodePath {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let indexes = s
            .split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n - 1),
                _ => Err(format!("Invalid layer index: {}", s)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self(indexes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Path(NodePath),
    Name(String),
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<Selector> {
    let all_paths: std::result::Result<Vec<NodePath>, _> = inputs
        .iter()
        .map(|s| NodePath::from_str(s.as_ref()))
        .collect();

    match all_paths {
        Ok(paths) => paths.into_iter().map(Selector::Path).collect(),
        Err(_) => inputs
            .iter()
            .map(|s| Selector::Name(s.as_ref().to_string()))
            .collect(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    paths: Vec<NodePath>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[NodePath] {
        &self.paths
    }

    /// Resolve selectors against `page`, keeping selector order.
    ///
    /// A layer is walked at most once: duplicates and layers already inside a
    /// selected group are dropped.
    pub fn resolve(page: &Page, selectors: &[Selector]) -> Result<Self> {
        let mut paths = Vec::new();
        for selector in selectors {
            match selector {
                Selector::Path(path) => {
                    if page.node_at(path).is_none() {
                        return Err(SwitchError::Selection(format!(
                            "Layer {} not found on page '{}'",
                            path, page.name
                        )));
                    }
                    paths.push(path.clone());
                }
                Selector::Name(name) => {
                    let found = page.find_paths(|node| node.name == *name);
                    if found.is_empty() {
                        return Err(SwitchError::Selection(format!(
                            "No layer named '{}' on page '{}'",
                            name, page.name
                        )));
                    }
                    paths.extend(found);
                }
            }
        }
        Ok(Self {
            paths: without_overlaps(paths),
        })
    }
}

fn without_overlaps(paths: Vec<NodePath>) -> Vec<NodePath> {
    let mut kept: Vec<NodePath> = Vec::new();
    for path in paths {
        if kept.iter().any(|k| k.covers(&path)) {
            continue;
        }
        kept.retain(|k| !path.covers(k));
        kept.push(path);
    }
    kept
}

impl Page {
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indexes().split_first()?;
        let mut node = self.layers.get(*first)?;
        for index in rest {
            node = node.child_nodes().get(*index)?;
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let (first, rest) = path.indexes().split_first()?;
        let mut node = self.layers.get_mut(*first)?;
        for index in rest {
            if !node.kind.has_children() {
                return None;
            }
            node = node.children.get_mut(*index)?;
        }
        Some(node)
    }

    /// Paths of every layer matching `predicate`, pre-order.
    pub fn find_paths<F>(&self, predicate: F) -> Vec<NodePath>
    where
        F: Fn(&Node) -> bool,
    {
        let mut found = Vec::new();
        let mut stack: Vec<(NodePath, &Node)> = self
            .layers
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (NodePath::root(i), node))
            .collect();

        while let Some((path, node)) = stack.pop() {
            if predicate(node) {
                found.push(path.clone());
            }
            for (i, child) in node.child_nodes().iter().enumerate().rev() {
                stack.push((path.child(i), child));
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new("Home")
            .layer(
                Node::container("Header")
                    .child(Node::text("Title"))
                    .child(Node::container("Actions").child(Node::shape("Button"))),
            )
            .layer(Node::shape("Button"))
            .layer(Node::text("Footer"))
    }

    #[test]
    fn parses_dotted_paths() {
        assert_eq!("2".parse::<NodePath>().unwrap(), NodePath::new(vec![1]));
        assert_eq!("1.2.1".parse::<NodePath>().unwrap(), NodePath::new(vec![0, 1, 0]));
        assert!("0".parse::<NodePath>().is_err());
        assert!("1..2".parse::<NodePath>().is_err());
        assert!("Header".parse::<NodePath>().is_err());
    }

    #[test]
    fn path_displays_one_based() {
        assert_eq!(NodePath::new(vec![0, 1, 0]).to_string(), "1.2.1");
    }

    #[test]
    fn mixed_inputs_become_names() {
        let selectors = parse_selectors(&["1", "Footer"]);
        assert_eq!(
            selectors,
            vec![
                Selector::Name("1".to_string()),
                Selector::Name("Footer".to_string())
            ]
        );

        let selectors = parse_selectors(&["1", "3"]);
        assert_eq!(
            selectors,
            vec![
                Selector::Path(NodePath::root(0)),
                Selector::Path(NodePath::root(2))
            ]
        );
    }

    #[test]
    fn resolves_names_in_document_order() {
        let page = page();
        let selection = Selection::resolve(&page, &parse_selectors(&["Button"])).unwrap();
        assert_eq!(
            selection.paths(),
            &[NodePath::new(vec![0, 1, 0]), NodePath::root(1)]
        );
    }

    #[test]
    fn keeps_selector_order() {
        let page = page();
        let selection = Selection::resolve(&page, &parse_selectors(&["3", "1.1"])).unwrap();
        assert_eq!(selection.paths(), &[NodePath::root(2), NodePath::new(vec![0, 0])]);
    }

    #[test]
    fn nested_selections_collapse_to_the_group() {
        let page = page();
        let selection =
            Selection::resolve(&page, &parse_selectors(&["1", "1.1", "1.2.1", "1"])).unwrap();
        assert_eq!(selection.paths(), &[NodePath::root(0)]);

        let selection = Selection::resolve(&page, &parse_selectors(&["1.2.1", "3", "1.2"])).unwrap();
        assert_eq!(selection.paths(), &[NodePath::root(2), NodePath::new(vec![0, 1])]);
    }

    #[test]
    fn same_name_nested_is_selected_once() {
        let page = Page::new("Home").layer(
            Node::container("Card").child(Node::container("Card").child(Node::text("Body"))),
        );
        let selection = Selection::resolve(&page, &parse_selectors(&["Card"])).unwrap();
        assert_eq!(selection.paths(), &[NodePath::root(0)]);
    }

    #[test]
    fn unknown_selectors_are_errors() {
        let page = page();
        assert!(matches!(
            Selection::resolve(&page, &parse_selectors(&["9"])),
            Err(SwitchError::Selection(_))
        ));
        assert!(matches!(
            Selection::resolve(&page, &parse_selectors(&["Nope"])),
            Err(SwitchError::Selection(_))
        ));
    }

    #[test]
    fn paths_do_not_descend_into_leaves() {
        let mut page = page();
        let path = NodePath::new(vec![2, 0]);
        assert!(page.node_at(&path).is_none());
        assert!(page.node_at_mut(&path).is_none());
    }

    #[test]
    fn node_at_mut_reaches_nested_layers() {
        let mut page = page();
        let node = page.node_at_mut(&NodePath::new(vec![0, 1, 0])).unwrap();
        node.name = "Primary".into();
        assert_eq!(page.find_paths(|n| n.name == "Primary").len(), 1);
    }

    #[test]
    fn empty_selectors_give_empty_selection() {
        let page = page();
        let selectors: Vec<Selector> = Vec::new();
        assert!(Selection::resolve(&page, &selectors).unwrap().is_empty());
    }
}
