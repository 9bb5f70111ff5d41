use crate::catalog::Catalogs;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Document, Mode, Node, NodeKind};
use crate::naming::NameCodec;
use crate::resolve::{applied_style, applied_symbol, detect};
use crate::selection::{NodePath, Selection};

/// One layer as seen by the switcher: what it references and which mode that implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerReport {
    pub path: NodePath,
    pub depth: usize,
    pub name: String,
    pub kind: NodeKind,
    /// Name of the shared style or symbol master that carries the mode.
    pub source: Option<String>,
    pub mode: Option<Mode>,
    /// Set when the layer's references could not be resolved.
    pub problem: Option<String>,
}

fn report(path: NodePath, depth: usize, node: &Node, catalogs: &Catalogs, codec: &NameCodec) -> LayerReport {
    let source = match applied_style(node, catalogs) {
        Ok(Some(style)) => Ok(Some(style.name.clone())),
        Ok(None) => applied_symbol(node, catalogs).map(|m| m.map(|m| m.name.clone())),
        Err(e) => Err(e),
    };
    let (source, problem) = match source {
        Ok(source) => (source, None),
        Err(e) => (None, Some(e.to_string())),
    };
    LayerReport {
        path,
        depth,
        name: node.name.clone(),
        kind: node.kind,
        source,
        mode: detect(node, catalogs, codec).ok().flatten(),
        problem,
    }
}

fn collect(
    root_path: NodePath,
    root: &Node,
    catalogs: &Catalogs,
    codec: &NameCodec,
    out: &mut Vec<LayerReport>,
) {
    let mut stack = vec![(root_path, 0usize, root)];
    while let Some((path, depth, node)) = stack.pop() {
        for (i, child) in node.child_nodes().iter().enumerate().rev() {
            let mut indexes = path.indexes().to_vec();
            indexes.push(i);
            stack.push((NodePath::new(indexes), depth + 1, child));
        }
        out.push(report(path, depth, node, catalogs, codec));
    }
}

/// List the selected layers and their descendants, or the whole current page when
/// nothing is selected. Never mutates the document.
pub fn run(doc: &Document, selection: &Selection, codec: &NameCodec) -> Result<CmdResult> {
    let page = doc.current_page()?;
    let mut layers = Vec::new();

    if selection.is_empty() {
        for (i, root) in page.layers.iter().enumerate() {
            collect(NodePath::root(i), root, &doc.catalogs, codec, &mut layers);
        }
    } else {
        for path in selection.paths() {
            if let Some(node) = page.node_at(path) {
                collect(path.clone(), node, &doc.catalogs, codec, &mut layers);
            }
        }
    }

    let mut result = CmdResult::default();
    if layers.is_empty() {
        result.add_message(CmdMessage::info(format!("Page '{}' has no layers.", page.name)));
    }
    Ok(result.with_layers(layers))
}
