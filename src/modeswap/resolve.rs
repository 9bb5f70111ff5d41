//! Mode detection for a single layer and for whole subtrees.
//!
//! A layer's mode comes from the name of whatever it references, in this order:
//!
//! 1. its applied shared style (text styles for text layers, layer styles otherwise)
//! 2. for symbol instances without a style, the referenced symbol master
//!
//! The first reference present decides, even if its name carries no mode.

use crate::catalog::Catalogs;
use crate::error::{Result, SwitchError};
use crate::model::{Mode, Node, SharedStyle, SymbolMaster};
use crate::naming::NameCodec;
use tracing::warn;

/// The shared style applied to `node`, if any. A handle that does not resolve is an error.
pub fn applied_style<'a>(node: &Node, catalogs: &'a Catalogs) -> Result<Option<&'a SharedStyle>> {
    let Some(id) = node.style else {
        return Ok(None);
    };
    catalogs
        .style(node.kind.style_kind(), id)
        .map(Some)
        .ok_or_else(|| SwitchError::DanglingStyle {
            node: node.name.clone(),
            id: id.0,
        })
}

/// The symbol master behind a symbol instance, if any. A handle that does not resolve is an error.
pub fn applied_symbol<'a>(
    node: &Node,
    catalogs: &'a Catalogs,
) -> Result<Option<&'a SymbolMaster>> {
    if !node.has_symbol_reference() {
        return Ok(None);
    }
    let Some(id) = node.symbol else {
        return Ok(None);
    };
    catalogs
        .symbol(id)
        .map(Some)
        .ok_or_else(|| SwitchError::DanglingSymbol {
            node: node.name.clone(),
            id: id.0,
        })
}

pub fn detect(node: &Node, catalogs: &Catalogs, codec: &NameCodec) -> Result<Option<Mode>> {
    if let Some(style) = applied_style(node, catalogs)? {
        return Ok(codec.mode_of(&style.name));
    }
    if let Some(master) = applied_symbol(node, catalogs)? {
        return Ok(codec.mode_of(&master.name));
    }
    Ok(None)
}

/// Pre-order search for the first layer in the subtree with a detectable mode.
///
/// Layers whose references fail to resolve are logged and treated as carrying no mode.
pub fn find_any_mode(node: &Node, catalogs: &Catalogs, codec: &NameCodec) -> Option<Mode> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        match detect(current, catalogs, codec) {
            Ok(Some(mode)) => return Some(mode),
            Ok(None) => {}
            Err(e) => warn!(layer = %current.name, error = %e, "mode detection failed"),
        }
        stack.extend(current.child_nodes().iter().rev());
    }
    None
}

/// First detectable mode across several roots, scanned in order.
pub fn find_any_mode_in<'a, I>(roots: I, catalogs: &Catalogs, codec: &NameCodec) -> Option<Mode>
where
    I: IntoIterator<Item = &'a Node>,
{
    roots
        .into_iter()
        .find_map(|root| find_any_mode(root, catalogs, codec))
}
