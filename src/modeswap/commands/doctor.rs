//! Consistency checks the switcher itself never enforces.
//!
//! Switching resolves names first-match and treats dangling handles as per-layer
//! skips. `doctor` surfaces both so they can be fixed in the source document.

use crate::catalog::{Catalogs, DuplicateName};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Document, Node, Page};
use crate::resolve::{applied_style, applied_symbol};
use crate::selection::NodePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    DuplicateName(DuplicateName),
    DanglingReference {
        page: String,
        path: NodePath,
        layer: String,
        detail: String,
    },
}

impl Finding {
    pub fn describe(&self) -> String {
        match self {
            Finding::DuplicateName(dup) => format!(
                "'{}' appears {} times in {}; switching uses the first",
                dup.name, dup.count, dup.catalog
            ),
            Finding::DanglingReference {
                page, path, detail, ..
            } => format!("{} ({} on page '{}')", detail, path, page),
        }
    }
}

fn dangling_in_page(page: &Page, catalogs: &Catalogs) -> Vec<Finding> {
    let mut found = Vec::new();
    for path in page.find_paths(|_| true) {
        let Some(node) = page.node_at(&path) else {
            continue;
        };
        if let Some(detail) = check_node(node, catalogs) {
            found.push(Finding::DanglingReference {
                page: page.name.clone(),
                path,
                layer: node.name.clone(),
                detail,
            });
        }
    }
    found
}

fn check_node(node: &Node, catalogs: &Catalogs) -> Option<String> {
    if let Err(e) = applied_style(node, catalogs) {
        return Some(e.to_string());
    }
    applied_symbol(node, catalogs).err().map(|e| e.to_string())
}

pub fn run(doc: &Document) -> Result<CmdResult> {
    let mut findings: Vec<Finding> = doc
        .catalogs
        .duplicates()
        .into_iter()
        .map(Finding::DuplicateName)
        .collect();
    for page in &doc.pages {
        findings.extend(dangling_in_page(page, &doc.catalogs));
    }

    let mut result = CmdResult::default();
    if findings.is_empty() {
        result.add_message(CmdMessage::success("No problems found."));
    } else {
        for finding in &findings {
            result.add_message(CmdMessage::warning(finding.describe()));
        }
    }
    Ok(result.with_findings(findings))
}
