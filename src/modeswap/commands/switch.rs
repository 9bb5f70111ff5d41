use crate::commands::{CmdMessage, CmdResult};
use crate::engine::Tally;
use crate::error::Result;
use crate::model::{Document, Mode};
use crate::naming::NameCodec;
use crate::selection::Selection;
use crate::walk::{walk, walk_all};
use tracing::{info, warn};

pub const EMPTY_SELECTION: &str = "Please select layers to switch modes";

pub fn selection_report(mode: Mode, tally: Tally) -> String {
    format!(
        "Switched to {} Mode: {} changed, {} skipped",
        mode.label(),
        tally.switched,
        tally.skipped
    )
}

pub fn page_report(mode: Mode, tally: Tally) -> String {
    format!(
        "Page switched to {} Mode: {} changed, {} skipped",
        mode.label(),
        tally.switched,
        tally.skipped
    )
}

fn report_message(content: String, tally: Tally) -> CmdMessage {
    if tally.switched > 0 {
        CmdMessage::success(content)
    } else {
        CmdMessage::info(content)
    }
}

pub fn empty_selection() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(EMPTY_SELECTION))
}

/// Switch every selected layer and its descendants to `mode`.
pub fn selection(
    doc: &mut Document,
    selection: &Selection,
    mode: Mode,
    codec: &NameCodec,
) -> Result<CmdResult> {
    if selection.is_empty() {
        return Ok(empty_selection());
    }

    let tally = match doc.split_current_mut() {
        Ok((catalogs, page)) => {
            let mut tally = Tally::default();
            for path in selection.paths() {
                match page.node_at_mut(path) {
                    Some(node) => tally += walk(node, catalogs, codec, mode),
                    None => {
                        warn!(%path, "selected layer does not exist, skipping");
                        tally += Tally::one_skipped();
                    }
                }
            }
            tally
        }
        Err(e) => {
            warn!(error = %e, "selection switch failed");
            Tally::default()
        }
    };

    info!(%mode, switched = tally.switched, skipped = tally.skipped, "selection switched");
    Ok(CmdResult::default()
        .with_tally(tally)
        .with_target(mode)
        .with_message(report_message(selection_report(mode, tally), tally)))
}

/// Switch every layer on the current page to `mode`.
pub fn page(doc: &mut Document, mode: Mode, codec: &NameCodec) -> Result<CmdResult> {
    let tally = match doc.split_current_mut() {
        Ok((catalogs, page)) => walk_all(page.layers.iter_mut(), catalogs, codec, mode),
        Err(e) => {
            warn!(error = %e, "page switch failed");
            Tally::default()
        }
    };

    info!(%mode, switched = tally.switched, skipped = tally.skipped, "page switched");
    Ok(CmdResult::default()
        .with_tally(tally)
        .with_target(mode)
        .with_message(report_message(page_report(mode, tally), tally)))
}
