use crate::commands::switch;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Document, Mode};
use crate::naming::NameCodec;
use crate::resolve::find_any_mode_in;
use crate::selection::Selection;
use tracing::{debug, warn};

/// Mode the selection should flip to: the opposite of the first mode found in it,
/// scanning selected layers and their descendants in order. Defaults to dark when
/// nothing in the selection carries a mode.
pub fn infer_target(doc: &Document, selection: &Selection, codec: &NameCodec) -> Mode {
    let detected = match doc.current_page() {
        Ok(page) => find_any_mode_in(
            selection.paths().iter().filter_map(|path| page.node_at(path)),
            &doc.catalogs,
            codec,
        ),
        Err(e) => {
            warn!(error = %e, "mode inference failed");
            None
        }
    };
    debug!(?detected, "toggle direction");
    detected.map(Mode::opposite).unwrap_or(Mode::Dark)
}

pub fn run(doc: &mut Document, selection: &Selection, codec: &NameCodec) -> Result<CmdResult> {
    if selection.is_empty() {
        return Ok(switch::empty_selection());
    }
    let target = infer_target(doc, selection, codec);
    switch::selection(doc, selection, target, codec)
}
