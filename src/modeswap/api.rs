//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for hosts: the bundled CLI, or a plugin shim that adapts a design tool's
//! native document into a [`DocumentStore`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads and saves** the document through the store
//! - **Normalizes inputs** (selector strings → [`Selection`])
//! - **Builds the name codec** from configuration
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Switching logic lives in `commands/*.rs` and the core modules beneath them.
//!
//! ## Persistence
//!
//! A document is written back only when a command switched at least one layer,
//! unless `persist_on_noop` is configured. Read-only commands never save.

use crate::commands;
use crate::config::SwitchConfig;
use crate::error::Result;
use crate::model::{Document, Mode};
use crate::naming::NameCodec;
use crate::selection::{parse_selectors, Selection};
use crate::store::DocumentStore;
use std::path::PathBuf;

/// The main API facade for modeswap operations.
///
/// Generic over `DocumentStore` to allow different document sources.
pub struct SwitcherApi<S: DocumentStore> {
    store: S,
    config: SwitchConfig,
    config_dir: PathBuf,
}

impl<S: DocumentStore> SwitcherApi<S> {
    pub fn new(store: S, config: SwitchConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn codec(&self) -> NameCodec {
        self.config.codec()
    }

    fn load_with_selection<I: AsRef<str>>(&self, selectors: &[I]) -> Result<(Document, Selection)> {
        let doc = self.store.load()?;
        let selection = if selectors.is_empty() {
            Selection::default()
        } else {
            Selection::resolve(doc.current_page()?, &parse_selectors(selectors))?
        };
        Ok((doc, selection))
    }

    fn persist(&mut self, doc: &Document, result: &commands::CmdResult) -> Result<()> {
        if result.changed() || (result.tally.is_some() && self.config.persist_on_noop) {
            self.store.save(doc)?;
        }
        Ok(())
    }

    /// Switch the selected layers, and everything inside them, to `mode`.
    pub fn switch_selection<I: AsRef<str>>(
        &mut self,
        mode: Mode,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let (mut doc, selection) = self.load_with_selection(selectors)?;
        let result = commands::switch::selection(&mut doc, &selection, mode, &self.codec())?;
        self.persist(&doc, &result)?;
        Ok(result)
    }

    /// Switch the selected layers to the opposite of the first mode found among them.
    pub fn toggle_selection<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let (mut doc, selection) = self.load_with_selection(selectors)?;
        let result = commands::toggle::run(&mut doc, &selection, &self.codec())?;
        self.persist(&doc, &result)?;
        Ok(result)
    }

    /// Switch every top-level layer of the current page to `mode`.
    pub fn switch_page(&mut self, mode: Mode) -> Result<commands::CmdResult> {
        let mut doc = self.store.load()?;
        let result = commands::switch::page(&mut doc, mode, &self.codec())?;
        self.persist(&doc, &result)?;
        Ok(result)
    }

    pub fn inspect<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let (doc, selection) = self.load_with_selection(selectors)?;
        commands::inspect::run(&doc, &selection, &self.codec())
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        let doc = self.store.load()?;
        commands::doctor::run(&doc)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Finding, LayerReport, MessageLevel};
