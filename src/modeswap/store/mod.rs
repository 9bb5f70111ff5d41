//! # Storage Layer
//!
//! The switcher reads catalogs and rewrites layer references on a [`Document`]. Where
//! that document comes from is behind the [`DocumentStore`] trait:
//!
//! - [`fs::FileStore`]: a JSON document on disk
//! - [`memory::InMemoryStore`]: a document held in memory, for tests and for hosts that
//!   build the tree from their own native representation
//!
//! Commands never touch a store. The API loads the document, runs the command on it,
//! and saves it back when the command changed something.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Load the current document
    fn load(&self) -> Result<Document>;

    /// Persist the document, replacing the stored one
    fn save(&mut self, doc: &Document) -> Result<()>;
}
