use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    doc: Document,
    saves: usize,
}

impl InMemoryStore {
    pub fn new(doc: Document) -> Self {
        Self { doc, saves: 0 }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Number of times the document was written back.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.doc = doc.clone();
        self.saves += 1;
        Ok(())
    }
}
