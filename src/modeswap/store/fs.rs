use super::DocumentStore;
use crate::error::{Result, SwitchError};
use crate::model::Document;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Err(SwitchError::Store(format!(
                "Document not found: {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        let doc = parse_document(&content)?;
        debug!(path = %self.path.display(), pages = doc.pages.len(), "document loaded");
        Ok(doc)
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}

/// Layer trees have no depth bound, so parsing grows the stack on demand instead
/// of stopping at serde_json's nesting limit.
fn parse_document(content: &str) -> Result<Document> {
    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    let doc = Document::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(doc)
}
