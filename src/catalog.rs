//! Shape catalog: the ordered list of targets an exercise cycles through.
//!
//! Catalog files are JSON arrays of flat objects:
//!
//! ```json
//! [
//!   {"id": "square", "name": "Square", "type": "rect", "x": 200, "y": 100, "width": 300, "height": 300},
//!   {"id": "disc", "name": "Circle", "type": "circle", "cx": 350, "cy": 250, "r": 150}
//! ]
//! ```
//!
//! Geometry is in reference-canvas coordinates and is validated on load.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// Error returned by catalog loading and selection.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no shapes")]
    Empty,
    #[error("duplicate shape id `{0}`")]
    DuplicateId(String),
    #[error("no shape with id `{0}`")]
    UnknownId(String),
    #[error("shape index {index} out of range (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One named catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub shape: Shape,
}

/// Non-empty ordered catalog with a selection cursor.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ShapeEntry>,
    current: usize,
}

impl Catalog {
    /// Build a catalog from entries, selecting the first one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] if two entries share an id.
    pub fn new(entries: Vec<ShapeEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, current: 0 })
    }

    /// Parse a catalog from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON or invalid shapes,
    /// plus the errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ShapeEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, plus the
    /// errors of [`Catalog::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), shapes = catalog.len(), "shape catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShapeEntry> {
        self.entries.get(index)
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ShapeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Index of the selected entry.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected entry.
    #[must_use]
    pub fn current(&self) -> &ShapeEntry {
        &self.entries[self.current]
    }

    /// Select the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IndexOutOfRange`] if `index >= len()`.
    pub fn select(&mut self, index: usize) -> Result<&ShapeEntry, CatalogError> {
        if index >= self.entries.len() {
            return Err(CatalogError::IndexOutOfRange { index, len: self.entries.len() });
        }
        self.current = index;
        Ok(self.current())
    }

    /// Select the entry with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownId`] if no entry matches.
    pub fn select_id(&mut self, id: &str) -> Result<&ShapeEntry, CatalogError> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Err(CatalogError::UnknownId(id.to_owned()));
        };
        self.current = index;
        Ok(self.current())
    }

    /// Advance to the next entry, wrapping after the last.
    pub fn advance(&mut self) -> &ShapeEntry {
        self.current = (self.current + 1) % self.entries.len();
        self.current()
    }

    /// Select a uniformly random entry.
    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ShapeEntry {
        self.current = rng.random_range(0..self.entries.len());
        self.current()
    }
}
