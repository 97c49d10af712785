//! File-level open/save for scheme documents.
//!
//! The on-disk format is a `.tmTheme` property list: a root dictionary
//! with `name`, `uuid`, and the `settings` array described in [`scheme`].
//! Reading accepts whatever `plist` can decode (XML or binary); writing
//! always emits XML, the form the rest of the ecosystem edits and diffs.
//!
//! [`scheme`]: crate::scheme

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};
use tracing::debug;

use crate::error::SchemeError;
use crate::scheme::Scheme;

// ---------------------------------------------------------------------------
// SchemeDocument
// ---------------------------------------------------------------------------

/// A scheme plus its on-disk identity.
pub struct SchemeDocument {
    name: String,
    path: Option<PathBuf>,
    pub scheme: Scheme,
}

impl SchemeDocument {
    /// A fresh default scheme with no backing file.
    pub fn untitled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            scheme: Scheme::new(),
        }
    }

    /// Reads and parses a scheme file. The document name comes from the
    /// plist's top-level `name` string, falling back to the file stem.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let path = path.as_ref();
        let root = Value::from_file(path)?;
        let root = root.as_dictionary().ok_or(SchemeError::NotADictionary)?;
        let scheme = Scheme::from_plist(root)?;

        let name = root
            .get("name")
            .and_then(Value::as_string)
            .map(str::to_owned)
            .unwrap_or_else(|| name_for_path(path));

        debug!(name = %name, rules = scheme.rules.len(), "opened scheme document");

        Ok(Self {
            name,
            path: Some(path.to_owned()),
            scheme,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saves to the document's current path.
    pub fn save(&mut self) -> Result<(), SchemeError> {
        let path = self.path.clone().ok_or(SchemeError::NoSavePath)?;
        self.save_to(path)
    }

    /// Writes the document as an XML plist and adopts `path` for future
    /// saves. An empty document name is replaced by the file stem first.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), SchemeError> {
        let path = path.as_ref();
        if self.name.is_empty() {
            self.name = name_for_path(path);
        }

        // `name` leads the dictionary, matching what the ecosystem's own
        // tools emit.
        let mut root = Dictionary::new();
        root.insert("name".to_owned(), Value::String(self.name.clone()));
        for (key, value) in self.scheme.to_plist() {
            root.insert(key, value);
        }

        Value::Dictionary(root).to_file_xml(path)?;
        self.path = Some(path.to_owned());
        Ok(())
    }
}

fn name_for_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Untitled")
        .to_owned()
}
