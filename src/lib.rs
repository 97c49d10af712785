//! Schemer — a headless editing core for TextMate-style `.tmTheme` color
//! schemes.
//!
//! The crate models a scheme (twelve global editor colors plus an ordered
//! rule list), round-trips it through the `.tmTheme` property-list format,
//! and layers an editing session on top: typed change events and a
//! reversible edit history.
//!
//! # Quick start
//!
//! ```no_run
//! use schemer::document::SchemeDocument;
//! use schemer::editor::SchemeEditor;
//! use schemer::scheme::{Color, ColorField};
//!
//! let doc = SchemeDocument::open("Monokai.tmTheme").unwrap();
//! let mut editor = SchemeEditor::new(doc.scheme.clone());
//! editor
//!     .set_color(ColorField::CaretForeground, Color::from_hex("#f8f8f0").unwrap())
//!     .unwrap();
//! editor.undo();
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod scheme;
