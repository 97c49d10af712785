//! The scheme model: twelve global editor colors plus an ordered rule list,
//! and its round-trip to the `.tmTheme` property-list form.

pub mod color;
pub mod rule;

mod marshal;

pub use color::Color;
pub use rule::{Rule, RuleFlag};

use plist::{Dictionary, Value};
use tracing::warn;
use uuid::Uuid;

use crate::error::SchemeError;

/// AppKit's default selected-text background, fixed here so headless builds
/// produce the same palette as the desktop editor.
const SELECTION_BASE: Color = Color::rgb(179.0 / 255.0, 215.0 / 255.0, 1.0);

// ---------------------------------------------------------------------------
// ColorField
// ---------------------------------------------------------------------------

/// Typed handle to one of the scheme's twelve global color fields.
///
/// Everything that used to address fields by name — serialization, change
/// events, edit replay — goes through this enum instead of string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    ViewportBackground,
    ViewportForeground,
    GutterBackground,
    GutterForeground,
    FindHighlightBackground,
    FindHighlightForeground,
    InvisiblesForeground,
    LineHighlight,
    CaretForeground,
    SelectionFill,
    SelectionBorder,
    InactiveSelectionFill,
}

impl ColorField {
    pub const ALL: [ColorField; 12] = [
        ColorField::ViewportBackground,
        ColorField::ViewportForeground,
        ColorField::GutterBackground,
        ColorField::GutterForeground,
        ColorField::FindHighlightBackground,
        ColorField::FindHighlightForeground,
        ColorField::InvisiblesForeground,
        ColorField::LineHighlight,
        ColorField::CaretForeground,
        ColorField::SelectionFill,
        ColorField::SelectionBorder,
        ColorField::InactiveSelectionFill,
    ];

    /// Key under which the field is stored in the base settings dictionary.
    /// These names are the external contract; consumers match on them.
    pub fn plist_key(self) -> &'static str {
        match self {
            ColorField::ViewportBackground => "background",
            ColorField::ViewportForeground => "foreground",
            ColorField::GutterBackground => "gutter",
            ColorField::GutterForeground => "gutterForeground",
            ColorField::FindHighlightBackground => "findHighlight",
            ColorField::FindHighlightForeground => "findHighlightForeground",
            ColorField::InvisiblesForeground => "invisibles",
            ColorField::LineHighlight => "lineHighlight",
            ColorField::CaretForeground => "caret",
            ColorField::SelectionFill => "selection",
            ColorField::SelectionBorder => "selectionBorder",
            ColorField::InactiveSelectionFill => "inactiveSelection",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            ColorField::ViewportBackground => "viewport background",
            ColorField::ViewportForeground => "viewport foreground",
            ColorField::GutterBackground => "gutter background",
            ColorField::GutterForeground => "gutter foreground",
            ColorField::FindHighlightBackground => "find highlight background",
            ColorField::FindHighlightForeground => "find highlight foreground",
            ColorField::InvisiblesForeground => "invisibles foreground",
            ColorField::LineHighlight => "line highlight",
            ColorField::CaretForeground => "caret",
            ColorField::SelectionFill => "selection fill",
            ColorField::SelectionBorder => "selection border",
            ColorField::InactiveSelectionFill => "inactive selection fill",
        }
    }

    pub fn get(self, scheme: &Scheme) -> Color {
        match self {
            ColorField::ViewportBackground => scheme.viewport_background,
            ColorField::ViewportForeground => scheme.viewport_foreground,
            ColorField::GutterBackground => scheme.gutter_background,
            ColorField::GutterForeground => scheme.gutter_foreground,
            ColorField::FindHighlightBackground => scheme.find_highlight_background,
            ColorField::FindHighlightForeground => scheme.find_highlight_foreground,
            ColorField::InvisiblesForeground => scheme.invisibles_foreground,
            ColorField::LineHighlight => scheme.line_highlight,
            ColorField::CaretForeground => scheme.caret_foreground,
            ColorField::SelectionFill => scheme.selection_fill,
            ColorField::SelectionBorder => scheme.selection_border,
            ColorField::InactiveSelectionFill => scheme.inactive_selection_fill,
        }
    }

    pub fn set(self, scheme: &mut Scheme, color: Color) {
        match self {
            ColorField::ViewportBackground => scheme.viewport_background = color,
            ColorField::ViewportForeground => scheme.viewport_foreground = color,
            ColorField::GutterBackground => scheme.gutter_background = color,
            ColorField::GutterForeground => scheme.gutter_foreground = color,
            ColorField::FindHighlightBackground => scheme.find_highlight_background = color,
            ColorField::FindHighlightForeground => scheme.find_highlight_foreground = color,
            ColorField::InvisiblesForeground => scheme.invisibles_foreground = color,
            ColorField::LineHighlight => scheme.line_highlight = color,
            ColorField::CaretForeground => scheme.caret_foreground = color,
            ColorField::SelectionFill => scheme.selection_fill = color,
            ColorField::SelectionBorder => scheme.selection_border = color,
            ColorField::InactiveSelectionFill => scheme.inactive_selection_fill = color,
        }
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A full color scheme: global editor colors, an identity, and the ordered
/// rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheme {
    // Viewport colors (the default background/foreground pair).
    pub viewport_background: Color,
    pub viewport_foreground: Color,

    // Line-number margin.
    pub gutter_background: Color,
    pub gutter_foreground: Color,

    // Find highlight.
    pub find_highlight_background: Color,
    pub find_highlight_foreground: Color,

    // Editor colors.
    pub invisibles_foreground: Color,
    pub line_highlight: Color,
    pub caret_foreground: Color,

    // Selection colors.
    pub selection_fill: Color,
    pub selection_border: Color,
    pub inactive_selection_fill: Color,

    /// Ordered rule list. Order is significant to consumers.
    pub rules: Vec<Rule>,

    uuid: Uuid,
}

impl Default for Scheme {
    /// A usable scheme before any file is loaded; these values are policy,
    /// not placeholders.
    fn default() -> Self {
        Self {
            viewport_background: Color::BLACK,
            viewport_foreground: Color::WHITE,
            gutter_background: Color::UNSET,
            gutter_foreground: Color::UNSET,
            find_highlight_background: Color::UNSET,
            find_highlight_foreground: Color::UNSET,
            invisibles_foreground: Color::white(0.75),
            line_highlight: Color::BLACK.with_alpha(0.07),
            caret_foreground: Color::BLACK,
            selection_fill: SELECTION_BASE,
            selection_border: SELECTION_BASE.with_alpha(0.0),
            inactive_selection_fill: SELECTION_BASE.with_alpha(0.5),
            rules: Vec::new(),
            uuid: Uuid::new_v4(),
        }
    }
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheme's identity. Fixed at construction; only `duplicate` and
    /// `copy_colors` mint a new one.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Deep copy of colors *and* rules. A fresh UUID is generated unless
    /// one is supplied.
    pub fn duplicate(&self, new_uuid: Option<Uuid>) -> Scheme {
        let mut copy = self.clone();
        copy.uuid = new_uuid.unwrap_or_else(Uuid::new_v4);
        copy
    }

    /// Copies only the twelve global colors into a fresh scheme: new UUID,
    /// no rules.
    pub fn copy_colors(&self) -> Scheme {
        let mut copy = self.clone();
        copy.rules.clear();
        copy.uuid = Uuid::new_v4();
        copy
    }

    // -- rule list operations ------------------------------------------------

    pub fn rule(&self, index: usize) -> Result<&Rule, SchemeError> {
        self.rules.get(index).ok_or(SchemeError::RuleIndexOutOfBounds {
            index,
            len: self.rules.len(),
        })
    }

    pub fn rule_mut(&mut self, index: usize) -> Result<&mut Rule, SchemeError> {
        let len = self.rules.len();
        self.rules
            .get_mut(index)
            .ok_or(SchemeError::RuleIndexOutOfBounds { index, len })
    }

    /// Inserts at `index`, shifting later rules down. `index` may equal the
    /// current length (append).
    pub fn insert_rule(&mut self, index: usize, rule: Rule) -> Result<(), SchemeError> {
        if index > self.rules.len() {
            return Err(SchemeError::RuleIndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.rules.insert(index, rule);
        Ok(())
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<Rule, SchemeError> {
        if index >= self.rules.len() {
            return Err(SchemeError::RuleIndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    /// Moves the rule at `from` so it ends up at index `to`.
    pub fn move_rule(&mut self, from: usize, to: usize) -> Result<(), SchemeError> {
        let len = self.rules.len();
        if from >= len {
            return Err(SchemeError::RuleIndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(SchemeError::RuleIndexOutOfBounds { index: to, len });
        }
        let rule = self.rules.remove(from);
        self.rules.insert(to, rule);
        Ok(())
    }

    // -- property-list round-trip --------------------------------------------

    /// Parses a scheme from the root dictionary of a `.tmTheme` plist.
    ///
    /// The `settings` array must contain a base entry — the dictionary
    /// whose only key is `settings` — carrying the global colors; every
    /// other dictionary element is a rule. A missing or malformed `uuid`
    /// is tolerated by generating a fresh one.
    pub fn from_plist(root: &Dictionary) -> Result<Scheme, SchemeError> {
        let entries = root
            .get("settings")
            .and_then(Value::as_array)
            .ok_or(SchemeError::MissingSettingsArray)?;

        let base = entries
            .iter()
            .filter_map(Value::as_dictionary)
            .find(|dict| is_base_entry(dict))
            .ok_or(SchemeError::MissingBaseEntry)?;

        let mut scheme = Scheme {
            uuid: parse_uuid(root),
            ..Scheme::default()
        };

        if let Some(settings) = base.get("settings").and_then(Value::as_dictionary) {
            for field in ColorField::ALL {
                let mut color = field.get(&scheme);
                marshal::assign_color(&mut color, settings, field.plist_key());
                field.set(&mut scheme, color);
            }
        }

        for entry in entries.iter().filter_map(Value::as_dictionary) {
            if !is_base_entry(entry) {
                scheme.rules.push(Rule::from_plist(entry));
            }
        }

        Ok(scheme)
    }

    /// Serializes to the root dictionary of a `.tmTheme` plist:
    /// `{ uuid, settings: [base entry, rule entries...] }`. Only visible
    /// global colors are written.
    pub fn to_plist(&self) -> Dictionary {
        let mut base_settings = Dictionary::new();
        for field in ColorField::ALL {
            marshal::put_color_if_visible(
                &mut base_settings,
                field.plist_key(),
                field.get(self),
            );
        }

        let mut base = Dictionary::new();
        base.insert("settings".to_owned(), Value::Dictionary(base_settings));

        let mut entries = vec![Value::Dictionary(base)];
        entries.extend(self.rules.iter().map(|rule| Value::Dictionary(rule.to_plist())));

        let mut root = Dictionary::new();
        root.insert(
            "uuid".to_owned(),
            Value::String(self.uuid.to_string().to_ascii_uppercase()),
        );
        root.insert("settings".to_owned(), Value::Array(entries));
        root
    }
}

/// The base entry is the dictionary whose *only* key is `settings`.
fn is_base_entry(dict: &Dictionary) -> bool {
    dict.len() == 1 && dict.get("settings").is_some()
}

fn parse_uuid(root: &Dictionary) -> Uuid {
    match root.get("uuid").and_then(Value::as_string) {
        Some(text) => Uuid::parse_str(text).unwrap_or_else(|err| {
            warn!(value = text, "regenerating malformed scheme uuid: {err}");
            Uuid::new_v4()
        }),
        None => Uuid::new_v4(),
    }
}
