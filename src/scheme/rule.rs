//! A single highlighting rule: the scope selectors it applies to and the
//! style it selects.

use plist::{Dictionary, Value};

use crate::scheme::color::Color;
use crate::scheme::marshal;

// ---------------------------------------------------------------------------
// RuleFlag
// ---------------------------------------------------------------------------

/// A font-style flag on a rule.
///
/// Unrecognized tokens are preserved verbatim so foreign schemes survive a
/// round-trip through the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFlag {
    Bold,
    Italic,
    Underline,
    Unknown(String),
}

impl RuleFlag {
    /// The token written to the `fontStyle` string.
    pub fn name(&self) -> &str {
        match self {
            RuleFlag::Bold => "bold",
            RuleFlag::Italic => "italic",
            RuleFlag::Underline => "underline",
            RuleFlag::Unknown(name) => name,
        }
    }

    /// Maps a `fontStyle` token to a flag. Known names match
    /// case-insensitively; anything else keeps its original casing.
    pub fn from_token(token: &str) -> RuleFlag {
        match token.to_ascii_lowercase().as_str() {
            "bold" => RuleFlag::Bold,
            "italic" => RuleFlag::Italic,
            "underline" => RuleFlag::Underline,
            _ => RuleFlag::Unknown(token.to_owned()),
        }
    }
}

/// Drops flags whose name was already seen, keeping first occurrences in
/// order. Flags behave as a set; order only matters for round-trip output.
pub fn dedup_flags(flags: impl IntoIterator<Item = RuleFlag>) -> Vec<RuleFlag> {
    let mut out: Vec<RuleFlag> = Vec::new();
    for flag in flags {
        if !out.iter().any(|seen| seen.name() == flag.name()) {
            out.push(flag);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One syntax rule of a scheme. Rule order within a scheme is significant:
/// consumers let later rules override earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    /// Scope selectors, stored split and trimmed; serialized comma-joined.
    pub selectors: Vec<String>,
    pub foreground: Color,
    pub background: Color,
    flags: Vec<RuleFlag>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            name: "Unnamed Rule".to_owned(),
            selectors: Vec::new(),
            // Invisible until assigned, so a fresh rule serializes without
            // color keys.
            foreground: Color::rgba(0.0, 0.0, 0.0, 0.0),
            background: Color::rgba(1.0, 1.0, 1.0, 0.0),
            flags: Vec::new(),
        }
    }
}

impl Rule {
    pub fn flags(&self) -> &[RuleFlag] {
        &self.flags
    }

    /// Replaces the flag set. Duplicate names are dropped (first wins).
    pub fn set_flags(&mut self, flags: impl IntoIterator<Item = RuleFlag>) {
        self.flags = dedup_flags(flags);
    }

    /// Builds a rule from one entry of the plist `settings` array.
    ///
    /// Every key is optional; whatever is absent or malformed keeps the
    /// default. This parser never fails — a rule entry with nothing usable
    /// in it is still a (default) rule.
    pub fn from_plist(dict: &Dictionary) -> Rule {
        let mut rule = Rule::default();

        if let Some(name) = dict.get("name").and_then(Value::as_string) {
            rule.name = name.to_owned();
        }

        if let Some(scope) = dict.get("scope").and_then(Value::as_string) {
            rule.selectors = split_selectors(scope);
        }

        if let Some(settings) = dict.get("settings").and_then(Value::as_dictionary) {
            marshal::assign_color(&mut rule.foreground, settings, "foreground");
            marshal::assign_color(&mut rule.background, settings, "background");

            if let Some(style) = settings.get("fontStyle").and_then(Value::as_string) {
                rule.set_flags(style.split_whitespace().map(RuleFlag::from_token));
            }
        }

        rule
    }

    /// Serializes the rule as one entry of the plist `settings` array.
    /// Invisible colors and an empty flag set are omitted.
    pub fn to_plist(&self) -> Dictionary {
        let mut settings = Dictionary::new();
        marshal::put_color_if_visible(&mut settings, "foreground", self.foreground);
        marshal::put_color_if_visible(&mut settings, "background", self.background);
        if !self.flags.is_empty() {
            settings.insert("fontStyle".to_owned(), Value::String(self.font_style()));
        }

        let mut dict = Dictionary::new();
        dict.insert("name".to_owned(), Value::String(self.name.clone()));
        dict.insert("scope".to_owned(), Value::String(self.selectors.join(", ")));
        dict.insert("settings".to_owned(), Value::Dictionary(settings));
        dict
    }

    /// Space-joined flag names, the `fontStyle` wire form.
    pub fn font_style(&self) -> String {
        self.flags
            .iter()
            .map(RuleFlag::name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits a `scope` string on commas, trimming whitespace and dropping
/// empty segments.
fn split_selectors(scope: &str) -> Vec<String> {
    scope
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_mapping_is_case_insensitive_for_known_flags() {
        assert_eq!(RuleFlag::from_token("BOLD"), RuleFlag::Bold);
        assert_eq!(RuleFlag::from_token("Italic"), RuleFlag::Italic);
        assert_eq!(
            RuleFlag::from_token("Shadow"),
            RuleFlag::Unknown("Shadow".to_owned())
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let flags = dedup_flags([
            RuleFlag::Italic,
            RuleFlag::Bold,
            RuleFlag::Italic,
            RuleFlag::Bold,
        ]);
        assert_eq!(flags, vec![RuleFlag::Italic, RuleFlag::Bold]);
    }

    #[test]
    fn differently_cased_unknown_flags_stay_distinct() {
        let flags = dedup_flags([
            RuleFlag::Unknown("Shadow".to_owned()),
            RuleFlag::Unknown("shadow".to_owned()),
        ]);
        assert_eq!(flags.len(), 2);
    }
}
