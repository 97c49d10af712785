//! Reversible edits and the undo/redo stack.
//!
//! Every mutation is captured as a plain value holding both its old and new
//! state, so undo is a matter of replaying inverses. Nothing here captures
//! closures or leans on a platform undo manager.

use tracing::warn;

use crate::editor::events::{RuleField, SchemeChange};
use crate::error::SchemeError;
use crate::scheme::color::Color;
use crate::scheme::rule::{Rule, RuleFlag};
use crate::scheme::{ColorField, Scheme};

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// One reversible mutation of a scheme.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetColor {
        field: ColorField,
        old: Color,
        new: Color,
    },
    SetRuleName {
        index: usize,
        old: String,
        new: String,
    },
    SetRuleSelectors {
        index: usize,
        old: Vec<String>,
        new: Vec<String>,
    },
    SetRuleForeground {
        index: usize,
        old: Color,
        new: Color,
    },
    SetRuleBackground {
        index: usize,
        old: Color,
        new: Color,
    },
    SetRuleFlags {
        index: usize,
        old: Vec<RuleFlag>,
        new: Vec<RuleFlag>,
    },
    InsertRule {
        index: usize,
        rule: Rule,
    },
    RemoveRule {
        index: usize,
        rule: Rule,
    },
    MoveRule {
        from: usize,
        to: usize,
    },
}

impl Edit {
    /// The edit that exactly reverses this one.
    pub fn inverted(&self) -> Edit {
        match self {
            Edit::SetColor { field, old, new } => Edit::SetColor {
                field: *field,
                old: *new,
                new: *old,
            },
            Edit::SetRuleName { index, old, new } => Edit::SetRuleName {
                index: *index,
                old: new.clone(),
                new: old.clone(),
            },
            Edit::SetRuleSelectors { index, old, new } => Edit::SetRuleSelectors {
                index: *index,
                old: new.clone(),
                new: old.clone(),
            },
            Edit::SetRuleForeground { index, old, new } => Edit::SetRuleForeground {
                index: *index,
                old: *new,
                new: *old,
            },
            Edit::SetRuleBackground { index, old, new } => Edit::SetRuleBackground {
                index: *index,
                old: *new,
                new: *old,
            },
            Edit::SetRuleFlags { index, old, new } => Edit::SetRuleFlags {
                index: *index,
                old: new.clone(),
                new: old.clone(),
            },
            Edit::InsertRule { index, rule } => Edit::RemoveRule {
                index: *index,
                rule: rule.clone(),
            },
            Edit::RemoveRule { index, rule } => Edit::InsertRule {
                index: *index,
                rule: rule.clone(),
            },
            Edit::MoveRule { from, to } => Edit::MoveRule {
                from: *to,
                to: *from,
            },
        }
    }

    /// Applies the edit's forward direction to `scheme`.
    pub fn apply(&self, scheme: &mut Scheme) -> Result<(), SchemeError> {
        match self {
            Edit::SetColor { field, new, .. } => {
                field.set(scheme, *new);
                Ok(())
            }
            Edit::SetRuleName { index, new, .. } => {
                scheme.rule_mut(*index)?.name = new.clone();
                Ok(())
            }
            Edit::SetRuleSelectors { index, new, .. } => {
                scheme.rule_mut(*index)?.selectors = new.clone();
                Ok(())
            }
            Edit::SetRuleForeground { index, new, .. } => {
                scheme.rule_mut(*index)?.foreground = *new;
                Ok(())
            }
            Edit::SetRuleBackground { index, new, .. } => {
                scheme.rule_mut(*index)?.background = *new;
                Ok(())
            }
            Edit::SetRuleFlags { index, new, .. } => {
                scheme.rule_mut(*index)?.set_flags(new.iter().cloned());
                Ok(())
            }
            Edit::InsertRule { index, rule } => scheme.insert_rule(*index, rule.clone()),
            Edit::RemoveRule { index, .. } => scheme.remove_rule(*index).map(drop),
            Edit::MoveRule { from, to } => scheme.move_rule(*from, *to),
        }
    }

    /// The notification this edit produces when applied.
    pub fn change(&self) -> SchemeChange {
        match self {
            Edit::SetColor { field, .. } => SchemeChange::Color { field: *field },
            Edit::SetRuleName { index, .. } => SchemeChange::Rule {
                index: *index,
                field: RuleField::Name,
            },
            Edit::SetRuleSelectors { index, .. } => SchemeChange::Rule {
                index: *index,
                field: RuleField::Selectors,
            },
            Edit::SetRuleForeground { index, .. } => SchemeChange::Rule {
                index: *index,
                field: RuleField::Foreground,
            },
            Edit::SetRuleBackground { index, .. } => SchemeChange::Rule {
                index: *index,
                field: RuleField::Background,
            },
            Edit::SetRuleFlags { index, .. } => SchemeChange::Rule {
                index: *index,
                field: RuleField::Flags,
            },
            Edit::InsertRule { index, .. } => SchemeChange::RuleInserted { index: *index },
            Edit::RemoveRule { index, .. } => SchemeChange::RuleRemoved { index: *index },
            Edit::MoveRule { from, to } => SchemeChange::RuleMoved {
                from: *from,
                to: *to,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// EditStack
// ---------------------------------------------------------------------------

/// Undo/redo history. Owns replay: `undo` applies the inverse of the most
/// recent edit, `redo` re-applies it.
#[derive(Default)]
pub struct EditStack {
    undo: Vec<Edit>,
    redo: Vec<Edit>,
}

impl EditStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an already-applied edit. Recording clears the redo stack.
    pub fn record(&mut self, edit: Edit) {
        self.undo.push(edit);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Reverses the most recent edit. Returns the resulting change, or None
    /// when there is nothing to undo. An edit that no longer fits the
    /// scheme is dropped with a warning instead of panicking.
    pub fn undo(&mut self, scheme: &mut Scheme) -> Option<SchemeChange> {
        let edit = self.undo.pop()?;
        let inverse = edit.inverted();
        match inverse.apply(scheme) {
            Ok(()) => {
                self.redo.push(edit);
                Some(inverse.change())
            }
            Err(err) => {
                warn!("dropping edit that no longer fits the scheme: {err}");
                None
            }
        }
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self, scheme: &mut Scheme) -> Option<SchemeChange> {
        let edit = self.redo.pop()?;
        match edit.apply(scheme) {
            Ok(()) => {
                let change = edit.change();
                self.undo.push(edit);
                Some(change)
            }
            Err(err) => {
                warn!("dropping edit that no longer fits the scheme: {err}");
                None
            }
        }
    }
}
