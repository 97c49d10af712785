//! The headless editing session: one scheme, its undo history, and its
//! subscribers, mutated through typed setters.

pub mod events;
pub mod history;

pub use events::{Interest, RuleField, SchemeChange, SubscriberToken, Subscribers};
pub use history::{Edit, EditStack};

use crate::error::SchemeError;
use crate::scheme::color::Color;
use crate::scheme::rule::{dedup_flags, Rule, RuleFlag};
use crate::scheme::{ColorField, Scheme};

// ---------------------------------------------------------------------------
// SchemeEditor
// ---------------------------------------------------------------------------

/// Exclusive single-writer editing session over one scheme.
///
/// Every setter follows the same commit path: apply the mutation, record
/// its reversible `Edit`, notify subscribers. Writes that change nothing
/// record nothing and notify nobody.
pub struct SchemeEditor {
    scheme: Scheme,
    history: EditStack,
    subscribers: Subscribers,
}

impl SchemeEditor {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            history: EditStack::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // -- subscriptions -------------------------------------------------------

    pub fn subscribe(
        &mut self,
        interest: Interest,
        callback: impl FnMut(&SchemeChange) + 'static,
    ) -> SubscriberToken {
        self.subscribers.subscribe(interest, callback)
    }

    pub fn unsubscribe(&mut self, token: SubscriberToken) -> bool {
        self.subscribers.unsubscribe(token)
    }

    // -- global colors -------------------------------------------------------

    pub fn set_color(&mut self, field: ColorField, color: Color) -> Result<(), SchemeError> {
        let old = field.get(&self.scheme);
        if old == color {
            return Ok(());
        }
        self.commit(Edit::SetColor {
            field,
            old,
            new: color,
        })
    }

    // -- rule fields ---------------------------------------------------------

    pub fn set_rule_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), SchemeError> {
        let new = name.into();
        let old = self.scheme.rule(index)?.name.clone();
        if old == new {
            return Ok(());
        }
        self.commit(Edit::SetRuleName { index, old, new })
    }

    pub fn set_rule_selectors(
        &mut self,
        index: usize,
        selectors: Vec<String>,
    ) -> Result<(), SchemeError> {
        let old = self.scheme.rule(index)?.selectors.clone();
        if old == selectors {
            return Ok(());
        }
        self.commit(Edit::SetRuleSelectors {
            index,
            old,
            new: selectors,
        })
    }

    pub fn set_rule_foreground(
        &mut self,
        index: usize,
        color: Color,
    ) -> Result<(), SchemeError> {
        let old = self.scheme.rule(index)?.foreground;
        if old == color {
            return Ok(());
        }
        self.commit(Edit::SetRuleForeground {
            index,
            old,
            new: color,
        })
    }

    pub fn set_rule_background(
        &mut self,
        index: usize,
        color: Color,
    ) -> Result<(), SchemeError> {
        let old = self.scheme.rule(index)?.background;
        if old == color {
            return Ok(());
        }
        self.commit(Edit::SetRuleBackground {
            index,
            old,
            new: color,
        })
    }

    pub fn set_rule_flags(
        &mut self,
        index: usize,
        flags: impl IntoIterator<Item = RuleFlag>,
    ) -> Result<(), SchemeError> {
        let new = dedup_flags(flags);
        let old = self.scheme.rule(index)?.flags().to_vec();
        if old == new {
            return Ok(());
        }
        self.commit(Edit::SetRuleFlags { index, old, new })
    }

    // -- rule list -----------------------------------------------------------

    /// Appends at the end of the rule list.
    pub fn add_rule(&mut self, rule: Rule) -> Result<(), SchemeError> {
        self.insert_rule(self.scheme.rules.len(), rule)
    }

    pub fn insert_rule(&mut self, index: usize, rule: Rule) -> Result<(), SchemeError> {
        self.commit(Edit::InsertRule { index, rule })
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<(), SchemeError> {
        let rule = self.scheme.rule(index)?.clone();
        self.commit(Edit::RemoveRule { index, rule })
    }

    pub fn move_rule(&mut self, from: usize, to: usize) -> Result<(), SchemeError> {
        if from == to {
            // Still bounds-check so a bad index doesn't silently succeed.
            self.scheme.rule(from)?;
            return Ok(());
        }
        self.commit(Edit::MoveRule { from, to })
    }

    // -- history -------------------------------------------------------------

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.scheme) {
            Some(change) => {
                self.subscribers.notify(&change);
                true
            }
            None => false,
        }
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.scheme) {
            Some(change) => {
                self.subscribers.notify(&change);
                true
            }
            None => false,
        }
    }

    /// Replaces the scheme wholesale (e.g. after a document reload).
    /// History is cleared; subscribers get `Reloaded`.
    pub fn replace_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
        self.history.clear();
        self.subscribers.notify(&SchemeChange::Reloaded);
    }

    fn commit(&mut self, edit: Edit) -> Result<(), SchemeError> {
        edit.apply(&mut self.scheme)?;
        let change = edit.change();
        self.history.record(edit);
        self.subscribers.notify(&change);
        Ok(())
    }
}
