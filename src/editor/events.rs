//! Typed change notifications for scheme mutations.
//!
//! The editor publishes one `SchemeChange` per effective mutation and views
//! subscribe explicitly, optionally filtered down to a single field of
//! interest. This replaces string-keyed key-value observation: there is no
//! reflection, and a subscription names the exact thing it watches.

use crate::scheme::ColorField;

// ---------------------------------------------------------------------------
// Change events
// ---------------------------------------------------------------------------

/// Which part of a rule changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    Name,
    Selectors,
    Foreground,
    Background,
    Flags,
}

/// One observable mutation of the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeChange {
    /// A global color field was set.
    Color { field: ColorField },
    /// A field of the rule at `index` was set.
    Rule { index: usize, field: RuleField },
    RuleInserted { index: usize },
    RuleRemoved { index: usize },
    RuleMoved { from: usize, to: usize },
    /// The whole scheme was swapped out (e.g. a document reload). Delivered
    /// to every subscriber regardless of filter.
    Reloaded,
}

/// What a subscriber wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    /// Every change.
    All,
    /// One global color field.
    Color(ColorField),
    /// Rule list membership and rule field changes.
    Rules,
}

impl Interest {
    fn matches(self, change: &SchemeChange) -> bool {
        match (self, change) {
            (_, SchemeChange::Reloaded) => true,
            (Interest::All, _) => true,
            (Interest::Color(field), SchemeChange::Color { field: changed }) => {
                field == *changed
            }
            (
                Interest::Rules,
                SchemeChange::Rule { .. }
                | SchemeChange::RuleInserted { .. }
                | SchemeChange::RuleRemoved { .. }
                | SchemeChange::RuleMoved { .. },
            ) => true,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Subscriber registry
// ---------------------------------------------------------------------------

/// Handle returned by `subscribe`; pass to `unsubscribe` to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberToken(u64);

type Callback = Box<dyn FnMut(&SchemeChange)>;

/// Explicit subscriber registry. Single-threaded: the scheme is owned by
/// one editing session at a time, so callbacks run synchronously inside
/// the mutation that triggered them.
#[derive(Default)]
pub struct Subscribers {
    next_token: u64,
    entries: Vec<(SubscriberToken, Interest, Callback)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        interest: Interest,
        callback: impl FnMut(&SchemeChange) + 'static,
    ) -> SubscriberToken {
        let token = SubscriberToken(self.next_token);
        self.next_token += 1;
        self.entries.push((token, interest, Box::new(callback)));
        token
    }

    /// Returns false when the token was already gone.
    pub fn unsubscribe(&mut self, token: SubscriberToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_token, _, _)| *entry_token != token);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &SchemeChange) {
        for (_, interest, callback) in &mut self.entries {
            if interest.matches(change) {
                callback(change);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
