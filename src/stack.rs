//! Ordered stack of active filter selections.
//!
//! Entries keep insertion order. The anchor is the filter whose endpoint the
//! fetched card set came from; every other entry is applied locally.

use crate::models::{AppliedFilter, FilterName};

#[derive(Debug, Clone, Default)]
pub struct FilterStack {
    entries: Vec<AppliedFilter>,
    anchor: Option<FilterName>,
}

/// What [`FilterStack::apply`] did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// A new entry was appended.
    Appended,
    /// An existing non-anchor entry got a new value.
    Replaced,
    /// The anchor entry got a different value; its fetch is stale.
    AnchorChanged,
    /// The entry already had this value.
    Unchanged,
}

impl FilterStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `name`.
    ///
    /// An existing entry for `name` is updated in place rather than duplicated.
    /// The first filter applied to an anchorless stack becomes the anchor.
    pub fn apply(&mut self, name: FilterName, value: &str) -> ApplyOutcome {
        let outcome = match self.entries.iter().position(|e| e.filter_name == name) {
            Some(i) if self.entries[i].filter_value == value => ApplyOutcome::Unchanged,
            Some(i) => {
                self.entries[i].filter_value = value.to_string();
                if self.anchor == Some(name) {
                    ApplyOutcome::AnchorChanged
                } else {
                    ApplyOutcome::Replaced
                }
            }
            None => {
                self.entries.push(AppliedFilter {
                    filter_name: name,
                    filter_value: value.to_string(),
                });
                ApplyOutcome::Appended
            }
        };

        if self.anchor.is_none() {
            self.anchor = Some(name);
        }
        outcome
    }

    /// Remove every entry for `name`. Returns whether anything was removed.
    ///
    /// The anchor is left untouched; see [`promote_first`](Self::promote_first).
    pub fn remove(&mut self, name: FilterName) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.filter_name != name);
        self.entries.len() != before
    }

    pub fn anchor(&self) -> Option<FilterName> {
        self.anchor
    }

    pub fn anchor_entry(&self) -> Option<&AppliedFilter> {
        let anchor = self.anchor?;
        self.entries.iter().find(|e| e.filter_name == anchor)
    }

    pub fn has_anchor_entry(&self) -> bool {
        self.anchor_entry().is_some()
    }

    /// Make the first remaining entry the anchor.
    ///
    /// On an empty stack the anchor is cleared and `None` returned.
    pub fn promote_first(&mut self) -> Option<FilterName> {
        self.anchor = self.entries.first().map(|e| e.filter_name);
        self.anchor
    }

    /// Entries other than the anchor, in stack order.
    pub fn non_anchor(&self) -> impl Iterator<Item = &AppliedFilter> + '_ {
        let anchor = self.anchor;
        self.entries
            .iter()
            .filter(move |e| Some(e.filter_name) != anchor)
    }

    pub fn names(&self) -> Vec<FilterName> {
        self.entries.iter().map(|e| e.filter_name).collect()
    }

    pub fn entries(&self) -> &[AppliedFilter] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.anchor = None;
    }
}
