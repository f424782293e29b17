//! Filter stack tests: ordering, replacement, removal and anchor promotion.

use hearthstone_catalog::stack::{ApplyOutcome, FilterStack};
use hearthstone_catalog::FilterName;

#[test]
fn first_applied_filter_becomes_anchor() {
    let mut stack = FilterStack::new();
    assert!(stack.anchor().is_none());

    assert_eq!(stack.apply(FilterName::Sets, "Basic"), ApplyOutcome::Appended);
    assert_eq!(stack.apply(FilterName::Types, "Spell"), ApplyOutcome::Appended);
    assert_eq!(stack.anchor(), Some(FilterName::Sets));
    assert_eq!(stack.anchor_entry().unwrap().filter_value, "Basic");
}

#[test]
fn apply_replaces_existing_entry_in_place() {
    let mut stack = FilterStack::new();
    stack.apply(FilterName::Classes, "Mage");
    stack.apply(FilterName::Types, "Spell");

    assert_eq!(stack.apply(FilterName::Types, "Minion"), ApplyOutcome::Replaced);
    assert_eq!(stack.apply(FilterName::Types, "Minion"), ApplyOutcome::Unchanged);
    assert_eq!(
        stack.apply(FilterName::Classes, "Warrior"),
        ApplyOutcome::AnchorChanged
    );
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.names(), [FilterName::Classes, FilterName::Types]);
    assert_eq!(stack.entries()[0].filter_value, "Warrior");
    assert_eq!(stack.entries()[1].filter_value, "Minion");
}

#[test]
fn remove_keeps_anchor_until_promotion() {
    let mut stack = FilterStack::new();
    stack.apply(FilterName::Classes, "Mage");
    stack.apply(FilterName::Races, "Elemental");
    stack.apply(FilterName::Types, "Minion");

    assert!(stack.remove(FilterName::Classes));
    assert!(!stack.remove(FilterName::Classes));
    assert_eq!(stack.anchor(), Some(FilterName::Classes));
    assert!(!stack.has_anchor_entry());

    assert_eq!(stack.promote_first(), Some(FilterName::Races));
    assert!(stack.has_anchor_entry());
}

#[test]
fn promote_on_empty_stack_clears_anchor() {
    let mut stack = FilterStack::new();
    stack.apply(FilterName::Factions, "Horde");
    stack.remove(FilterName::Factions);

    assert_eq!(stack.promote_first(), None);
    assert!(stack.anchor().is_none());
    assert!(stack.is_empty());
}

#[test]
fn non_anchor_skips_anchor_entry() {
    let mut stack = FilterStack::new();
    stack.apply(FilterName::Classes, "Mage");
    stack.apply(FilterName::Types, "Spell");
    stack.apply(FilterName::Qualities, "Common");

    let rest: Vec<FilterName> = stack.non_anchor().map(|e| e.filter_name).collect();
    assert_eq!(rest, [FilterName::Types, FilterName::Qualities]);
}

#[test]
fn clear_resets_entries_and_anchor() {
    let mut stack = FilterStack::new();
    stack.apply(FilterName::Classes, "Mage");

    stack.clear();
    assert!(stack.is_empty());
    assert!(stack.anchor().is_none());

    stack.apply(FilterName::Types, "Spell");
    assert_eq!(stack.anchor(), Some(FilterName::Types));
}
