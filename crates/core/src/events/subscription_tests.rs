// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::event::Symbol;

#[test]
fn subscription_matches_its_event_only() {
    let sub = Subscription::to("done");

    assert!(sub.matches(&"done".into()));
    assert!(!sub.matches(&"error".into()));
    assert!(!sub.matches(&"ready".into()));
}

#[test]
fn subscription_matches_symbol_by_identity() {
    let symbol = Symbol::described("done");
    let sub = Subscription::to(&symbol);

    assert!(sub.matches(&EventName::from(&symbol)));
    assert!(!sub.matches(&EventName::from(Symbol::described("done"))));
    assert!(!sub.matches(&"done".into()));
}

#[test]
fn generated_ids_are_unique() {
    let a = Subscription::to("done");
    let b = Subscription::to("done");
    assert_ne!(a.id, b.id);
}
