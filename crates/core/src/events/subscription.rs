// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriptions to emissions

use crate::event::EventName;

/// Identifies a subscriber on the bus
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

impl SubscriberId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// A subscription to one event name
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub event: EventName,
}

impl Subscription {
    /// Subscription with a generated id
    pub fn to(event: impl Into<EventName>) -> Self {
        Self {
            id: SubscriberId::generate(),
            event: event.into(),
        }
    }

    /// Check if the subscription listens for the event
    pub fn matches(&self, event: &EventName) -> bool {
        self.event == *event
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
