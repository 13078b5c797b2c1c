// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing emissions to subscribers

use super::emission::Emission;
use super::subscription::{SubscriberId, Subscription};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Sender for emission delivery
pub type EventSender<P> = mpsc::UnboundedSender<Emission<P>>;
/// Receiver for emission delivery
pub type EventReceiver<P> = mpsc::UnboundedReceiver<Emission<P>>;

struct Registry<P> {
    subscribers: HashMap<SubscriberId, (Subscription, EventSender<P>)>,
    /// Receive every emission regardless of name
    global_handlers: Vec<EventSender<P>>,
    closed: bool,
}

/// The event bus routes emissions to matching subscribers
///
/// Once closed, every sender is dropped: existing receivers drain what was
/// already delivered and then end, and new receivers end immediately.
pub struct EventBus<P> {
    registry: Arc<RwLock<Registry<P>>>,
}

impl<P: Clone> EventBus<P> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry {
                subscribers: HashMap::new(),
                global_handlers: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Subscribe to emissions named like the subscription's event
    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver<P> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        if !registry.closed {
            registry
                .subscribers
                .insert(subscription.id.clone(), (subscription, tx));
        }

        rx
    }

    /// Subscribe to every emission
    pub fn subscribe_all(&self) -> EventReceiver<P> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        if !registry.closed {
            registry.global_handlers.push(tx);
        }

        rx
    }

    /// Publish an emission to all matching subscribers.
    /// Returns how many receivers it was delivered to.
    pub fn publish(&self, emission: &Emission<P>) -> usize {
        let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
        if registry.closed {
            return 0;
        }

        let mut delivered = 0;
        for tx in &registry.global_handlers {
            if tx.send(emission.clone()).is_ok() {
                delivered += 1;
            }
        }

        let name = emission.name();
        for (subscription, tx) in registry.subscribers.values() {
            if subscription.matches(name) && tx.send(emission.clone()).is_ok() {
                delivered += 1;
            }
        }

        delivered
    }

    /// Stop accepting subscribers and drop every sender
    pub fn close(&self) {
        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        registry.closed = true;
        registry.subscribers.clear();
        registry.global_handlers.clear();
    }

    /// Get count of active subscribers, including global handlers
    pub fn subscriber_count(&self) -> usize {
        let registry = self.registry.read().unwrap_or_else(|e| e.into_inner());
        registry.subscribers.len() + registry.global_handlers.len()
    }
}

impl<P: Clone> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for EventBus<P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
