// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process event emitter

use super::{EventSource, Listener};
use crate::event::EventName;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

enum Handler<P> {
    Persistent(Arc<dyn Fn(P) + Send + Sync + 'static>),
    Once(Listener<P>),
}

/// An event source that delivers payloads to listeners synchronously
///
/// Listeners run on the emitting thread, outside the internal lock, so a
/// listener may subscribe to or emit on the same emitter. Persistent
/// listeners stay registered while they run and see re-entrant emissions.
pub struct Emitter<P> {
    listeners: Arc<Mutex<HashMap<EventName, Vec<Handler<P>>>>>,
}

impl<P> Emitter<P>
where
    P: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register a listener invoked on every emission of `event`
    pub fn on(&self, event: impl Into<EventName>, listener: impl Fn(P) + Send + Sync + 'static) {
        self.register(event.into(), Handler::Persistent(Arc::new(listener)));
    }

    /// Number of listeners currently attached to `event`
    pub fn listener_count(&self, event: impl Into<EventName>) -> usize {
        let event = event.into();
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&event)
            .map_or(0, Vec::len)
    }

    /// Detach every listener for `event`
    pub fn remove_all(&self, event: impl Into<EventName>) {
        let event = event.into();
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&event);
    }

    fn register(&self, event: EventName, handler: Handler<P>) {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.entry(event).or_default().push(handler);
    }

    /// Once listeners are taken out under the lock; persistent ones are
    /// cloned out and left in place.
    fn dispatch(&self, event: &EventName, payload: P) -> bool {
        let calls = {
            let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
            let Some(handlers) = listeners.remove(event) else {
                return false;
            };

            let mut calls = Vec::with_capacity(handlers.len());
            let mut kept = Vec::new();
            for handler in handlers {
                if let Handler::Persistent(listener) = &handler {
                    kept.push(Handler::Persistent(Arc::clone(listener)));
                }
                calls.push(handler);
            }
            if !kept.is_empty() {
                listeners.insert(event.clone(), kept);
            }
            calls
        };
        if calls.is_empty() {
            return false;
        }

        for call in calls {
            match call {
                Handler::Once(listener) => listener(payload.clone()),
                Handler::Persistent(listener) => listener(payload.clone()),
            }
        }
        true
    }
}

impl<P> Default for Emitter<P>
where
    P: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for Emitter<P> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<P> EventSource for Emitter<P>
where
    P: Clone + Send + 'static,
{
    type Payload = P;

    fn once(&self, event: &EventName, listener: Listener<P>) {
        self.register(event.clone(), Handler::Once(listener));
    }

    fn emit(&self, event: &EventName, payload: P) -> bool {
        self.dispatch(event, payload)
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
