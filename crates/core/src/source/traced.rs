// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced source wrapper for consistent observability

use super::{EventSource, Listener};
use crate::event::EventName;

/// Wrapper that adds tracing to any EventSource
#[derive(Clone)]
pub struct TracedSource<S> {
    name: String,
    inner: S,
}

impl<S> TracedSource<S> {
    pub fn new(name: impl Into<String>, inner: S) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: EventSource> EventSource for TracedSource<S> {
    type Payload = S::Payload;

    fn once(&self, event: &EventName, listener: Listener<Self::Payload>) {
        let span = tracing::info_span!("source.once", source = %self.name, %event);
        let _guard = span.enter();

        tracing::debug!("subscribed");

        let source = self.name.clone();
        let fired = event.clone();
        self.inner.once(
            event,
            Box::new(move |payload| {
                tracing::debug!(source = %source, event = %fired, "listener fired");
                listener(payload)
            }),
        );
    }

    fn emit(&self, event: &EventName, payload: Self::Payload) -> bool {
        let span = tracing::info_span!("source.emit", source = %self.name, %event);
        let _guard = span.enter();

        let delivered = self.inner.emit(event, payload);
        if delivered {
            tracing::debug!("delivered");
        } else {
            tracing::trace!("no listeners");
        }
        delivered
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
