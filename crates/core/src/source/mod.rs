// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event sources
//!
//! This module provides:
//! - `EventSource` - The capability the aggregator waits on
//! - `Emitter` - In-process source with persistent and one-shot listeners
//! - `TracedSource` - Wrapper that logs subscriptions and emissions
//! - `Member` - An element of an input collection, source or not

mod emitter;
mod traced;

pub use emitter::Emitter;
pub use traced::TracedSource;

use crate::event::EventName;
use std::fmt;
use std::sync::Arc;

/// Callback invoked at most once with an event payload
pub type Listener<P> = Box<dyn FnOnce(P) + Send + 'static>;

/// Something that can be subscribed to once and can emit named events
pub trait EventSource: Send + Sync {
    type Payload: Send + 'static;

    /// Register a listener that detaches itself after its first invocation
    fn once(&self, event: &EventName, listener: Listener<Self::Payload>);

    /// Fire `event`; returns whether any listener was registered for it
    fn emit(&self, event: &EventName, payload: Self::Payload) -> bool;
}

impl<S: EventSource + ?Sized> EventSource for Arc<S> {
    type Payload = S::Payload;

    fn once(&self, event: &EventName, listener: Listener<Self::Payload>) {
        (**self).once(event, listener)
    }

    fn emit(&self, event: &EventName, payload: Self::Payload) -> bool {
        (**self).emit(event, payload)
    }
}

impl<S: EventSource + ?Sized> EventSource for &S {
    type Payload = S::Payload;

    fn once(&self, event: &EventName, listener: Listener<Self::Payload>) {
        (**self).once(event, listener)
    }

    fn emit(&self, event: &EventName, payload: Self::Payload) -> bool {
        (**self).emit(event, payload)
    }
}

/// A value found where an event source was expected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opaque {
    description: String,
}

impl Opaque {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// One element of a source collection, classified at the boundary
#[derive(Clone, Debug)]
pub enum Member<S> {
    Source(S),
    Other(Opaque),
}

impl<S> Member<S> {
    pub fn into_source(self) -> Result<S, Opaque> {
        match self {
            Self::Source(source) => Ok(source),
            Self::Other(opaque) => Err(opaque),
        }
    }
}
