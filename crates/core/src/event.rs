// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event names
//!
//! An event is identified either by a string or by a [`Symbol`], an atomic
//! identifier that only compares equal to itself and its clones.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Name of the event sources emit when they fail
pub const ERROR_EVENT: &str = "error";

/// A unique, atomic event identifier
#[derive(Clone)]
pub struct Symbol {
    id: Uuid,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: None,
        }
    }

    /// Create a symbol carrying a description for logs.
    /// Two symbols with the same description are still distinct.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: Some(Arc::from(description.into())),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Identifies an event on a source or on the aggregator
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    Named(String),
    Symbol(Symbol),
}

impl EventName {
    /// The conventional failure event
    pub fn error() -> Self {
        Self::Named(ERROR_EVENT.to_string())
    }

    /// Empty string names cannot be listened to
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Named(name) => !name.is_empty(),
            Self::Symbol(_) => true,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Symbol(symbol) => write!(f, "{:?}", symbol),
        }
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Symbol> for EventName {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<&Symbol> for EventName {
    fn from(symbol: &Symbol) -> Self {
        Self::Symbol(symbol.clone())
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
