// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source collections and their results
//!
//! A collection is either indexed (results keep index order) or keyed
//! (results keep the same keys). Untyped input arrives as an [`Item`] tree
//! and is classified into [`Sources`] at the boundary.

use crate::error::BuildError;
use crate::source::{Member, Opaque};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a source within its collection
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Index(usize),
    Key(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "index {}", i),
            Self::Key(key) => write!(f, "key {:?}", key),
        }
    }
}

/// Untyped input: anything a caller may hand over as "the sources"
#[derive(Debug)]
pub enum Item<S> {
    Source(S),
    List(Vec<Item<S>>),
    Map(BTreeMap<String, Item<S>>),
    Value(Value),
}

impl<S> Item<S> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Source(_) => "a single event source",
            Self::List(_) => "a list",
            Self::Map(_) => "a map",
            Self::Value(Value::Null) => "null",
            Self::Value(Value::Bool(_)) => "a boolean",
            Self::Value(Value::Number(_)) => "a number",
            Self::Value(Value::String(_)) => "a string",
            Self::Value(Value::Array(_)) => "an array",
            Self::Value(Value::Object(_)) => "an object",
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Source(_) => "event source".to_string(),
            Self::List(items) => format!("list of {} items", items.len()),
            Self::Map(items) => format!("map with {} keys", items.len()),
            Self::Value(value) => value.to_string(),
        }
    }

    fn into_member(self) -> Member<S> {
        match self {
            Self::Source(source) => Member::Source(source),
            other => Member::Other(Opaque::new(other.describe())),
        }
    }
}

impl<S> From<Value> for Item<S> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// A validated collection shape holding classified members
#[derive(Debug)]
pub enum Sources<S> {
    Indexed(Vec<Member<S>>),
    /// Wired in sorted key order, not insertion order
    Keyed(BTreeMap<String, Member<S>>),
}

impl<S> Sources<S> {
    pub fn indexed(sources: impl IntoIterator<Item = S>) -> Self {
        Self::Indexed(sources.into_iter().map(Member::Source).collect())
    }

    /// Named sources, wired in sorted key order whatever order they are
    /// given in. Under [`NonSourcePolicy::StopWiring`] that order decides
    /// which keys after a non-source are left unwired.
    ///
    /// [`NonSourcePolicy::StopWiring`]: crate::config::NonSourcePolicy::StopWiring
    pub fn keyed<K: Into<String>>(sources: impl IntoIterator<Item = (K, S)>) -> Self {
        Self::Keyed(
            sources
                .into_iter()
                .map(|(key, source)| (key.into(), Member::Source(source)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(members) => members.len(),
            Self::Keyed(members) => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> TryFrom<Item<S>> for Sources<S> {
    type Error = BuildError;

    fn try_from(item: Item<S>) -> Result<Self, Self::Error> {
        match item {
            Item::List(items) => Ok(Self::Indexed(
                items.into_iter().map(Item::into_member).collect(),
            )),
            Item::Map(items) => Ok(Self::Keyed(
                items
                    .into_iter()
                    .map(|(key, item)| (key, item.into_member()))
                    .collect(),
            )),
            Item::Value(Value::Array(values)) => Ok(Self::Indexed(
                values
                    .into_iter()
                    .map(|value| Item::<S>::Value(value).into_member())
                    .collect(),
            )),
            Item::Value(Value::Object(values)) => Ok(Self::Keyed(
                values
                    .into_iter()
                    .map(|(key, value)| (key, Item::<S>::Value(value).into_member()))
                    .collect(),
            )),
            other => Err(BuildError::InvalidInputKind {
                found: other.kind(),
            }),
        }
    }
}

/// Aggregated payloads, shaped like the sources that produced them
#[derive(Clone, Debug, PartialEq)]
pub enum Results<P> {
    Indexed(Vec<P>),
    Keyed(BTreeMap<String, P>),
}

impl<P> Results<P> {
    pub fn get(&self, position: &Position) -> Option<&P> {
        match (self, position) {
            (Self::Indexed(values), Position::Index(i)) => values.get(*i),
            (Self::Keyed(values), Position::Key(key)) => values.get(key),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(values) => values.len(),
            Self::Keyed(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_indexed(self) -> Option<Vec<P>> {
        match self {
            Self::Indexed(values) => Some(values),
            Self::Keyed(_) => None,
        }
    }

    pub fn into_keyed(self) -> Option<BTreeMap<String, P>> {
        match self {
            Self::Keyed(values) => Some(values),
            Self::Indexed(_) => None,
        }
    }
}

/// Results under construction; unfired positions are `None`
#[derive(Debug)]
pub(crate) enum Slots<P> {
    Indexed(Vec<Option<P>>),
    Keyed(BTreeMap<String, Option<P>>),
}

impl<P> Slots<P> {
    pub(crate) fn shaped_like<S>(sources: &Sources<S>) -> Self {
        match sources {
            Sources::Indexed(members) => Self::Indexed(members.iter().map(|_| None).collect()),
            Sources::Keyed(members) => {
                Self::Keyed(members.keys().map(|key| (key.clone(), None)).collect())
            }
        }
    }

    /// Store a payload; returns false if the position was already filled
    /// or does not belong to this collection
    pub(crate) fn fill(&mut self, position: &Position, payload: P) -> bool {
        let slot = match (self, position) {
            (Self::Indexed(slots), Position::Index(i)) => slots.get_mut(*i),
            (Self::Keyed(slots), Position::Key(key)) => slots.get_mut(key),
            _ => None,
        };
        match slot {
            Some(slot) if slot.is_none() => {
                *slot = Some(payload);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn pending(&self) -> Vec<Position> {
        match self {
            Self::Indexed(slots) => slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_none())
                .map(|(i, _)| Position::Index(i))
                .collect(),
            Self::Keyed(slots) => slots
                .iter()
                .filter(|(_, slot)| slot.is_none())
                .map(|(key, _)| Position::Key(key.clone()))
                .collect(),
        }
    }

    /// Take the results if every position is filled
    pub(crate) fn take_complete(&mut self) -> Option<Results<P>> {
        if !self.pending().is_empty() {
            return None;
        }
        match self {
            Self::Indexed(slots) => Some(Results::Indexed(
                std::mem::take(slots).into_iter().flatten().collect(),
            )),
            Self::Keyed(slots) => Some(Results::Keyed(
                std::mem::take(slots)
                    .into_iter()
                    .filter_map(|(key, slot)| slot.map(|value| (key, value)))
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
