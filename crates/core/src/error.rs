// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for building and running an aggregator

use crate::collection::Position;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid arguments, rejected before any subscription is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid type: expected an indexed or keyed collection of event sources, found {found}")]
    InvalidInputKind { found: &'static str },
    #[error("expected a non-empty collection of event sources")]
    EmptyCollection,
    #[error("no event to listen to: the event name must be a non-empty string or a symbol")]
    MissingEventName,
}

/// An element of the input collection that cannot be subscribed to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item at {position} is not an event source: {description}")]
pub struct NonSourceElement {
    pub position: Position,
    pub description: String,
}

/// Why an aggregator settled on its error event
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure<P> {
    /// Payload of a source's error event, passed through untouched
    #[error("source error: {0:?}")]
    SourceError(P),
    #[error("{}", join_elements(.0))]
    NonSourceElements(Vec<NonSourceElement>),
}

impl<P> Failure<P> {
    pub fn source_error(&self) -> Option<&P> {
        match self {
            Self::SourceError(payload) => Some(payload),
            Self::NonSourceElements(_) => None,
        }
    }

    pub fn non_source_elements(&self) -> &[NonSourceElement] {
        match self {
            Self::NonSourceElements(elements) => elements,
            Self::SourceError(_) => &[],
        }
    }
}

fn join_elements(elements: &[NonSourceElement]) -> String {
    elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors loading an [`AggregatorConfig`](crate::AggregatorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
