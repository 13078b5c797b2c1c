// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal emissions

use crate::collection::Results;
use crate::error::Failure;
use crate::event::EventName;

/// The one event an aggregator emits when it settles
#[derive(Debug, Clone, PartialEq)]
pub enum Emission<P> {
    /// Every source fired the target event
    Completed {
        event: EventName,
        results: Results<P>,
    },
    /// A source failed or an element could not be wired
    Failed {
        event: EventName,
        failure: Failure<P>,
    },
}

impl<P> Emission<P> {
    /// Name the emission is published under
    pub fn name(&self) -> &EventName {
        match self {
            Self::Completed { event, .. } | Self::Failed { event, .. } => event,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn results(&self) -> Option<&Results<P>> {
        match self {
            Self::Completed { results, .. } => Some(results),
            Self::Failed { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure<P>> {
        match self {
            Self::Failed { failure, .. } => Some(failure),
            Self::Completed { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<Results<P>, Failure<P>> {
        match self {
            Self::Completed { results, .. } => Ok(results),
            Self::Failed { failure, .. } => Err(failure),
        }
    }
}
