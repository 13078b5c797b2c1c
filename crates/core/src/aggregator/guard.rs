// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared aggregator state and the emit-once guard

use super::Payload;
use crate::collection::{Position, Slots};
use crate::error::Failure;
use crate::event::EventName;
use crate::events::{Emission, EventBus};
use std::sync::Mutex;
use tokio::sync::watch;

/// Lifecycle of an aggregator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Waiting for sources
    Pending,
    /// Terminal event emitted; nothing else will be
    Settled,
}

struct Progress<P> {
    slots: Slots<P>,
    completed: usize,
    expected: usize,
    state: State,
}

/// State reachable from every source listener
pub(crate) struct Shared<P> {
    pub(crate) target: EventName,
    pub(crate) error_event: EventName,
    progress: Mutex<Progress<P>>,
    pub(crate) bus: EventBus<P>,
    pub(crate) outcome: watch::Sender<Option<Emission<P>>>,
    /// Report waiting for first use when no runtime could run it
    deferred: Mutex<Option<Failure<P>>>,
}

impl<P: Payload> Shared<P> {
    pub(crate) fn new(
        target: EventName,
        error_event: EventName,
        slots: Slots<P>,
        expected: usize,
    ) -> Self {
        let (outcome, _) = watch::channel(None);
        Self {
            target,
            error_event,
            progress: Mutex::new(Progress {
                slots,
                completed: 0,
                expected,
                state: State::Pending,
            }),
            bus: EventBus::new(),
            outcome,
            deferred: Mutex::new(None),
        }
    }

    /// A source fired the target event
    pub(crate) fn record(&self, position: Position, payload: P) {
        let mut progress = self.progress.lock().unwrap_or_else(|e| e.into_inner());
        if progress.state == State::Settled {
            tracing::debug!(%position, "already settled, ignoring payload");
            return;
        }
        if !progress.slots.fill(&position, payload) {
            tracing::debug!(%position, "position already filled, ignoring payload");
            return;
        }

        progress.completed += 1;
        tracing::debug!(
            %position,
            completed = progress.completed,
            expected = progress.expected,
            "source fired"
        );
        if progress.completed < progress.expected {
            return;
        }

        match progress.slots.take_complete() {
            Some(results) => {
                let emission = Emission::Completed {
                    event: self.target.clone(),
                    results,
                };
                self.settle(&mut progress, emission);
            }
            None => tracing::error!(
                completed = progress.completed,
                "completion count reached but positions are still empty"
            ),
        }
    }

    /// A source errored or an element could not be wired
    pub(crate) fn fail(&self, failure: Failure<P>) {
        self.emit_once(Emission::Failed {
            event: self.error_event.clone(),
            failure,
        });
    }

    /// Hold `failure` until the aggregator is first used
    pub(crate) fn defer(&self, failure: Failure<P>) {
        *self.deferred.lock().unwrap_or_else(|e| e.into_inner()) = Some(failure);
    }

    /// Run a held report, if any. Dropped by the guard if a source
    /// settled the aggregator in the meantime.
    pub(crate) fn run_deferred(&self) {
        let failure = self
            .deferred
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(failure) = failure {
            tracing::debug!("running held non-source report");
            self.fail(failure);
        }
    }

    /// Emit `emission` unless something already settled the aggregator.
    /// Returns whether it was emitted.
    pub(crate) fn emit_once(&self, emission: Emission<P>) -> bool {
        let mut progress = self.progress.lock().unwrap_or_else(|e| e.into_inner());
        if progress.state == State::Settled {
            tracing::debug!(event = %emission.name(), "already settled, dropping emission");
            return false;
        }
        self.settle(&mut progress, emission);
        true
    }

    // Runs under the progress lock so no subscriber can attach between
    // publishing and closing the bus.
    fn settle(&self, progress: &mut Progress<P>, emission: Emission<P>) {
        progress.state = State::Settled;

        let delivered = self.bus.publish(&emission);
        self.bus.close();
        match &emission {
            Emission::Completed { event, .. } => {
                tracing::info!(%event, delivered, "all sources fired")
            }
            Emission::Failed { event, failure } => {
                tracing::warn!(%event, %failure, delivered, "aggregation failed")
            }
        }
        self.outcome.send_replace(Some(emission));
    }

    pub(crate) fn state(&self) -> State {
        self.progress
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .state
    }

    pub(crate) fn completed(&self) -> usize {
        self.progress
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .completed
    }

    pub(crate) fn expected(&self) -> usize {
        self.progress
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .expected
    }

    pub(crate) fn pending(&self) -> Vec<Position> {
        self.progress
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .slots
            .pending()
    }
}
