// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event aggregation
//!
//! An [`EventAggregator`] subscribes once to a target event and to the error
//! event on every source of a collection. When the last source fires the
//! target it emits the target event itself, carrying every payload at its
//! source's index or key. When any source errors first, it emits the error
//! event instead. Exactly one of the two is ever emitted.
//!
//! ```no_run
//! # async fn demo() -> Result<(), fanin_core::BuildError> {
//! use fanin_core::{EventAggregator, EventSource, Emitter};
//!
//! let db = Emitter::new();
//! let cache = Emitter::new();
//! let ready = EventAggregator::indexed([db.clone(), cache.clone()], "ready")?;
//!
//! db.emit(&"ready".into(), "db up");
//! cache.emit(&"ready".into(), "cache warm");
//!
//! let results = ready.settled().await;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```

mod guard;
mod wiring;

pub use guard::State;

use crate::collection::{Item, Position, Results, Slots, Sources};
use crate::config::AggregatorConfig;
use crate::error::{BuildError, Failure};
use crate::event::EventName;
use crate::events::{EventReceiver, Subscription};
use crate::source::EventSource;
use guard::Shared;
use std::fmt;
use std::sync::Arc;

/// Bounds every source payload must satisfy to be aggregated
pub trait Payload: Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Payload for T where T: Clone + fmt::Debug + Send + Sync + 'static {}

/// Waits for every source to fire the target event once
pub struct EventAggregator<P> {
    shared: Arc<Shared<P>>,
}

impl<P: Payload> EventAggregator<P> {
    pub fn builder<S>() -> AggregatorBuilder<S>
    where
        S: EventSource<Payload = P>,
    {
        AggregatorBuilder::new()
    }

    /// Aggregate a sequence of sources; results keep their order
    pub fn indexed<S>(
        sources: impl IntoIterator<Item = S>,
        event: impl Into<EventName>,
    ) -> Result<Self, BuildError>
    where
        S: EventSource<Payload = P>,
    {
        Self::builder()
            .sources(Sources::indexed(sources))
            .event(event)
            .build()
    }

    /// Aggregate named sources; results keep their keys
    pub fn keyed<K, S>(
        sources: impl IntoIterator<Item = (K, S)>,
        event: impl Into<EventName>,
    ) -> Result<Self, BuildError>
    where
        K: Into<String>,
        S: EventSource<Payload = P>,
    {
        Self::builder()
            .sources(Sources::keyed(sources))
            .event(event)
            .build()
    }

    fn wire<S>(sources: Sources<S>, target: EventName, config: &AggregatorConfig) -> Self
    where
        S: EventSource<Payload = P>,
    {
        let expected = sources.len();
        let shared = Arc::new(Shared::new(
            target,
            config.error_event(),
            Slots::shaped_like(&sources),
            expected,
        ));

        let span = tracing::info_span!("aggregator.wire", event = %shared.target, expected);
        let _guard = span.enter();

        match sources {
            Sources::Indexed(members) => {
                tracing::debug!(mode = "indexed", "wiring sources");
                wiring::wire_indexed(&shared, members, config.non_source)
            }
            Sources::Keyed(members) => {
                tracing::debug!(mode = "keyed", "wiring sources");
                wiring::wire_keyed(&shared, members, config.non_source)
            }
        }

        Self { shared }
    }

    /// Listen for an emission by name: the target event or the error event.
    /// After settlement the receiver is already closed. A non-source report
    /// held for lack of a runtime runs once this receiver is registered.
    pub fn subscribe(&self, event: impl Into<EventName>) -> EventReceiver<P> {
        let rx = self.shared.bus.subscribe(Subscription::to(event));
        self.shared.run_deferred();
        rx
    }

    /// Listen for the terminal emission whatever its name
    pub fn subscribe_all(&self) -> EventReceiver<P> {
        let rx = self.shared.bus.subscribe_all();
        self.shared.run_deferred();
        rx
    }

    /// Wait for the terminal outcome. Resolves immediately when already
    /// settled and never resolves if no source ever fires or errors.
    pub async fn settled(&self) -> Result<Results<P>, Failure<P>> {
        self.shared.run_deferred();
        let mut outcome = self.shared.outcome.subscribe();
        loop {
            let current = outcome.borrow_and_update().clone();
            if let Some(emission) = current {
                return emission.into_result();
            }
            // The sender lives in `self.shared`, so this only fails if the
            // aggregator is gone; there is nothing left to wait for.
            if outcome.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }

    /// The terminal outcome, if settled
    pub fn outcome(&self) -> Option<Result<Results<P>, Failure<P>>> {
        self.shared.run_deferred();
        self.shared
            .outcome
            .borrow()
            .clone()
            .map(|emission| emission.into_result())
    }

    pub fn state(&self) -> State {
        self.shared.run_deferred();
        self.shared.state()
    }

    pub fn is_settled(&self) -> bool {
        self.state() == State::Settled
    }

    /// Number of sources that have fired the target event
    pub fn completed_count(&self) -> usize {
        self.shared.completed()
    }

    pub fn expected_count(&self) -> usize {
        self.shared.expected()
    }

    /// Positions whose source has not fired the target event yet
    pub fn pending_positions(&self) -> Vec<Position> {
        self.shared.pending()
    }

    pub fn target_event(&self) -> &EventName {
        &self.shared.target
    }

    pub fn error_event(&self) -> &EventName {
        &self.shared.error_event
    }
}

impl<P> fmt::Debug for EventAggregator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventAggregator")
            .field("target", &self.shared.target)
            .field("error_event", &self.shared.error_event)
            .finish_non_exhaustive()
    }
}

/// Validates arguments and wires an [`EventAggregator`]
pub struct AggregatorBuilder<S> {
    sources: Option<Result<Sources<S>, BuildError>>,
    event: Option<EventName>,
    config: AggregatorConfig,
}

impl<S> AggregatorBuilder<S>
where
    S: EventSource,
    S::Payload: Payload,
{
    pub fn new() -> Self {
        Self {
            sources: None,
            event: None,
            config: AggregatorConfig::default(),
        }
    }

    /// Untyped input; anything but a list or a map is rejected on build
    pub fn input(mut self, item: Item<S>) -> Self {
        self.sources = Some(Sources::try_from(item));
        self
    }

    pub fn sources(mut self, sources: Sources<S>) -> Self {
        self.sources = Some(Ok(sources));
        self
    }

    pub fn event(mut self, event: impl Into<EventName>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and subscribe to every source.
    /// Fails before any subscription is made.
    pub fn build(self) -> Result<EventAggregator<S::Payload>, BuildError> {
        let sources = self
            .sources
            .unwrap_or(Err(BuildError::InvalidInputKind { found: "nothing" }))?;
        if sources.is_empty() {
            return Err(BuildError::EmptyCollection);
        }
        let event = self
            .event
            .filter(EventName::is_valid)
            .ok_or(BuildError::MissingEventName)?;

        Ok(EventAggregator::wire(sources, event, &self.config))
    }
}

impl<S> Default for AggregatorBuilder<S>
where
    S: EventSource,
    S::Payload: Payload,
{
    fn default() -> Self {
        Self::new()
    }
}
