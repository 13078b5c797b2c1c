// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fanin-core: wait for a collection of event sources
//!
//! This crate provides:
//! - `EventAggregator` - Emits one combined event once every source fired
//! - `EventSource` trait and the in-process `Emitter`
//! - Indexed and keyed collections, with untyped input classified at the boundary
//! - TOML-loadable `AggregatorConfig`

pub mod aggregator;
pub mod collection;
pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod source;

// Re-exports
pub use aggregator::{AggregatorBuilder, EventAggregator, Payload, State};
pub use collection::{Item, Position, Results, Sources};
pub use config::{AggregatorConfig, NonSourcePolicy};
pub use error::{BuildError, ConfigError, Failure, NonSourceElement};
pub use event::{EventName, Symbol, ERROR_EVENT};
pub use events::{Emission, EventReceiver};
pub use source::{Emitter, EventSource, Listener, Member, Opaque, TracedSource};
