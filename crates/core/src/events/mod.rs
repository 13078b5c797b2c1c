// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal emissions and their delivery
//!
//! This module provides:
//! - `Emission` - The single terminal event an aggregator publishes
//! - `EventBus` - Route emissions to subscribers by event name
//! - `Subscription` - Which event name a subscriber listens for

mod bus;
mod emission;
mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use emission::Emission;
pub use subscription::{SubscriberId, Subscription};
