// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscribing the aggregator to its sources

use super::guard::Shared;
use super::Payload;
use crate::collection::Position;
use crate::config::NonSourcePolicy;
use crate::error::{Failure, NonSourceElement};
use crate::source::{EventSource, Member};
use std::collections::BTreeMap;
use std::sync::Arc;

pub(super) fn wire_indexed<S, P>(
    shared: &Arc<Shared<P>>,
    members: Vec<Member<S>>,
    policy: NonSourcePolicy,
) where
    S: EventSource<Payload = P>,
    P: Payload,
{
    let mut rejected = Vec::new();
    for (index, member) in members.into_iter().enumerate() {
        let wired = attach(shared, Position::Index(index), member, &mut rejected);
        if !wired && policy == NonSourcePolicy::StopWiring {
            break;
        }
    }
    report_rejected(shared, rejected);
}

pub(super) fn wire_keyed<S, P>(
    shared: &Arc<Shared<P>>,
    members: BTreeMap<String, Member<S>>,
    policy: NonSourcePolicy,
) where
    S: EventSource<Payload = P>,
    P: Payload,
{
    let mut rejected = Vec::new();
    for (key, member) in members {
        let wired = attach(shared, Position::Key(key), member, &mut rejected);
        if !wired && policy == NonSourcePolicy::StopWiring {
            break;
        }
    }
    report_rejected(shared, rejected);
}

/// Subscribe once to the error and target events of one member.
/// Non-sources are pushed onto `rejected` instead.
fn attach<S, P>(
    shared: &Arc<Shared<P>>,
    position: Position,
    member: Member<S>,
    rejected: &mut Vec<NonSourceElement>,
) -> bool
where
    S: EventSource<Payload = P>,
    P: Payload,
{
    let source = match member.into_source() {
        Ok(source) => source,
        Err(opaque) => {
            tracing::warn!(%position, item = %opaque, "not an event source");
            rejected.push(NonSourceElement {
                position,
                description: opaque.description().to_string(),
            });
            return false;
        }
    };

    let on_error = Arc::clone(shared);
    source.once(
        &shared.error_event,
        Box::new(move |payload| on_error.fail(Failure::SourceError(payload))),
    );

    let on_target = Arc::clone(shared);
    tracing::trace!(%position, "wired");
    source.once(
        &shared.target,
        Box::new(move |payload| on_target.record(position, payload)),
    );
    true
}

/// Report non-source elements on the next turn of the runtime, so that
/// callers can subscribe after construction without missing the failure.
/// Without a runtime the report waits for the aggregator's first use.
fn report_rejected<P: Payload>(shared: &Arc<Shared<P>>, rejected: Vec<NonSourceElement>) {
    if rejected.is_empty() {
        return;
    }

    let failure = Failure::NonSourceElements(rejected);
    let shared = Arc::clone(shared);
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move { shared.fail(failure) });
        }
        Err(_) => {
            tracing::warn!("no tokio runtime to defer onto, holding report until first use");
            shared.defer(failure);
        }
    }
}
