// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Property tests: results depend on positions, never on firing order

use fanin_core::{Emitter, EventAggregator, EventSource, Failure, Results};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn firing_orders() -> impl Strategy<Value = Vec<usize>> {
    (1..12usize).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #[test]
    fn indexed_results_keep_index_order(order in firing_orders()) {
        let sources: Vec<Emitter<usize>> = order.iter().map(|_| Emitter::new()).collect();
        let aggregator = EventAggregator::indexed(sources.clone(), "done").unwrap();
        let mut rx = aggregator.subscribe("done");

        for (fired, &i) in order.iter().enumerate() {
            prop_assert!(!aggregator.is_settled());
            prop_assert_eq!(aggregator.completed_count(), fired);
            sources[i].emit(&"done".into(), i * 100);
        }

        let results = rx.try_recv().unwrap().into_result().unwrap();
        let expected: Vec<usize> = (0..order.len()).map(|i| i * 100).collect();
        prop_assert_eq!(results, Results::Indexed(expected));
        prop_assert!(rx.try_recv().is_err());
    }

    #[test]
    fn keyed_results_keep_keys(order in firing_orders()) {
        let sources: BTreeMap<String, Emitter<usize>> = order
            .iter()
            .map(|i| (format!("source-{}", i), Emitter::new()))
            .collect();
        let aggregator = EventAggregator::keyed(sources.clone(), "done").unwrap();

        for &i in &order {
            sources[&format!("source-{}", i)].emit(&"done".into(), i);
        }

        let results = aggregator.outcome().unwrap().unwrap().into_keyed().unwrap();
        prop_assert_eq!(results.len(), order.len());
        for (key, value) in results {
            prop_assert_eq!(key, format!("source-{}", value));
        }
    }

    #[test]
    fn error_at_any_point_settles_with_that_error(
        order in firing_orders(),
        fail_after in 0..12usize,
    ) {
        let sources: Vec<Emitter<usize>> = order.iter().map(|_| Emitter::new()).collect();
        let aggregator = EventAggregator::indexed(sources.clone(), "done").unwrap();
        let fail_after = fail_after % order.len();

        for (fired, &i) in order.iter().enumerate() {
            if fired == fail_after {
                sources[i].emit(&"error".into(), usize::MAX);
            }
            sources[i].emit(&"done".into(), i);
        }

        prop_assert_eq!(
            aggregator.outcome().unwrap(),
            Err(Failure::SourceError(usize::MAX))
        );
        prop_assert_eq!(aggregator.completed_count(), fail_after);
    }
}
