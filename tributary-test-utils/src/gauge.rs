// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumentation for concurrent work items.
//!
//! Every tracked work item holds a [`GaugeGuard`] while it runs. A guard that
//! is dropped without [`GaugeGuard::finish`] counts as cancelled, which is what
//! happens to a future that gets aborted mid-flight.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct GaugeState {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    started: AtomicUsize,
    finished: AtomicUsize,
    cancelled: AtomicUsize,
}

/// Shared recorder of in-flight, peak, started, finished and cancelled work.
#[derive(Clone, Debug, Default)]
pub struct ConcurrencyGauge {
    state: Arc<GaugeState>,
}

impl ConcurrencyGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one work item as started.
    pub fn enter(&self) -> GaugeGuard {
        self.state.started.fetch_add(1, Ordering::SeqCst);
        let now = self.state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.peak.fetch_max(now, Ordering::SeqCst);
        GaugeGuard {
            state: Arc::clone(&self.state),
            finished: false,
        }
    }

    /// Run `work` under a guard, finishing it once `work` completes.
    ///
    /// If the returned future is dropped early the item counts as cancelled.
    pub async fn track<F: Future>(&self, work: F) -> F::Output {
        let guard = self.enter();
        let output = work.await;
        guard.finish();
        output
    }

    pub fn in_flight(&self) -> usize {
        self.state.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of work items observed running at once.
    pub fn peak(&self) -> usize {
        self.state.peak.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> usize {
        self.state.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.state.finished.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> usize {
        self.state.cancelled.load(Ordering::SeqCst)
    }
}

/// Held by a running work item; see [`ConcurrencyGauge::enter`].
#[derive(Debug)]
pub struct GaugeGuard {
    state: Arc<GaugeState>,
    finished: bool,
}

impl GaugeGuard {
    /// Record normal completion.
    pub fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for GaugeGuard {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.finished {
            self.state.finished.fetch_add(1, Ordering::SeqCst);
        } else {
            self.state.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }
}
