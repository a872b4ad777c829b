use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::{
    bus::BusError,
    frame::{CompletionPolicy, Frame, FrameAggregator},
    store::DeviceStore,
};

/// Receives frames from a bus source, from any thread or task
pub trait FrameListener: Send + Sync {
    fn on_frame(&self, frame: Frame);

    fn on_error(&self, err: &BusError) {
        error!("frame source error: {err}");
    }
}

/// Aggregation slots and the device store share one lock
#[derive(Debug)]
struct Ingest {
    aggregator: FrameAggregator,
    store: DeviceStore,
}

#[derive(Debug, Clone)]
pub struct Collector {
    ingest: Arc<Mutex<Ingest>>,
}

impl Collector {
    pub fn new(policy: CompletionPolicy) -> Self {
        Self {
            ingest: Arc::new(Mutex::new(Ingest {
                aggregator: FrameAggregator::new(policy),
                store: DeviceStore::default(),
            })),
        }
    }

    /// Run `f` against the store while holding the ingestion lock
    pub fn with_store<R>(&self, f: impl FnOnce(&DeviceStore) -> R) -> R {
        f(&self.lock().store)
    }

    // the maps stay consistent even if a holder panicked mid-frame,
    // the next start marker heals any half-collected burst
    fn lock(&self) -> MutexGuard<'_, Ingest> {
        self.ingest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrameListener for Collector {
    fn on_frame(&self, frame: Frame) {
        let mut ingest = self.lock();
        if let Some(burst) = ingest.aggregator.push(frame) {
            debug!(
                "battery {} {} burst compiled at {}",
                burst.device, burst.family, burst.completed_at
            );
            ingest.store.absorb(burst);
        }
    }
}
