pub mod cycle;
pub mod mqtt;
pub mod sink;

pub use cycle::{CycleReport, CycleRunner, PUBLISH_INTERVAL};
pub use sink::{RecordSink, TransportError};

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    decode::BatteryData,
    frame::{CompiledBlock, DeviceId},
    store::DeviceStore,
};

/// Wire record: decoded battery plus its completion time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedRecord {
    #[serde(flatten)]
    pub data: BatteryData,
    /// unix seconds
    pub time: i64,
}

/// Blocks copied out of the store so decoding runs outside the lock
#[derive(Debug, Clone)]
pub struct PendingRecord {
    pub device: DeviceId,
    pub family_a: CompiledBlock,
    pub family_b: CompiledBlock,
    pub completed_at: f64,
}

#[derive(Debug, Default)]
pub struct Selection {
    pub due: Vec<PendingRecord>,
    /// did, last published timestamp
    pub suppressed: Vec<(DeviceId, f64)>,
}

/// Tracks what has gone out so unchanged data is never re-sent
#[derive(Debug, Default)]
pub struct PublishGate {
    /// did -> completion timestamp of the last delivered record
    published: HashMap<DeviceId, f64>,
}

impl PublishGate {
    pub fn is_due(&self, device: DeviceId, completed_at: f64) -> bool {
        self.published
            .get(&device)
            .is_none_or(|last| completed_at > *last)
    }

    pub fn select(&self, store: &DeviceStore) -> Selection {
        let mut selection = Selection::default();
        for ready in store.ready() {
            if self.is_due(ready.device, ready.completed_at) {
                selection.due.push(PendingRecord {
                    device: ready.device,
                    family_a: ready.family_a.clone(),
                    family_b: ready.family_b.clone(),
                    completed_at: ready.completed_at,
                });
            } else if let Some(last) = self.last_published(ready.device) {
                selection.suppressed.push((ready.device, last));
            }
        }
        selection
    }

    /// Only call once the sink has accepted the batch
    pub fn commit(&mut self, delivered: impl IntoIterator<Item = (DeviceId, f64)>) {
        self.published.extend(delivered);
    }

    pub fn last_published(&self, device: DeviceId) -> Option<f64> {
        self.published.get(&device).copied()
    }
}
