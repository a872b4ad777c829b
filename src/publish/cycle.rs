use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Level, debug, error, info, span, warn};

use super::{PendingRecord, PublishGate, RecordSink, TimedRecord, TransportError};
use crate::{
    collector::Collector,
    decode::{FormatError, decode_record},
    frame::DeviceId,
    logging,
};

pub const PUBLISH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Default)]
pub struct CycleReport {
    pub published: Vec<DeviceId>,
    /// unchanged since the last delivery
    pub suppressed: Vec<DeviceId>,
    pub rejected: Vec<(DeviceId, FormatError)>,
}

/// Drives the periodic publish, sole owner of the [PublishGate]
pub struct CycleRunner<S> {
    collector: Collector,
    gate: PublishGate,
    sink: S,
    profile: bool,
}

impl<S: RecordSink> CycleRunner<S> {
    pub fn new(collector: Collector, sink: S) -> Self {
        Self {
            collector,
            gate: PublishGate::default(),
            sink,
            profile: false,
        }
    }

    /// Log process memory after every cycle
    pub fn with_profiling(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    /// One pass: select due devices, decode, hand the batch to the sink.
    /// The gate only advances when the sink accepts the batch.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, TransportError> {
        let selection = self.collector.with_store(|store| self.gate.select(store));

        let mut report = CycleReport::default();
        for (device, last) in selection.suppressed {
            warn!("battery {device} data from {last} already published, not republishing");
            report.suppressed.push(device);
        }

        let batch = build_batch(selection.due);
        report.rejected = batch.rejected;
        if batch.records.is_empty() {
            debug!("nothing new to publish");
            return Ok(report);
        }

        debug!("publishing {} records", batch.records.len());
        self.sink.publish(&batch.records).await?;

        report.published = batch.delivered.iter().map(|(did, _)| *did).collect();
        self.gate.commit(batch.delivered);
        Ok(report)
    }

    /// Publish every `period` until cancelled.
    /// The first cycle runs one full period after start, a cycle already
    /// underway when cancellation arrives runs to completion.
    pub async fn run(self, period: Duration, cancel: CancellationToken) {
        let span = span!(Level::INFO, "Publisher");
        self.run_loop(period, cancel).instrument(span).await
    }

    async fn run_loop(mut self, period: Duration, cancel: CancellationToken) {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("publishing every {period:?}");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            match self.run_cycle().await {
                Ok(report) => info!(
                    "cycle done: {} published, {} unchanged, {} rejected",
                    report.published.len(),
                    report.suppressed.len(),
                    report.rejected.len()
                ),
                Err(e) => error!("publish failed, batch will be retried next cycle: {e}"),
            }

            if self.profile {
                logging::log_memory_usage("after publish cycle");
            }
        }

        info!("stopped");
    }
}

#[derive(Debug, Default)]
struct Batch {
    records: Vec<TimedRecord>,
    /// did, completion timestamp for every record in `records`
    delivered: Vec<(DeviceId, f64)>,
    rejected: Vec<(DeviceId, FormatError)>,
}

/// A device that fails to decode is left out, the rest still go
fn build_batch(due: Vec<PendingRecord>) -> Batch {
    let mut batch = Batch::default();
    for pending in due {
        match decode_record(pending.family_a.as_bytes(), pending.family_b.as_bytes()) {
            Ok(data) => {
                batch.records.push(TimedRecord {
                    data,
                    time: to_unix_seconds(pending.completed_at),
                });
                batch.delivered.push((pending.device, pending.completed_at));
            }
            Err(e) => {
                warn!("battery {}: {e}", pending.device);
                batch.rejected.push((pending.device, e));
            }
        }
    }
    batch
}

fn to_unix_seconds(ts: f64) -> i64 {
    ts.round_ties_even() as i64
}
