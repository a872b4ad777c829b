use std::{
    io,
    ops::ControlFlow,
    sync::Arc,
    time::{Duration, SystemTime},
};

use jiff::Timestamp;
use serde::Deserialize;
use socketcan::{CanFrame, EmbeddedFrame, Frame as _, SocketOptions, tokio::CanSocket};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Level, error, info, span, trace};

use crate::{collector::FrameListener, frame::Frame};

// errno values the kernel reports while a CAN interface is down
const ENODEV: i32 = 19;
const ENETDOWN: i32 = 100;

const NETWORK_DOWN_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusInterface {
    #[default]
    SocketCan,
}

#[derive(Error, Debug)]
pub enum BusError {
    #[error("opening CAN channel `{0}`: {1}")]
    Open(String, io::Error),
    #[error("CAN network down: {0}")]
    NetworkDown(io::Error),
    #[error("reading CAN frame: {0}")]
    Read(io::Error),
}

impl From<io::Error> for BusError {
    fn from(value: io::Error) -> Self {
        match value.raw_os_error() {
            Some(ENETDOWN) | Some(ENODEV) => Self::NetworkDown(value),
            _ => Self::Read(value),
        }
    }
}

/// Read frames off `channel` into `listener` until cancelled.
///
/// An interface going down is logged and waited out, the aggregation state
/// is left alone and heals on the next clean burst. Any other read error
/// ends the task.
pub async fn listen(
    channel: String,
    listener: Arc<dyn FrameListener>,
    cancel: CancellationToken,
) -> Result<(), BusError> {
    let span = span!(Level::INFO, "Bus SocketCAN", channel = %channel);
    read_loop(channel, listener, cancel).instrument(span).await
}

async fn read_loop(
    channel: String,
    listener: Arc<dyn FrameListener>,
    cancel: CancellationToken,
) -> Result<(), BusError> {
    let socket = CanSocket::open(&channel).map_err(|e| BusError::Open(channel.clone(), e))?;
    // kernel receive time, not the time this task got scheduled
    socket
        .set_recv_timestamp(true)
        .map_err(|e| BusError::Open(channel.clone(), e))?;
    info!("listening");

    loop {
        let res = tokio::select! {
            _ = cancel.cancelled() => break,
            res = socket.read_frame_with_timestamp() => res,
        };

        match dispatch(res, listener.as_ref()) {
            ControlFlow::Continue(None) => {}
            ControlFlow::Continue(Some(backoff)) => {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(backoff) => {}
                }
            }
            ControlFlow::Break(err) => {
                error!("{err}");
                return Err(err);
            }
        }
    }

    info!("stopped");
    Ok(())
}

/// Hand one read result to `listener`.
/// A downed interface continues after the returned back-off, any other
/// error breaks.
fn dispatch(
    res: io::Result<(CanFrame, SystemTime)>,
    listener: &dyn FrameListener,
) -> ControlFlow<BusError, Option<Duration>> {
    match res.map_err(BusError::from) {
        Ok((can_frame, received_at)) => {
            if let Some(frame) = to_frame(&can_frame, unix_seconds(received_at)) {
                listener.on_frame(frame);
            }
            ControlFlow::Continue(None)
        }
        Err(err @ BusError::NetworkDown(_)) => {
            listener.on_error(&err);
            ControlFlow::Continue(Some(NETWORK_DOWN_BACKOFF))
        }
        Err(err) => ControlFlow::Break(err),
    }
}

/// Only 8 byte data frames belong to the battery protocol
pub fn to_frame(can_frame: &CanFrame, timestamp: f64) -> Option<Frame> {
    let CanFrame::Data(data) = can_frame else {
        trace!("ignoring non-data frame");
        return None;
    };
    let Ok(payload) = data.data().try_into() else {
        trace!("ignoring {:#X} with {} byte payload", data.raw_id(), data.data().len());
        return None;
    };
    Some(Frame::new(data.raw_id(), payload, timestamp))
}

fn unix_seconds(at: SystemTime) -> f64 {
    let ts = Timestamp::try_from(at).unwrap_or_else(|_| Timestamp::now());
    ts.as_microsecond() as f64 / 1_000_000.0
}
