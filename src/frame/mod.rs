pub mod aggregator;
pub mod ids;

pub use aggregator::{CompiledBlock, CompletedBurst, CompletionPolicy, FrameAggregator};
pub use ids::{DeviceId, FrameClass, GroupKey, MessageFamily};

pub const PAYLOAD_LEN: usize = 8;

/// Payload bytes after the sequence marker
pub const USABLE_BYTES: usize = PAYLOAD_LEN - 1;

/// Sequence marker opening every burst
pub const START_MARKER: u8 = 0x01;

/// One fixed-size frame off the bus. Immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub identifier: u32,
    pub payload: [u8; PAYLOAD_LEN],
    /// unix seconds
    pub timestamp: f64,
}

impl Frame {
    pub fn new(identifier: u32, payload: [u8; PAYLOAD_LEN], timestamp: f64) -> Self {
        Self {
            identifier,
            payload,
            timestamp,
        }
    }

    pub fn marker(&self) -> u8 {
        self.payload[0]
    }

    pub fn usable(&self) -> &[u8] {
        &self.payload[1..]
    }

    pub fn is_start(&self) -> bool {
        self.marker() == START_MARKER
    }
}
