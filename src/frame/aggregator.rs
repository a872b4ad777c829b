use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, trace};

use super::{
    Frame, START_MARKER,
    ids::{DeviceId, GroupKey, MessageFamily, classify},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionPolicy {
    /// Every checked frame must carry the marker of its position.
    /// Loss, duplication and misordering keep the burst open.
    #[default]
    Strict,
    /// Sort by marker once the frame count is reached, no position check
    CountOnly,
}

impl CompletionPolicy {
    fn is_complete(self, family: MessageFamily, frames: &[Frame]) -> bool {
        if frames.len() != family.frame_count() {
            return false;
        }
        match self {
            Self::CountOnly => true,
            Self::Strict => frames
                .iter()
                .take(family.checked_frames())
                .zip(START_MARKER..)
                .all(|(frame, expected)| frame.marker() == expected),
        }
    }
}

/// Usable payload bytes of one completed burst, in sequence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBlock(Vec<u8>);

impl CompiledBlock {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CompiledBlock {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedBurst {
    pub device: DeviceId,
    pub family: MessageFamily,
    pub block: CompiledBlock,
    /// timestamp of the frame that completed the burst
    pub completed_at: f64,
}

/// Per group key burst collection.
///
/// A start marker always opens a fresh burst, abandoning whatever was
/// collected before for that key. Continuation frames with no open burst
/// (e.g. right after startup) can't be attributed and are dropped.
#[derive(Debug, Default)]
pub struct FrameAggregator {
    policy: CompletionPolicy,
    /// group key -> frames of the burst in progress
    slots: HashMap<GroupKey, Vec<Frame>>,
}

impl FrameAggregator {
    pub fn new(policy: CompletionPolicy) -> Self {
        Self {
            policy,
            slots: HashMap::new(),
        }
    }

    pub fn push(&mut self, frame: Frame) -> Option<CompletedBurst> {
        let class = classify(frame.identifier);
        let family = class.family?;
        let completed_at = frame.timestamp;

        if frame.is_start() {
            let mut frames = Vec::with_capacity(family.frame_count());
            frames.push(frame);
            if let Some(abandoned) = self.slots.insert(class.key, frames) {
                debug!(
                    "restarting burst {:#X}, abandoned {} frames",
                    class.key,
                    abandoned.len()
                );
            }
        } else {
            match self.slots.get_mut(&class.key) {
                Some(frames) => frames.push(frame),
                None => {
                    trace!(
                        "no burst open for {:#X}, dropping marker {:#04X}",
                        class.key,
                        frame.marker()
                    );
                    return None;
                }
            }
        }

        let frames = self.slots.get(&class.key)?;
        if !self.policy.is_complete(family, frames) {
            if frames.len() == family.frame_count() {
                debug!("burst {:#X} out of sequence, waiting for restart", class.key);
            }
            return None;
        }

        let mut frames = self.slots.remove(&class.key)?;
        if self.policy == CompletionPolicy::CountOnly {
            frames.sort_by_key(Frame::marker);
        }

        let block = frames
            .iter()
            .flat_map(|f| f.usable().iter().copied())
            .collect::<Vec<_>>();

        debug!("burst {:#X} complete ({} bytes)", class.key, block.len());

        Some(CompletedBurst {
            device: class.device,
            family,
            block: CompiledBlock(block),
            completed_at,
        })
    }

    #[cfg(test)]
    pub fn in_progress(&self, key: GroupKey) -> Option<usize> {
        self.slots.get(&key).map(Vec::len)
    }
}
