use std::collections::BTreeMap;

use crate::frame::{CompiledBlock, CompletedBurst, DeviceId, MessageFamily};

/// Latest compiled blocks per device.
/// Blocks are replaced wholesale on completion, never patched.
#[derive(Debug, Default)]
pub struct DeviceStore {
    family_a: BTreeMap<DeviceId, CompiledBlock>,
    family_b: BTreeMap<DeviceId, CompiledBlock>,
    /// did -> timestamp of the last family B completion
    completed_at: BTreeMap<DeviceId, f64>,
}

/// A device with both blocks on hand
#[derive(Debug, Clone, Copy)]
pub struct ReadyDevice<'a> {
    pub device: DeviceId,
    pub family_a: &'a CompiledBlock,
    pub family_b: &'a CompiledBlock,
    pub completed_at: f64,
}

impl DeviceStore {
    pub fn absorb(&mut self, burst: CompletedBurst) {
        match burst.family {
            MessageFamily::A => {
                self.family_a.insert(burst.device, burst.block);
            }
            MessageFamily::B => {
                // family B closes a battery's reporting round
                self.family_b.insert(burst.device, burst.block);
                self.completed_at.insert(burst.device, burst.completed_at);
            }
        }
    }

    /// Devices present in both block maps, ascending by id rather than
    /// in completion order
    pub fn ready(&self) -> impl Iterator<Item = ReadyDevice<'_>> {
        self.family_a.iter().filter_map(|(did, family_a)| {
            Some(ReadyDevice {
                device: *did,
                family_a,
                family_b: self.family_b.get(did)?,
                completed_at: *self.completed_at.get(did)?,
            })
        })
    }

    #[cfg(test)]
    pub fn block(&self, device: DeviceId, family: MessageFamily) -> Option<&CompiledBlock> {
        match family {
            MessageFamily::A => self.family_a.get(&device),
            MessageFamily::B => self.family_b.get(&device),
        }
    }

    #[cfg(test)]
    pub fn completed_at(&self, device: DeviceId) -> Option<f64> {
        self.completed_at.get(&device).copied()
    }
}
