use std::fmt;

use serde::Serialize;

/// Bucket for one burst. The full identifier, so two devices never collide.
pub type GroupKey = u32;

/// Wiring position on the bus (low hex digit of the identifier).
/// Not a stable identity: reordering the batteries renumbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DeviceId(pub u8);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageFamily {
    /// 0x10X, general telemetry
    A,
    /// 0x60X, cell voltages. Last burst of a battery's reporting round.
    B,
}

impl MessageFamily {
    pub const fn discriminator(self) -> u32 {
        match self {
            Self::A => 0x10,
            Self::B => 0x60,
        }
    }

    pub const fn frame_count(self) -> usize {
        match self {
            Self::A => 11,
            Self::B => 7,
        }
    }

    /// How many leading frames carry a checkable sequence marker.
    /// Family B's last frame reports 0x11, which follows no known rule.
    pub const fn checked_frames(self) -> usize {
        match self {
            Self::A => 11,
            Self::B => 6,
        }
    }

    /// Compiled block length once a burst completes
    pub const fn block_len(self) -> usize {
        self.frame_count() * super::USABLE_BYTES
    }

    fn from_discriminator(d: u32) -> Option<Self> {
        match d {
            0x10 => Some(Self::A),
            0x60 => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for MessageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}X", self.discriminator())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClass {
    pub key: GroupKey,
    pub device: DeviceId,
    /// `None` for bus traffic outside the two known families
    pub family: Option<MessageFamily>,
}

/// e.g. 0x101 -> battery 1 family A, 0x60D -> battery 13 family B
pub fn classify(identifier: u32) -> FrameClass {
    FrameClass {
        key: identifier,
        device: DeviceId((identifier & 0xF) as u8),
        family: MessageFamily::from_discriminator(identifier >> 4),
    }
}
