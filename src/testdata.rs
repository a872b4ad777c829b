//! Recorded bus traffic from a three battery system, serials masked.
//! Starts and ends mid-burst so startup and trailing fragments are covered.

use crate::frame::Frame;

/// (identifier, timestamp, payload)
pub const CANDUMP: &[(u32, f64, [u8; 8])] = &[
    (0x101, 1715987138.038647, [0x08, 0x22, 0x11, 0x00, 0x75, 0x46, 0x03, 0xBB]),
    (0x101, 1715987138.039210, [0x09, 0x13, 0x95, 0xBA, 0xEE, 0x00, 0x00, 0x01]),
    (0x101, 1715987138.039687, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x15]),
    (0x101, 1715987138.042916, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x601, 1715987138.043252, [0x01, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x601, 1715987138.043804, [0x02, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C]),
    (0x601, 1715987138.044287, [0x03, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x601, 1715987138.044657, [0x04, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C]),
    (0x601, 1715987138.045220, [0x05, 0xF7, 0x0C, 0xF7, 0x0C, 0x00, 0x00, 0x00]),
    (0x601, 1715987138.045599, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x601, 1715987138.046102, [0x11, 0x41, 0x40, 0x3F, 0x40, 0x43, 0x43, 0x00]),
    (0x102, 1715987138.048410, [0x01, 0x02, 0x0E, 0x02, 0x13, 0xFF, 0xFD, 0x45]),
    (0x102, 1715987138.048683, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x102, 1715987138.049224, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x102, 1715987138.049644, [0x04, 0x0C, 0xF9, 0x01, 0x0C, 0xF9, 0x01, 0x64]),
    (0x102, 1715987138.050101, [0x05, 0x43, 0x40, 0x26, 0x00, 0x02, 0x33, 0x0A]),
    (0x102, 1715987138.050677, [0x06, 0x02, 0x14, 0xFF, 0xFF, 0x00, 0x00, 0x18]),
    (0x102, 1715987138.051174, [0x07, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61]),
    (0x102, 1715987138.051659, [0x08, 0x22, 0x05, 0x00, 0x75, 0x45, 0x02, 0x5C]),
    (0x102, 1715987138.052034, [0x09, 0x12, 0xAF, 0x9B, 0x12, 0x00, 0x00, 0x01]),
    (0x102, 1715987138.052618, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x14]),
    (0x102, 1715987138.053098, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x602, 1715987138.053541, [0x01, 0xF9, 0x0C, 0xF9, 0x0C, 0xF8, 0x0C, 0xF9]),
    (0x602, 1715987138.053954, [0x02, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF8, 0x0C]),
    (0x602, 1715987138.054489, [0x03, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9]),
    (0x602, 1715987138.054988, [0x04, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C]),
    (0x602, 1715987138.055466, [0x05, 0xF9, 0x0C, 0xF9, 0x0C, 0x00, 0x00, 0x00]),
    (0x602, 1715987138.055886, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x602, 1715987138.056385, [0x11, 0x41, 0x40, 0x40, 0x40, 0x41, 0x44, 0x00]),
    (0x103, 1715987138.068490, [0x01, 0x03, 0x0E, 0x02, 0x13, 0xFF, 0xFD, 0x53]),
    (0x103, 1715987138.068723, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x103, 1715987138.069305, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x103, 1715987138.069682, [0x04, 0x0C, 0xF8, 0x01, 0x0C, 0xF7, 0x02, 0x64]),
    (0x103, 1715987138.070137, [0x05, 0x49, 0x45, 0x26, 0x00, 0x02, 0x43, 0x19]),
    (0x103, 1715987138.070724, [0x06, 0x02, 0x13, 0xFF, 0xFF, 0x00, 0x00, 0x1E]),
    (0x103, 1715987138.071201, [0x07, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61]),
    (0x103, 1715987138.071681, [0x08, 0x22, 0x05, 0x00, 0x75, 0x45, 0x00, 0x70]),
    (0x103, 1715987138.072156, [0x09, 0x14, 0x93, 0xFB, 0x87, 0x00, 0x00, 0x01]),
    (0x103, 1715987138.072634, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x14]),
    (0x103, 1715987138.073120, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x603, 1715987138.073540, [0x01, 0xF8, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x603, 1715987138.074023, [0x02, 0x0C, 0xF8, 0x0C, 0xF8, 0x0C, 0xF7, 0x0C]),
    (0x603, 1715987138.074476, [0x03, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x603, 1715987138.074954, [0x04, 0x0C, 0xF7, 0x0C, 0xF8, 0x0C, 0xF7, 0x0C]),
    (0x603, 1715987138.075505, [0x05, 0xF8, 0x0C, 0xF7, 0x0C, 0x00, 0x00, 0x00]),
    (0x603, 1715987138.075991, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x603, 1715987138.076465, [0x11, 0x47, 0x45, 0x45, 0x45, 0x46, 0x49, 0x00]),
    (0x101, 1715987139.048187, [0x01, 0x01, 0x0E, 0x02, 0x13, 0xFF, 0xFD, 0x47]),
    (0x101, 1715987139.048532, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x101, 1715987139.049075, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x101, 1715987139.049539, [0x04, 0x0C, 0xF7, 0x01, 0x0C, 0xF7, 0x01, 0x64]),
    (0x101, 1715987139.049982, [0x05, 0x43, 0x3F, 0x35, 0x00, 0x02, 0x7B, 0xFA]),
    (0x101, 1715987139.050561, [0x06, 0x02, 0x15, 0xFF, 0xFF, 0x00, 0x00, 0x19]),
    (0x101, 1715987139.051026, [0x07, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61]),
    (0x101, 1715987139.051493, [0x08, 0x22, 0x11, 0x00, 0x75, 0x46, 0x03, 0xBB]),
    (0x101, 1715987139.051970, [0x09, 0x13, 0x95, 0xBA, 0xEE, 0x00, 0x00, 0x01]),
    (0x101, 1715987139.052414, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x15]),
    (0x101, 1715987139.052901, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x601, 1715987139.053366, [0x01, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x601, 1715987139.053807, [0x02, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C]),
    (0x601, 1715987139.054256, [0x03, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x601, 1715987139.054838, [0x04, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C]),
    (0x601, 1715987139.055208, [0x05, 0xF7, 0x0C, 0xF7, 0x0C, 0x00, 0x00, 0x00]),
    (0x601, 1715987139.055707, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x601, 1715987139.056208, [0x11, 0x41, 0x40, 0x3F, 0x40, 0x43, 0x43, 0x00]),
    (0x102, 1715987139.061290, [0x01, 0x02, 0x0E, 0x02, 0x13, 0xFF, 0xFD, 0x45]),
    (0x102, 1715987139.061584, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x102, 1715987139.062039, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x102, 1715987139.062504, [0x04, 0x0C, 0xF9, 0x01, 0x0C, 0xF8, 0x03, 0x64]),
    (0x102, 1715987139.062983, [0x05, 0x43, 0x40, 0x26, 0x00, 0x02, 0x33, 0x0A]),
    (0x102, 1715987139.063445, [0x06, 0x02, 0x14, 0xFF, 0xFF, 0x00, 0x00, 0x18]),
    (0x102, 1715987139.064023, [0x07, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61]),
    (0x102, 1715987139.064477, [0x08, 0x22, 0x05, 0x00, 0x75, 0x45, 0x02, 0x5C]),
    (0x102, 1715987139.064961, [0x09, 0x12, 0xAF, 0x9B, 0x12, 0x00, 0x00, 0x01]),
    (0x102, 1715987139.065425, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x14]),
    (0x102, 1715987139.065888, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x602, 1715987139.066338, [0x01, 0xF9, 0x0C, 0xF9, 0x0C, 0xF8, 0x0C, 0xF9]),
    (0x602, 1715987139.066927, [0x02, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF8, 0x0C]),
    (0x602, 1715987139.067379, [0x03, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9]),
    (0x602, 1715987139.067830, [0x04, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C, 0xF9, 0x0C]),
    (0x602, 1715987139.068325, [0x05, 0xF9, 0x0C, 0xF9, 0x0C, 0x00, 0x00, 0x00]),
    (0x602, 1715987139.068823, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x602, 1715987139.069323, [0x11, 0x41, 0x40, 0x40, 0x40, 0x41, 0x43, 0x00]),
    (0x103, 1715987139.081321, [0x01, 0x03, 0x0E, 0x02, 0x13, 0xFF, 0xFD, 0x53]),
    (0x103, 1715987139.081522, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x103, 1715987139.082070, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x103, 1715987139.082654, [0x04, 0x0C, 0xF8, 0x01, 0x0C, 0xF7, 0x02, 0x64]),
    (0x103, 1715987139.083098, [0x05, 0x49, 0x45, 0x26, 0x00, 0x02, 0x43, 0x19]),
    (0x103, 1715987139.083558, [0x06, 0x02, 0x13, 0xFF, 0xFF, 0x00, 0x00, 0x1E]),
    (0x103, 1715987139.084076, [0x07, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61]),
    (0x103, 1715987139.084526, [0x08, 0x22, 0x05, 0x00, 0x75, 0x45, 0x00, 0x70]),
    (0x103, 1715987139.085018, [0x09, 0x14, 0x93, 0xFB, 0x87, 0x00, 0x00, 0x01]),
    (0x103, 1715987139.085415, [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x14]),
    (0x103, 1715987139.085904, [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
    (0x603, 1715987139.086371, [0x01, 0xF8, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x603, 1715987139.086858, [0x02, 0x0C, 0xF8, 0x0C, 0xF8, 0x0C, 0xF7, 0x0C]),
    (0x603, 1715987139.087389, [0x03, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7, 0x0C, 0xF7]),
    (0x603, 1715987139.087870, [0x04, 0x0C, 0xF7, 0x0C, 0xF8, 0x0C, 0xF7, 0x0C]),
    (0x603, 1715987139.088367, [0x05, 0xF8, 0x0C, 0xF7, 0x0C, 0x00, 0x00, 0x00]),
    (0x603, 1715987139.088750, [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (0x603, 1715987139.089255, [0x11, 0x47, 0x45, 0x45, 0x45, 0x46, 0x49, 0x00]),
    (0x101, 1715987140.060603, [0x02, 0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01]),
    (0x101, 1715987140.061063, [0x03, 0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A]),
    (0x101, 1715987140.061676, [0x04, 0x0C, 0xF7, 0x01, 0x0C, 0xF7, 0x01, 0x64]),
];

/// Index of the first frame of the second reporting round
pub const ROUND_TWO: usize = 47;

pub fn candump() -> Vec<Frame> {
    CANDUMP
        .iter()
        .map(|(id, ts, payload)| Frame::new(*id, *payload, *ts))
        .collect()
}

/// Compiled 0x10X burst
#[rustfmt::skip]
pub const FAMILY_A_BLOCK: [u8; 77] = [
    0x04, 0x0E, 0x02, 0x13, 0xFF, 0xFB, 0x50,
    0x03, 0x00, 0x00, 0x02, 0x12, 0x01, 0x01,
    0x01, 0xF4, 0x02, 0x58, 0x00, 0x01, 0x2A,
    0x0C, 0xF8, 0x01, 0x0C, 0xF7, 0x06, 0x64,
    0x49, 0x45, 0x25, 0x00, 0x02, 0xF5, 0xF5,
    0x02, 0x15, 0xFF, 0xFF, 0x00, 0x00, 0x1E,
    0x00, 0x00, 0x00, 0x00, 0x0F, 0xA6, 0x61,
    0x22, 0x11, 0x00, 0x75, 0x46, 0x03, 0xC4,
    0x13, 0x8E, 0x3A, 0xF7, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x16,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Compiled 0x60X burst, every cell at 3322 mV
#[rustfmt::skip]
pub const FAMILY_B_BLOCK: [u8; 49] = [
    0xFA, 0x0C, 0xFA, 0x0C, 0xFA, 0x0C, 0xFA,
    0x0C, 0xFA, 0x0C, 0xFA, 0x0C, 0xFA, 0x0C,
    0xFA, 0x0C, 0xFA, 0x0C, 0xFA, 0x0C, 0xFA,
    0x0C, 0xFA, 0x0C, 0xFA, 0x0C, 0xFA, 0x0C,
    0xFA, 0x0C, 0xFA, 0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x46, 0x45, 0x44, 0x45, 0x46, 0x48, 0x00,
];
