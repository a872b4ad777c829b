//! Fixed layout decoding of compiled battery bursts.
//!
//! Family A (0x10X) carries the telemetry, big-endian:
//!
//! ```text
//!  0      ordinal            u8
//!  1      batteries          u8
//!  2..4   pack voltage       u16  /10
//!  4..6   pack current       i16  /10
//!  6      state of charge    u8   %
//! 10..12  system avg voltage u16  /10
//! 31..35  discharge energy   u32
//! 35..37  pre-charge voltage u16  /10
//! 37..39  insulation         u16
//! 46..48  firmware version   u16
//! 48      hardware version   ascii
//! 49..56  serial source      see parse_serial
//! ```
//!
//! Family B (0x60X) leads with 16 little-endian u16 cell voltages.

pub mod error;

pub use error::FormatError;

use serde::Serialize;

use crate::frame::MessageFamily;

pub const CELL_COUNT: usize = 16;

const SERIAL_LEN: usize = 7;
const CELLS_LEN: usize = CELL_COUNT * 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryData {
    pub battery_id: String,
    pub battery_number: u8,
    pub batteries_in_system: u8,
    pub battery_soc: u8,
    pub battery_voltage: f64,
    pub battery_current: f64,
    pub system_average_voltage: f64,
    pub pre_volt: f64,
    pub insulation_resistance: u16,
    pub software_version: u16,
    pub hardware_version: String,
    pub lifetime_discharge_energy: u32,
    pub cell_voltages: [u16; CELL_COUNT],
}

/// Decode one battery from its latest 0x10X and 0x60X blocks.
/// Undersized blocks are rejected outright, never partially decoded.
pub fn decode_record(family_a: &[u8], family_b: &[u8]) -> Result<BatteryData, FormatError> {
    check_len(MessageFamily::A, family_a)?;
    check_len(MessageFamily::B, family_b)?;
    let a = family_a;

    let mut serial = [0; SERIAL_LEN];
    serial.copy_from_slice(&a[49..49 + SERIAL_LEN]);
    let mut cells = [0; CELLS_LEN];
    cells.copy_from_slice(&family_b[..CELLS_LEN]);

    Ok(BatteryData {
        battery_id: parse_serial(&serial),
        battery_number: a[0],
        batteries_in_system: a[1],
        battery_soc: a[6],
        battery_voltage: tenths(be_u16(a, 2)),
        battery_current: f64::from(i16::from_be_bytes([a[4], a[5]])) / 10.0,
        system_average_voltage: tenths(be_u16(a, 10)),
        pre_volt: tenths(be_u16(a, 35)),
        insulation_resistance: be_u16(a, 37),
        software_version: be_u16(a, 46),
        hardware_version: char::from(a[48]).to_string(),
        lifetime_discharge_energy: u32::from_be_bytes([a[31], a[32], a[33], a[34]]),
        cell_voltages: parse_cell_voltages(&cells),
    })
}

/// `22 11 00 54 46 27 0F` -> `2211054F9999`
///
/// hex, hex, plain decimal, hex, raw character, then the last two bytes
/// as a big-endian u16 zero padded to four digits.
pub fn parse_serial(src: &[u8; SERIAL_LEN]) -> String {
    let [b0, b1, b2, b3, b4, b5, b6] = *src;
    format!(
        "{b0:02x}{b1:02x}{b2}{b3:02x}{}{:04}",
        char::from(b4),
        u16::from_be_bytes([b5, b6])
    )
}

/// Unlike the rest of the protocol, cell voltages are little-endian
pub fn parse_cell_voltages(src: &[u8; CELLS_LEN]) -> [u16; CELL_COUNT] {
    std::array::from_fn(|i| u16::from_le_bytes([src[2 * i], src[2 * i + 1]]))
}

fn check_len(family: MessageFamily, block: &[u8]) -> Result<(), FormatError> {
    let expected = family.block_len();
    if block.len() < expected {
        return Err(FormatError::ShortBlock {
            family,
            expected,
            actual: block.len(),
        });
    }
    Ok(())
}

fn be_u16(b: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([b[at], b[at + 1]])
}

fn tenths(raw: u16) -> f64 {
    f64::from(raw) / 10.0
}
