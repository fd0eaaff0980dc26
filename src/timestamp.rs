//! Millisecond timestamps assembled from the limb primitives.
//!
//! The consuming protocol stamps messages with the low 48 bits of a
//! millisecond-resolution Unix time, packed big-endian into 6 bytes.
//! The multiply and add go through the limb engine rather than native
//! 64-bit arithmetic, so this module doubles as the reference for the
//! emulated timestamp path.

use crate::arith::{add_scalar, mul};
use crate::qword::{QWord, QWord16};

/// Milliseconds per second, as the single-limb multiplier operand.
const MSEC_MULTIPLIER: QWord16 = QWord16::new(0, 0, 0, 1000);

/// Build `secs * 1000 + msec` as a [`QWord16`].
pub fn from_unix_time(secs: u32, msec: u32) -> QWord16 {
    let seconds = QWord16::new(0, 0, (secs >> 16) as u16, secs as u16);

    let (scaled, carry) = mul(&seconds, &MSEC_MULTIPLIER);
    // 32-bit seconds times 1000 stays far below 2^64.
    debug_assert_eq!(carry, 0);

    add_scalar(&scaled, msec)
}

/// Serialize the low 48 bits big-endian: bytes 0-1 are bits 47-32,
/// bytes 2-5 the low 32 bits.
pub fn to_bytes48(qw: &QWord16) -> [u8; 6] {
    let w = QWord::from(*qw);

    [
        (w.hi >> 8) as u8,
        w.hi as u8,
        (w.lo >> 24) as u8,
        (w.lo >> 16) as u8,
        (w.lo >> 8) as u8,
        w.lo as u8,
    ]
}
