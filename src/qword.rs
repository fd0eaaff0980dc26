/// Number of bits in one 16-bit limb.
pub const LIMB_BITS: u32 = 16;

/// Maximum value of a 16-bit limb.
pub const LIMB_MASK: u64 = 0xffff;

/// A 64-bit unsigned value split into four 16-bit limbs, most
/// significant first: `value = d | (c << 16) | (b << 32) | (a << 48)`.
///
/// This is the working representation for carry arithmetic on targets
/// whose widest native integer is 32 bits: every limb product or limb
/// sum fits the native word with room for the carry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QWord16 {
    pub a: u16,
    pub b: u16,
    pub c: u16,
    pub d: u16,
}

impl QWord16 {
    pub const ZERO: QWord16 = QWord16 { a: 0, b: 0, c: 0, d: 0 };

    pub const fn new(a: u16, b: u16, c: u16, d: u16) -> QWord16 {
        QWord16 { a, b, c, d }
    }

    pub const fn from_u64(v: u64) -> QWord16 {
        QWord16 {
            a: (v >> 48) as u16,
            b: (v >> 32) as u16,
            c: (v >> 16) as u16,
            d: v as u16,
        }
    }

    /// Recompose the 64-bit value from the limbs.
    pub const fn to_u64(&self) -> u64 {
        (self.d as u64)
            | ((self.c as u64) << 16)
            | ((self.b as u64) << 32)
            | ((self.a as u64) << 48)
    }
}

/// The same 64-bit value as two 32-bit halves: `value = lo | (hi << 32)`.
///
/// Used for magnitude comparison, where two word-width compares decide
/// the ordering instead of four.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QWord {
    pub hi: u32,
    pub lo: u32,
}

impl QWord {
    pub const ZERO: QWord = QWord { hi: 0, lo: 0 };

    pub const fn new(hi: u32, lo: u32) -> QWord {
        QWord { hi, lo }
    }

    pub const fn from_u64(v: u64) -> QWord {
        QWord {
            hi: (v >> 32) as u32,
            lo: v as u32,
        }
    }

    pub const fn to_u64(&self) -> u64 {
        (self.lo as u64) | ((self.hi as u64) << 32)
    }
}

/// Lossless repacking: adjacent 16-bit limbs collapse into one 32-bit half.
impl From<QWord16> for QWord {
    fn from(w: QWord16) -> QWord {
        QWord {
            hi: ((w.a as u32) << 16) | (w.b as u32),
            lo: ((w.c as u32) << 16) | (w.d as u32),
        }
    }
}
