//! Segment masks: one byte per digit, bits 0-6 for segments a-g and bit 7 for the dot.

use core::ops::{BitOr, BitOrAssign};

// ============================================================================
// SegmentMask
// ============================================================================

/// The lit segments of one seven-segment digit.
///
/// ```text
///    aaa
///   f   b
///   f   b
///    ggg
///   e   c
///   e   c
///    ddd  .
/// ```
///
/// Any byte is a valid mask, including ones that spell no character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SegmentMask(pub u8);

impl SegmentMask {
    /// Segment A (top).
    pub const SEG_A: Self = Self(0b_0000_0001);
    /// Segment B (upper right).
    pub const SEG_B: Self = Self(0b_0000_0010);
    /// Segment C (lower right).
    pub const SEG_C: Self = Self(0b_0000_0100);
    /// Segment D (bottom).
    pub const SEG_D: Self = Self(0b_0000_1000);
    /// Segment E (lower left).
    pub const SEG_E: Self = Self(0b_0001_0000);
    /// Segment F (upper left).
    pub const SEG_F: Self = Self(0b_0010_0000);
    /// Segment G (middle).
    pub const SEG_G: Self = Self(0b_0100_0000);
    /// Decimal point.
    pub const DOT: Self = Self(0b_1000_0000);

    /// All segments off, dot off. Also the mask for a space.
    pub const BLANK: Self = Self(0b_0000_0000);
    /// Middle segment only.
    pub const DASH: Self = Self(0b_0100_0000);
    /// Degree symbol: a small square in the upper half.
    pub const DEGREES: Self = Self(0b_0110_0011);
    /// Every segment and the dot ("8.").
    pub const ALL: Self = Self(0b_1111_1111);

    /// The raw byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `segment` is lit in this mask.
    #[must_use]
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Whether the decimal point is lit.
    #[must_use]
    pub const fn has_dot(self) -> bool {
        self.0 & Self::DOT.0 != 0
    }

    /// This mask with the decimal point turned on.
    #[must_use]
    pub const fn with_dot(self) -> Self {
        Self(self.0 | Self::DOT.0)
    }
}

impl From<u8> for SegmentMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<SegmentMask> for u8 {
    fn from(mask: SegmentMask) -> Self {
        mask.0
    }
}

impl BitOr for SegmentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ============================================================================
// Segment
// ============================================================================

/// One of the seven bars of a digit, in mask-bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments, a through g.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// The mask bit controlling this segment.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::A => SegmentMask::SEG_A.0,
            Self::B => SegmentMask::SEG_B.0,
            Self::C => SegmentMask::SEG_C.0,
            Self::D => SegmentMask::SEG_D.0,
            Self::E => SegmentMask::SEG_E.0,
            Self::F => SegmentMask::SEG_F.0,
            Self::G => SegmentMask::SEG_G.0,
        }
    }
}
