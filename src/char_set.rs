//! Character sets mapping text to seven-segment masks.
//!
//! Two sets exist. [`CharacterSet::WIDE`] knows digits, the whole alphabet, space, dash, and
//! `*` (drawn as a degree sign). [`CharacterSet::NARROW`] knows only digits, `a`-`f`, space,
//! and dash, and always produces exactly one mask per cell.

use heapless::Vec;

use crate::error::Error::{CharacterOutOfRange, TextTooLong};
use crate::segments::SegmentMask;
use crate::{CELL_COUNT, Result};

/// Longest text [`CharacterSet::encode_str`] accepts in the wide set.
pub const MAX_TEXT_LEN: usize = 64;

/// Masks produced from a piece of text, one per character.
pub type Masks = Vec<SegmentMask, MAX_TEXT_LEN>;

/// Masks for hexadecimal digits 0-f.
const HEX_DIGITS: [SegmentMask; 16] = [
    SegmentMask(0b_0011_1111), // 0
    SegmentMask(0b_0000_0110), // 1
    SegmentMask(0b_0101_1011), // 2
    SegmentMask(0b_0100_1111), // 3
    SegmentMask(0b_0110_0110), // 4
    SegmentMask(0b_0110_1101), // 5
    SegmentMask(0b_0111_1101), // 6
    SegmentMask(0b_0000_0111), // 7
    SegmentMask(0b_0111_1111), // 8
    SegmentMask(0b_0110_1111), // 9
    SegmentMask(0b_0111_0111), // a
    SegmentMask(0b_0111_1100), // b
    SegmentMask(0b_0011_1001), // c
    SegmentMask(0b_0101_1110), // d
    SegmentMask(0b_0111_1001), // e
    SegmentMask(0b_0111_0001), // f
];

/// Masks for letters a-z. Upper and lower case share a glyph.
const LETTERS: [SegmentMask; 26] = [
    SegmentMask(0b_0111_0111), // a
    SegmentMask(0b_0111_1100), // b
    SegmentMask(0b_0011_1001), // c
    SegmentMask(0b_0101_1110), // d
    SegmentMask(0b_0111_1001), // e
    SegmentMask(0b_0111_0001), // f
    SegmentMask(0b_0011_1101), // g
    SegmentMask(0b_0111_0110), // h
    SegmentMask(0b_0000_0110), // i
    SegmentMask(0b_0001_1110), // j
    SegmentMask(0b_0111_0110), // k
    SegmentMask(0b_0011_1000), // l
    SegmentMask(0b_0101_0101), // m
    SegmentMask(0b_0101_0100), // n
    SegmentMask(0b_0011_1111), // o
    SegmentMask(0b_0111_0011), // p
    SegmentMask(0b_0110_0111), // q
    SegmentMask(0b_0101_0000), // r
    SegmentMask(0b_0110_1101), // s
    SegmentMask(0b_0111_1000), // t
    SegmentMask(0b_0011_1110), // u
    SegmentMask(0b_0001_1100), // v
    SegmentMask(0b_0010_1010), // w
    SegmentMask(0b_0111_0110), // x
    SegmentMask(0b_0110_1110), // y
    SegmentMask(0b_0101_1011), // z
];

/// Mask for a hexadecimal digit. Only the low nibble of `digit` is used.
#[must_use]
#[expect(clippy::indexing_slicing, reason = "The index is masked to 0..16.")]
pub const fn encode_digit(digit: u8) -> SegmentMask {
    HEX_DIGITS[(digit & 0x0F) as usize]
}

// ============================================================================
// CharacterSet
// ============================================================================

/// A fixed mapping from characters to segment masks.
///
/// Pick one of the two constants when building a display; there is no runtime mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacterSet {
    /// How many entries of the a-z table are usable (26 or 6).
    letter_count: u8,
    /// Mask for `*`, if the set has one.
    star: Option<SegmentMask>,
    /// Whether `encode_str` always returns one mask per cell, blank-padded.
    pads_to_cells: bool,
}

impl CharacterSet {
    /// Digits, a-z (case-insensitive), space, dash, and `*` as a degree sign.
    ///
    /// [`encode_str`](Self::encode_str) returns exactly one mask per input character.
    pub const WIDE: Self = Self {
        letter_count: 26,
        star: Some(SegmentMask::DEGREES),
        pads_to_cells: false,
    };

    /// Digits, a-f (case-insensitive), space, and dash.
    ///
    /// [`encode_str`](Self::encode_str) accepts at most four characters and always returns
    /// four masks, padding the tail with blanks.
    pub const NARROW: Self = Self {
        letter_count: 6,
        star: None,
        pads_to_cells: true,
    };

    /// Mask for a hexadecimal digit. Only the low nibble of `digit` is used.
    #[must_use]
    pub const fn encode_digit(&self, digit: u8) -> SegmentMask {
        encode_digit(digit)
    }

    /// Mask for a single character.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`] if the set has no glyph for `character`.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Subtractions are bounded by the matched character ranges."
    )]
    pub fn encode_char(&self, character: char) -> Result<SegmentMask> {
        let out_of_range = CharacterOutOfRange { character };
        match character {
            ' ' => Ok(SegmentMask::BLANK),
            '-' => Ok(SegmentMask::DASH),
            '*' => self.star.ok_or(out_of_range),
            '0'..='9' => Ok(encode_digit(character as u8 - b'0')),
            'a'..='z' | 'A'..='Z' => {
                let index = character.to_ascii_lowercase() as u8 - b'a';
                if index < self.letter_count {
                    LETTERS.get(usize::from(index)).copied().ok_or(out_of_range)
                } else {
                    Err(out_of_range)
                }
            }
            _ => Err(out_of_range),
        }
    }

    /// Masks for each character of `text`, in order.
    ///
    /// In the wide set the result has one mask per character. In the narrow set the result
    /// always has [`CELL_COUNT`] masks, with unused trailing cells blank.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`] for the first unsupported character, or
    /// [`TextTooLong`] if `text` exceeds [`MAX_TEXT_LEN`] characters (wide) or
    /// [`CELL_COUNT`] characters (narrow).
    pub fn encode_str(&self, text: &str) -> Result<Masks> {
        let max = if self.pads_to_cells { CELL_COUNT } else { MAX_TEXT_LEN };
        let mut masks = Masks::new();
        for character in text.chars() {
            let mask = self.encode_char(character)?;
            if masks.len() >= max {
                return Err(TextTooLong { max });
            }
            masks.push(mask).map_err(|_| TextTooLong { max })?;
        }
        if self.pads_to_cells {
            while masks.len() < CELL_COUNT {
                masks
                    .push(SegmentMask::BLANK)
                    .map_err(|_| TextTooLong { max })?;
            }
        }
        Ok(masks)
    }

    /// Whether this set has a glyph for `character`.
    #[must_use]
    pub fn supports(&self, character: char) -> bool {
        self.encode_char(character).is_ok()
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::WIDE
    }
}
