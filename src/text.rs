//! Fixed-width renderings of numbers for a four-cell display.
//!
//! These helpers only produce text; [`Nokia7Seg`](crate::Nokia7Seg) encodes and draws it.

use core::fmt::Write;

use heapless::String;

use crate::error::Error::TextTooLong;
use crate::Result;

/// Capacity of the formatted strings. Four cells plus headroom.
const TEXT_CAPACITY: usize = 8;

/// A short formatted string.
pub type Text = String<TEXT_CAPACITY>;

/// Smallest value [`number_text`] can show.
pub const NUMBER_MIN: i32 = -999;
/// Largest value [`number_text`] can show.
pub const NUMBER_MAX: i32 = 9999;

/// Smallest value each half of [`numbers_text`] can show.
pub const PAIR_MIN: i32 = -9;
/// Largest value each half of [`numbers_text`] can show.
pub const PAIR_MAX: i32 = 99;

/// `value` as four lowercase hex digits, zero-padded.
///
/// # Errors
///
/// Never fails in practice; a formatter overflow is reported as [`TextTooLong`].
pub fn hex_text(value: u16) -> Result<Text> {
    format(format_args!("{value:04x}"))
}

/// `value` clamped to `-999..=9999` and right-aligned in four cells.
///
/// A minus sign takes one cell.
///
/// # Errors
///
/// Never fails in practice; a formatter overflow is reported as [`TextTooLong`].
pub fn number_text(value: i32) -> Result<Text> {
    let value = value.clamp(NUMBER_MIN, NUMBER_MAX);
    format(format_args!("{value:>4}"))
}

/// Two values, each clamped to `-9..=99` and zero-filled to two cells, side by side.
///
/// `(-5, 11)` gives `"-511"`; `(5, 7)` gives `"0507"`.
///
/// # Errors
///
/// Never fails in practice; a formatter overflow is reported as [`TextTooLong`].
pub fn numbers_text(first: i32, second: i32) -> Result<Text> {
    let first = first.clamp(PAIR_MIN, PAIR_MAX);
    let second = second.clamp(PAIR_MIN, PAIR_MAX);
    format(format_args!("{first:0>2}{second:0>2}"))
}

/// How a temperature reading fits the two left cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Temperature {
    /// Below -9: shown as `lo`.
    Low,
    /// Above 99: shown as `hi`.
    High,
    /// In range, right-aligned in two cells.
    Reading(Text),
}

/// Classify and format a temperature for the two left cells.
///
/// # Errors
///
/// Never fails in practice; a formatter overflow is reported as [`TextTooLong`].
pub fn temperature_text(value: i32) -> Result<Temperature> {
    if value < PAIR_MIN {
        Ok(Temperature::Low)
    } else if value > PAIR_MAX {
        Ok(Temperature::High)
    } else {
        format(format_args!("{value:>2}")).map(Temperature::Reading)
    }
}

fn format(args: core::fmt::Arguments<'_>) -> Result<Text> {
    let mut text = Text::new();
    text.write_fmt(args)
        .map_err(|_| TextTooLong { max: TEXT_CAPACITY })?;
    Ok(text)
}
