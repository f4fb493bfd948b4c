//! Emulate a quad seven-segment display module on a Nokia 5110 (PCD8544) 84x48 LCD.
//!
//! Digits are drawn as beveled bars out of line and rectangle fills, four cells across with a
//! colon between the second and third, so the panel reads like a TM1637-style clock display.
//!
//! - [`CharacterSet`] turns characters into [`SegmentMask`]s.
//! - [`glyph`] knows where each segment's pixels are and paints them into a [`MonoFrame`].
//! - [`Nokia7Seg`] ties both to a [`DisplayTransport`] and adds number formatting and
//!   scrolling.
//! - [`Pcd8544`] is the transport for the real panel, over `embedded-hal` SPI.
//!
//! With the `host` feature, `snapshot` saves and loads frames as PNG files.
#![no_std]

#[macro_use]
mod fmt;

mod char_set;
mod error;
mod frame;
pub mod glyph;
mod nokia7seg;
mod pcd8544;
mod scroll;
mod segments;
#[cfg(feature = "host")]
pub mod snapshot;
pub mod text;
mod transport;

// Re-export commonly used items
pub use char_set::{CharacterSet, MAX_TEXT_LEN, Masks, encode_digit};
pub use embedded_graphics::pixelcolor::BinaryColor;
pub use error::{Error, Result};
pub use frame::{BUFFER_LEN, HEIGHT, MonoFrame, WIDTH};
pub use nokia7seg::Nokia7Seg;
pub use pcd8544::{Pcd8544, Pcd8544Config, Pcd8544Error};
pub use scroll::{ScrollFrames, Window};
pub use segments::{Segment, SegmentMask};
pub use transport::DisplayTransport;

/// The number of cells (digits) in the display.
pub const CELL_COUNT_U8: u8 = 4;
/// [`CELL_COUNT_U8`] as a `usize`, for lengths and indexing.
pub const CELL_COUNT: usize = CELL_COUNT_U8 as usize;
