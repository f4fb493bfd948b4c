//! A quad seven-segment display emulated on an 84x48 pixel LCD.
//!
//! See [`Nokia7Seg`] for the device abstraction and usage examples.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_hal::delay::DelayNs;

use crate::char_set::{CharacterSet, Masks, encode_digit};
use crate::error::Error::{self, PositionOutOfRange};
use crate::frame::MonoFrame;
use crate::glyph::{draw_colon, draw_mask};
use crate::scroll::ScrollFrames;
use crate::segments::SegmentMask;
use crate::text::{Temperature, hex_text, number_text, numbers_text, temperature_text};
use crate::transport::DisplayTransport;
use crate::{CELL_COUNT, CELL_COUNT_U8, Result};

/// Degree sign followed by `C`, drawn in cells 2 and 3 by [`Nokia7Seg::temperature`].
const DEGREES_C: [SegmentMask; 2] = [SegmentMask::DEGREES, encode_digit(0xC)];

/// Cells holding the reading in [`Nokia7Seg::temperature`].
const READING_CELLS: usize = 2;

/// A 4-digit, 7-segment display drawn on a pixel LCD.
///
/// Owns the frame buffer and the [`DisplayTransport`]. Every drawing call updates the buffer
/// and immediately sends the whole frame, so the panel always matches the buffer.
///
/// # Example
///
/// ```
/// # use core::convert::Infallible;
/// use nokia_7seg::{DisplayTransport, Nokia7Seg};
///
/// struct Discard;
///
/// impl DisplayTransport for Discard {
///     type Error = Infallible;
///
///     fn data(&mut self, _buffer: &[u8]) -> Result<(), Infallible> {
///         Ok(())
///     }
/// }
///
/// let mut display = Nokia7Seg::new(Discard)?;
/// display.numbers(12, 34, true)?; // "12:34"
/// display.temperature(21)?; // "21°C"
/// display.hex(0xBEEF)?; // "bEEF"
/// # Ok::<(), nokia_7seg::Error>(())
/// ```
pub struct Nokia7Seg<T> {
    transport: T,
    frame: MonoFrame,
    char_set: CharacterSet,
}

impl<T: DisplayTransport> Nokia7Seg<T> {
    /// Create a display using the wide character set, and blank the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the first flush fails.
    pub fn new(transport: T) -> Result<Self, T::Error> {
        Self::with_character_set(transport, CharacterSet::WIDE)
    }

    /// Create a display using `char_set` for text, and blank the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the first flush fails.
    pub fn with_character_set(transport: T, char_set: CharacterSet) -> Result<Self, T::Error> {
        let mut display = Self {
            transport,
            frame: MonoFrame::new(),
            char_set,
        };
        display.clear(BinaryColor::Off)?;
        info!("Nokia7Seg ready");
        Ok(display)
    }

    /// The character set used for text.
    #[must_use]
    pub const fn character_set(&self) -> CharacterSet {
        self.char_set
    }

    /// The frame as last sent to the transport.
    #[must_use]
    pub const fn frame(&self) -> &MonoFrame {
        &self.frame
    }

    /// Mutable access to the frame for extra graphics. Call [`flush`](Self::flush) afterwards.
    pub fn frame_mut(&mut self) -> &mut MonoFrame {
        &mut self.frame
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Send the whole frame to the transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] with the transport's error, unchanged.
    pub fn flush(&mut self) -> Result<(), T::Error> {
        self.transport
            .data(self.frame.as_bytes())
            .map_err(Error::Transport)
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Mask for a hexadecimal digit; only the low nibble of `digit` is used.
    #[must_use]
    pub const fn encode_digit(&self, digit: u8) -> SegmentMask {
        self.char_set.encode_digit(digit)
    }

    /// Mask for one character in this display's character set.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](Error::CharacterOutOfRange) for characters the set
    /// cannot show.
    pub fn encode_char(&self, character: char) -> Result<SegmentMask> {
        self.char_set.encode_char(character)
    }

    /// Masks for `text` in this display's character set.
    ///
    /// See [`CharacterSet::encode_str`] for how the two sets differ in output length.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](Error::CharacterOutOfRange) or [`TextTooLong`](Error::TextTooLong).
    pub fn encode_str(&self, text: &str) -> Result<Masks> {
        self.char_set.encode_str(text)
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Draw `masks` into consecutive cells starting at `slot`, flushing after each one.
    ///
    /// Only the starting slot is checked. Masks that run past cell 3 are drawn off the right
    /// edge of the panel and are not visible.
    ///
    /// # Errors
    ///
    /// Returns [`PositionOutOfRange`] before drawing anything if `slot` is greater than 3,
    /// or [`Error::Transport`] if a flush fails.
    pub fn write(&mut self, masks: &[SegmentMask], slot: u8) -> Result<(), T::Error> {
        if slot >= CELL_COUNT_U8 {
            warn!("write rejected: slot {=u8} out of range", slot);
            return Err(PositionOutOfRange { slot });
        }
        trace!("write {=usize} masks at slot {=u8}", masks.len(), slot);
        for (offset, &mask) in masks.iter().enumerate() {
            let cell = slot.saturating_add(u8::try_from(offset).unwrap_or(u8::MAX));
            draw_mask(&mut self.frame, cell, mask);
            self.flush()?;
        }
        Ok(())
    }

    /// Show or hide the colon between cells 1 and 2.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the flush fails.
    pub fn colon(&mut self, on: bool) -> Result<(), T::Error> {
        draw_colon(&mut self.frame, on);
        self.flush()
    }

    /// Set every pixel of the panel to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the flush fails.
    pub fn clear(&mut self, color: BinaryColor) -> Result<(), T::Error> {
        self.frame.fill(color);
        self.flush()
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Show up to four characters from cell 0 and set the colon.
    ///
    /// Characters past the fourth are encoded (and so validated) but not drawn.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](Error::CharacterOutOfRange) or [`TextTooLong`](Error::TextTooLong) before
    /// drawing anything, or [`Error::Transport`] if a flush fails.
    pub fn show(&mut self, text: &str, colon: bool) -> Result<(), T::Error> {
        let masks = self.encode_str(text).map_err(|error| error.widen())?;
        self.show_masks(&masks, colon)
    }

    /// Show `value` as four hex digits, zero-padded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a flush fails.
    pub fn hex(&mut self, value: u16) -> Result<(), T::Error> {
        debug!("hex {=u16:x}", value);
        let text = hex_text(value).map_err(|error| error.widen())?;
        self.write_text(&text)
    }

    /// Show `value` right-aligned, clamped to `-999..=9999`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a flush fails.
    pub fn number(&mut self, value: i32) -> Result<(), T::Error> {
        debug!("number {=i32}", value);
        let text = number_text(value).map_err(|error| error.widen())?;
        self.write_text(&text)
    }

    /// Show two values, each clamped to `-9..=99` and zero-filled, then set the colon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a flush fails.
    pub fn numbers(&mut self, first: i32, second: i32, colon: bool) -> Result<(), T::Error> {
        debug!("numbers {=i32} {=i32} colon={=bool}", first, second, colon);
        let text = numbers_text(first, second).map_err(|error| error.widen())?;
        self.write_text(&text)?;
        self.colon(colon)
    }

    /// Show a temperature in the two left cells followed by `°C`.
    ///
    /// Readings below -9 show `lo` and readings above 99 show `hi`; both also turn the colon
    /// off. `lo` and `hi` use the wide glyphs whatever this display's character set is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a flush fails.
    pub fn temperature(&mut self, value: i32) -> Result<(), T::Error> {
        debug!("temperature {=i32}", value);
        match temperature_text(value).map_err(|error| error.widen())? {
            Temperature::Low => self.show_wide("lo")?,
            Temperature::High => self.show_wide("hi")?,
            Temperature::Reading(text) => {
                // The narrow set pads to four masks; cells 2 and 3 belong to `°C`.
                let masks = self.encode_str(&text).map_err(|error| error.widen())?;
                self.write(masks.get(..READING_CELLS).unwrap_or(&masks), 0)?;
            }
        }
        self.write(&DEGREES_C, 2)
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Frames that scroll `text` across the display from right to left.
    ///
    /// Text of any length can scroll, in either character set. The frames borrow `text` and
    /// encode it as they go. Write each frame at slot 0 and wait between frames:
    ///
    /// ```
    /// # use core::convert::Infallible;
    /// # use nokia_7seg::{DisplayTransport, Nokia7Seg};
    /// # struct Discard;
    /// # impl DisplayTransport for Discard {
    /// #     type Error = Infallible;
    /// #     fn data(&mut self, _buffer: &[u8]) -> Result<(), Infallible> { Ok(()) }
    /// # }
    /// # let mut display = Nokia7Seg::new(Discard)?;
    /// for window in display.scroll("hello")? {
    ///     display.write(&window, 0)?;
    ///     // pace here, e.g. Timer::after_millis(250).await
    /// }
    /// # Ok::<(), nokia_7seg::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](Error::CharacterOutOfRange) for the first character
    /// this display's set cannot show.
    pub fn scroll<'a>(&self, text: &'a str) -> Result<ScrollFrames<'a>> {
        ScrollFrames::from_text(text, self.char_set)
    }

    /// Scroll `text` across the display, sleeping `delay_ms` after every frame.
    ///
    /// Blocks for the whole animation. Prefer [`scroll`](Self::scroll) when the caller needs
    /// to stay responsive.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](Error::CharacterOutOfRange) before drawing anything,
    /// or [`Error::Transport`] if a flush fails.
    pub fn scroll_with_delay(
        &mut self,
        text: &str,
        delay: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), T::Error> {
        let frames = self.scroll(text).map_err(|error| error.widen())?;
        self.play(frames, delay, delay_ms)
    }

    /// Like [`scroll_with_delay`](Self::scroll_with_delay) for already-encoded masks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a flush fails.
    pub fn scroll_masks_with_delay(
        &mut self,
        masks: &[SegmentMask],
        delay: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), T::Error> {
        self.play(ScrollFrames::new(masks), delay, delay_ms)
    }

    fn play(
        &mut self,
        frames: ScrollFrames<'_>,
        delay: &mut impl DelayNs,
        delay_ms: u32,
    ) -> Result<(), T::Error> {
        debug!("scroll {=usize} frames", frames.len());
        for window in frames {
            self.write(&window, 0)?;
            delay.delay_ms(delay_ms);
        }
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn write_text(&mut self, text: &str) -> Result<(), T::Error> {
        let masks = self.encode_str(text).map_err(|error| error.widen())?;
        self.write(&masks, 0)
    }

    fn show_wide(&mut self, text: &str) -> Result<(), T::Error> {
        let masks = CharacterSet::WIDE.encode_str(text).map_err(|error| error.widen())?;
        self.show_masks(&masks, false)
    }

    fn show_masks(&mut self, masks: &[SegmentMask], colon: bool) -> Result<(), T::Error> {
        let visible = masks.get(..CELL_COUNT).unwrap_or(masks);
        self.write(visible, 0)?;
        self.colon(colon)
    }
}

impl<T> core::fmt::Debug for Nokia7Seg<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Nokia7Seg")
            .field("frame", &self.frame)
            .field("char_set", &self.char_set)
            .finish_non_exhaustive()
    }
}
