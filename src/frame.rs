//! A packed 1-bit frame buffer matching the PCD8544's RAM layout.
//!
//! Pixels are packed vertically: byte `(y / 8) * WIDTH + x` holds rows `y & !7` through
//! `(y & !7) + 7` of column `x`, least significant bit on top. Sending the bytes in order
//! fills the panel's display RAM bank by bank.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::{PointsIter, Rectangle},
};

/// Panel width in pixels.
pub const WIDTH: usize = 84;

/// Panel height in pixels.
pub const HEIGHT: usize = 48;

/// Number of 8-row banks.
pub const BANKS: usize = HEIGHT / 8;

/// Size of the packed buffer in bytes.
pub const BUFFER_LEN: usize = WIDTH * BANKS;

/// An 84x48 monochrome frame, one bit per pixel.
///
/// Drawing outside the panel is clipped, never an error. The frame also implements
/// [`embedded-graphics`](https://docs.rs/embedded-graphics)' [`DrawTarget`] so other shapes
/// and text can share the panel with the digits.
#[derive(Clone, PartialEq, Eq)]
pub struct MonoFrame([u8; BUFFER_LEN]);

impl MonoFrame {
    /// Create a new blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; BUFFER_LEN])
    }

    /// The packed bytes, in the order the panel expects them.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.0
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: BinaryColor) {
        let byte = if color.is_on() { 0xFF } else { 0x00 };
        self.0.fill(byte);
    }

    /// Fill the `width` x `height` rectangle whose top-left corner is (`x`, `y`).
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: BinaryColor) {
        let area = Rectangle::new(Point::new(x, y), Size::new(width, height));
        self.fill_area(&area, color);
    }

    /// Draw a horizontal line `length` pixels long, starting at (`x`, `y`) and going right.
    pub fn hline(&mut self, x: i32, y: i32, length: u32, color: BinaryColor) {
        self.fill_rect(x, y, length, 1, color);
    }

    /// Draw a vertical line `length` pixels long, starting at (`x`, `y`) and going down.
    pub fn vline(&mut self, x: i32, y: i32, length: u32, color: BinaryColor) {
        self.fill_rect(x, y, 1, length, color);
    }

    /// Read one pixel. Pixels outside the panel read as off.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> BinaryColor {
        match Self::locate(Point::new(x, y)) {
            Some((index, bit)) if self.0.get(index).is_some_and(|byte| byte & bit != 0) => {
                BinaryColor::On
            }
            _ => BinaryColor::Off,
        }
    }

    /// Set one pixel. Pixels outside the panel are ignored.
    pub fn set_pixel(&mut self, point: Point, color: BinaryColor) {
        let Some((index, bit)) = Self::locate(point) else {
            return;
        };
        if let Some(byte) = self.0.get_mut(index) {
            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
    }

    /// Number of lit pixels in the whole frame.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.0.iter().map(|byte| byte.count_ones()).sum()
    }

    fn fill_area(&mut self, area: &Rectangle, color: BinaryColor) {
        let clipped = area.intersection(&self.panel_area());
        for point in clipped.points() {
            self.set_pixel(point, color);
        }
    }

    /// Byte index and bit for an on-panel point.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Coordinates are range-checked against the panel first."
    )]
    fn locate(point: Point) -> Option<(usize, u8)> {
        let x = usize::try_from(point.x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(point.y).ok().filter(|&y| y < HEIGHT)?;
        Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
    }

    fn panel_area(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }
}

impl Default for MonoFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for MonoFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MonoFrame")
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl AsRef<[u8]> for MonoFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl OriginDimensions for MonoFrame {
    #[expect(clippy::cast_possible_truncation, reason = "Panel dimensions fit in u32.")]
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for MonoFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> core::result::Result<(), Self::Error> {
        self.fill_area(area, color);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> core::result::Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
