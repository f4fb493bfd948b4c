//! Geometry of the emulated digits and the code that paints them into a [`MonoFrame`].
//!
//! Each digit cell is 21 pixels wide and starts 12 pixels from the top of the panel. A segment
//! is three parallel strokes, tapered at the ends so neighbouring segments meet at a bevel.
//! Cells 2 and 3 sit 2 pixels further right to leave room for the colon.

use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    transform::Transform,
};

use crate::frame::MonoFrame;
use crate::segments::{Segment, SegmentMask};

/// Horizontal distance between the origins of neighbouring cells.
pub const CELL_PITCH: i32 = 21;

/// Extra horizontal offset applied to cells at or right of the colon.
pub const COLON_GAP: i32 = 2;

/// Top edge of every cell.
pub const CELL_TOP: i32 = 12;

/// A single-pixel-wide line inside a cell, relative to the cell origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stroke {
    /// `length` pixels going right from (`x`, `y`).
    Horizontal { x: i32, y: i32, length: u32 },
    /// `length` pixels going down from (`x`, `y`).
    Vertical { x: i32, y: i32, length: u32 },
}

impl Stroke {
    /// The pixels covered by this stroke in a cell whose top-left corner is `origin`.
    #[must_use]
    pub fn area(self, origin: Point) -> Rectangle {
        let (x, y, size) = match self {
            Self::Horizontal { x, y, length } => (x, y, Size::new(length, 1)),
            Self::Vertical { x, y, length } => (x, y, Size::new(1, length)),
        };
        Rectangle::new(origin + Point::new(x, y), size)
    }

    /// Draw the stroke with the frame's line primitives.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Cell origins and stroke offsets are small."
    )]
    pub fn draw(self, frame: &mut MonoFrame, origin: Point, color: BinaryColor) {
        match self {
            Self::Horizontal { x, y, length } => {
                frame.hline(origin.x + x, origin.y + y, length, color);
            }
            Self::Vertical { x, y, length } => {
                frame.vline(origin.x + x, origin.y + y, length, color);
            }
        }
    }

    /// Number of pixels in the stroke.
    #[must_use]
    pub const fn length(self) -> u32 {
        match self {
            Self::Horizontal { length, .. } | Self::Vertical { length, .. } => length,
        }
    }
}

const fn h(x: i32, y: i32, length: u32) -> Stroke {
    Stroke::Horizontal { x, y, length }
}

const fn v(x: i32, y: i32, length: u32) -> Stroke {
    Stroke::Vertical { x, y, length }
}

impl Segment {
    /// The three strokes that make up this segment, relative to the cell origin.
    #[must_use]
    pub const fn strokes(self) -> [Stroke; 3] {
        match self {
            Self::A => [h(1, 0, 14), h(2, 1, 12), h(3, 2, 10)],
            Self::B => [v(13, 3, 8), v(14, 2, 10), v(15, 1, 10)],
            Self::C => [v(13, 14, 8), v(14, 13, 10), v(15, 14, 10)],
            Self::D => [h(3, 22, 10), h(2, 23, 12), h(1, 24, 14)],
            Self::E => [v(0, 14, 10), v(1, 13, 10), v(2, 14, 8)],
            Self::F => [v(0, 1, 10), v(1, 2, 10), v(2, 3, 8)],
            Self::G => [h(3, 11, 10), h(2, 12, 12), h(3, 13, 10)],
        }
    }
}

/// The decimal point: a 2x2 square right of the bottom segment.
pub const DOT_AREA: Rectangle = Rectangle::new(Point::new(17, 23), Size::new(2, 2));

/// The two squares of the colon between cells 1 and 2, in panel coordinates.
pub const COLON_AREAS: [Rectangle; 2] = [
    Rectangle::new(Point::new(40, 19), Size::new(2, 2)),
    Rectangle::new(Point::new(40, 28), Size::new(2, 2)),
];

/// Top-left corner of cell `slot`.
///
/// Slots past 3 are valid and simply land off the right edge of the panel.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "A u8 slot times the 21-pixel pitch cannot overflow i32."
)]
pub fn cell_origin(slot: u8) -> Point {
    let slot = i32::from(slot);
    let gap = if slot >= 2 { COLON_GAP } else { 0 };
    Point::new(slot * CELL_PITCH + gap, CELL_TOP)
}

/// Paint `mask` into cell `slot`.
///
/// Every segment and the dot is written, lit or not, so a new mask fully replaces whatever
/// the cell showed before. Nothing outside the cell is touched.
pub fn draw_mask(frame: &mut MonoFrame, slot: u8, mask: SegmentMask) {
    let origin = cell_origin(slot);
    for segment in Segment::ALL {
        let shade = binary_color(mask.is_lit(segment));
        for stroke in segment.strokes() {
            stroke.draw(frame, origin, shade);
        }
    }
    fill(frame, &DOT_AREA.translate(origin), binary_color(mask.has_dot()));
}

/// Paint or erase the colon.
pub fn draw_colon(frame: &mut MonoFrame, on: bool) {
    for area in &COLON_AREAS {
        fill(frame, area, binary_color(on));
    }
}

const fn binary_color(on: bool) -> BinaryColor {
    if on { BinaryColor::On } else { BinaryColor::Off }
}

fn fill(frame: &mut MonoFrame, area: &Rectangle, color: BinaryColor) {
    frame.fill_rect(
        area.top_left.x,
        area.top_left.y,
        area.size.width,
        area.size.height,
        color,
    );
}
