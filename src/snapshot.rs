//! PNG snapshots of a [`MonoFrame`], for reference-image tests and previews on the host.
//!
//! Snapshots are 8-bit grayscale at panel resolution. Lit pixels are black and unlit pixels
//! white, which is how the LCD looks.

extern crate std;

use std::io::{Read, Write};

use derive_more::derive::{Display, Error, From};
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::BinaryColor;
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::frame::{HEIGHT, MonoFrame, WIDTH};

const LIT: u8 = 0x00;
const UNLIT: u8 = 0xFF;

/// Errors reading or writing a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    #[display("PNG encoding failed: {_0}")]
    #[from]
    Encoding(png::EncodingError),

    #[display("PNG decoding failed: {_0}")]
    #[from]
    Decoding(png::DecodingError),

    #[display("Snapshot is {width}x{height}, expected 84x48")]
    Size { width: u32, height: u32 },
}

/// Write `frame` as a grayscale PNG.
///
/// # Errors
///
/// Returns [`SnapshotError::Encoding`] if the writer fails.
#[expect(clippy::cast_possible_truncation, reason = "Panel dimensions fit in u32.")]
pub fn write_png<W: Write>(frame: &MonoFrame, writer: W) -> Result<(), SnapshotError> {
    let mut encoder = Encoder::new(writer, WIDTH as u32, HEIGHT as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&grayscale(frame))?;
    png_writer.finish()?;
    Ok(())
}

/// Read a frame back from a grayscale PNG written by [`write_png`].
///
/// Pixels darker than mid-gray count as lit.
///
/// # Errors
///
/// Returns [`SnapshotError::Decoding`] for unreadable data or [`SnapshotError::Size`] if the
/// image is not 84x48.
pub fn read_png<R: Read>(reader: R) -> Result<MonoFrame, SnapshotError> {
    let mut png_reader = Decoder::new(reader).read_info()?;
    let mut buffer = std::vec![0; png_reader.output_buffer_size()];
    let info = png_reader.next_frame(&mut buffer)?;
    if info.width as usize != WIDTH || info.height as usize != HEIGHT {
        return Err(SnapshotError::Size {
            width: info.width,
            height: info.height,
        });
    }
    let channels = info.color_type.samples();
    let line_size = info.line_size;
    let mut frame = MonoFrame::new();
    for (y, line) in buffer.chunks(line_size).take(HEIGHT).enumerate() {
        for (x, pixel) in line.chunks(channels).take(WIDTH).enumerate() {
            let lit = pixel.first().is_some_and(|&level| level < 0x80);
            if lit {
                frame.set_pixel(point(x, y), BinaryColor::On);
            }
        }
    }
    Ok(frame)
}

/// One byte per pixel, row-major.
#[must_use]
pub fn grayscale(frame: &MonoFrame) -> std::vec::Vec<u8> {
    let mut bytes = std::vec::Vec::with_capacity(WIDTH * HEIGHT);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let Point { x, y } = point(x, y);
            let level = if frame.pixel(x, y).is_on() { LIT } else { UNLIT };
            bytes.push(level);
        }
    }
    bytes
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "Panel coordinates are below 84."
)]
const fn point(x: usize, y: usize) -> Point {
    Point::new(x as i32, y as i32)
}
