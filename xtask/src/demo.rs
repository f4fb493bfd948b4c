//! Render the demo walkthrough to PNG files.
//!
//! Each step starts from a blank display and replays the calls that produce one screen, so
//! steps are independent and render in parallel.

use std::convert::Infallible;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use nokia_7seg::snapshot::{grayscale, write_png};
use nokia_7seg::{DisplayTransport, HEIGHT, MonoFrame, Nokia7Seg, SegmentMask, WIDTH};
use rayon::prelude::*;

type BoxError = Box<dyn Error + Send + Sync>;
type Display = Nokia7Seg<Discard>;
type Draw = fn(&mut Display) -> nokia_7seg::Result<()>;

/// Frames go nowhere; only the display's own buffer matters here.
struct Discard;

impl DisplayTransport for Discard {
    type Error = Infallible;

    fn data(&mut self, _buffer: &[u8]) -> Result<(), Infallible> {
        Ok(())
    }
}

const STEPS: &[(&str, Draw)] = &[
    ("all_on", |display| {
        display.write(&[SegmentMask::ALL; 4], 0)?;
        display.colon(true)
    }),
    ("all_off", |display| display.write(&[SegmentMask::BLANK; 4], 0)),
    ("pi", |display| display.write(&masks(&[207, 6, 102, 109]), 0)),
    ("digits_0123", |display| display.write(&masks(&[63, 6, 91, 79]), 0)),
    ("digits_4567", |display| display.write(&masks(&[102, 109, 125, 7]), 0)),
    ("partial_4127", |display| {
        display.write(&masks(&[102, 109, 125, 7]), 0)?;
        display.write(&masks(&[6, 91]), 1)
    }),
    ("partial_4129", |display| {
        display.write(&masks(&[102, 109, 125, 7]), 0)?;
        display.write(&masks(&[6, 91]), 1)?;
        display.write(&masks(&[111]), 3)
    }),
    ("show_abcd", |display| display.show("AbCd", false)),
    ("show_cool", |display| display.show("cool", false)),
    ("show_help", |display| display.show("Help", false)),
    ("hex_dead", |display| display.hex(0xDEAD)),
    ("hex_beef", |display| display.hex(0xBEEF)),
    ("hex_cafe", |display| display.hex(0xCAFE)),
    ("hex_babe", |display| display.hex(0xBABE)),
    ("hex_00ff", |display| display.hex(0xFF)),
    ("number_1", |display| display.number(1)),
    ("number_123", |display| display.number(123)),
    ("number_capped_high", |display| display.number(20_000)),
    ("number_minus_12", |display| display.number(-12)),
    ("number_capped_low", |display| display.number(-1234)),
    ("numbers_01_02", |display| display.numbers(1, 2, true)),
    ("numbers_minus5_11", |display| display.numbers(-5, 11, true)),
    ("numbers_12_59", |display| display.numbers(12, 59, true)),
    ("temperature_24", |display| display.temperature(24)),
    ("temperature_lo", |display| display.temperature(-20)),
    ("temperature_hi", |display| display.temperature(120)),
    ("show_24_star_c", |display| display.show("24*C", false)),
];

/// Text scrolled across the display, one PNG per frame.
const SCROLL_TEXT: &str = "Hello World";

/// Columns in the contact sheet.
const SHEET_COLUMNS: usize = 4;
/// Light-gray border between frames in the contact sheet.
const GUTTER: usize = 2;

fn masks(bits: &[u8]) -> Vec<SegmentMask> {
    bits.iter().copied().map(SegmentMask).collect()
}

fn fresh() -> Result<Display, BoxError> {
    Ok(Nokia7Seg::new(Discard)?)
}

/// Render every step and scroll frame into `out_dir`, plus `sheet.png` with all of them.
pub fn render(out_dir: &Path) -> Result<usize, BoxError> {
    fs::create_dir_all(out_dir)?;

    let mut frames: Vec<(String, MonoFrame)> = STEPS
        .par_iter()
        .map(|&(name, draw)| -> Result<(String, MonoFrame), BoxError> {
            let mut display = fresh()?;
            draw(&mut display)?;
            Ok((name.to_owned(), display.frame().clone()))
        })
        .collect::<Result<_, BoxError>>()?;

    let mut display = fresh()?;
    for (index, window) in display.scroll(SCROLL_TEXT)?.enumerate() {
        display.write(&window, 0)?;
        frames.push((format!("scroll_{index:02}"), display.frame().clone()));
    }

    frames
        .par_iter()
        .try_for_each(|(name, frame)| -> Result<(), BoxError> {
            let file = File::create(out_dir.join(format!("{name}.png")))?;
            write_png(frame, BufWriter::new(file))?;
            Ok(())
        })?;

    write_sheet(&frames, &out_dir.join("sheet.png"))?;
    Ok(frames.len())
}

fn write_sheet(
    frames: &[(String, MonoFrame)],
    path: &Path,
) -> Result<(), BoxError> {
    let rows = frames.len().div_ceil(SHEET_COLUMNS);
    let width = SHEET_COLUMNS * (WIDTH + GUTTER) + GUTTER;
    let height = rows * (HEIGHT + GUTTER) + GUTTER;
    let mut pixels = vec![0xC0_u8; width * height];

    for (index, (_, frame)) in frames.iter().enumerate() {
        let left = (index % SHEET_COLUMNS) * (WIDTH + GUTTER) + GUTTER;
        let top = (index / SHEET_COLUMNS) * (HEIGHT + GUTTER) + GUTTER;
        for (row, line) in grayscale(frame).chunks(WIDTH).enumerate() {
            let start = (top + row) * width + left;
            pixels[start..start + WIDTH].copy_from_slice(line);
        }
    }

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    Ok(())
}
