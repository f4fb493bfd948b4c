#![cfg(feature = "host")]

mod common;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use common::RecordingTransport;
use nokia_7seg::snapshot::{SnapshotError, read_png, write_png};
use nokia_7seg::{MonoFrame, Nokia7Seg, SegmentMask};

const REFERENCE_DIR: &str = "tests/data/snapshots";

type Display = Nokia7Seg<RecordingTransport>;

#[test]
fn all_segments_and_colon_match_reference() {
    run_snapshot_test("all_segments_colon", |display| {
        display.write(&[SegmentMask::ALL; 4], 0)?;
        display.colon(true)
    });
}

#[test]
fn clock_numbers_match_reference() {
    run_snapshot_test("numbers_12_34", |display| display.numbers(12, 34, true));
}

#[test]
fn temperature_matches_reference() {
    run_snapshot_test("temperature_21", |display| display.temperature(21));
}

#[test]
fn temperature_lo_matches_reference() {
    run_snapshot_test("temperature_lo", |display| display.temperature(-40));
}

#[test]
fn hex_matches_reference() {
    run_snapshot_test("hex_beef", |display| display.hex(0xBEEF));
}

#[test]
fn decimal_point_matches_reference() {
    run_snapshot_test("pi_with_dot", |display| {
        let masks = [0b_1100_1111, 0b_0000_0110, 0b_0110_0110, 0b_0110_1101].map(SegmentMask);
        display.write(&masks, 0)
    });
}

#[test]
fn png_round_trip_through_a_file() {
    let mut display = Display::new(RecordingTransport::default()).expect("recording never fails");
    display.show("AbCd", true).expect("wide letters");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("abcd.png");
    let file = File::create(&path).expect("failed to create PNG file");
    write_png(display.frame(), BufWriter::new(file)).expect("failed to write PNG");

    let file = File::open(&path).expect("failed to open PNG file");
    let decoded = read_png(file).expect("failed to read PNG");
    assert_eq!(&decoded, display.frame());
}

#[test]
fn wrong_size_png_is_rejected() {
    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, 10, 10);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .write_header()
        .and_then(|mut writer| writer.write_image_data(&[0xFF; 100]))
        .expect("failed to write PNG");

    assert!(matches!(
        read_png(bytes.as_slice()),
        Err(SnapshotError::Size {
            width: 10,
            height: 10
        })
    ));
    assert!(matches!(
        read_png(&b"not a png"[..]),
        Err(SnapshotError::Decoding(_))
    ));
}

fn run_snapshot_test(
    name: &str,
    draw: impl FnOnce(&mut Display) -> nokia_7seg::Result<(), core::convert::Infallible>,
) {
    let mut display = Display::new(RecordingTransport::default()).expect("recording never fails");
    draw(&mut display).expect("drawing must succeed");
    let frame = display.frame();

    if let Some(dir) = generation_dir() {
        let output_path = dir.join(format!("{name}.png"));
        let file = File::create(&output_path).expect("failed to create PNG file");
        write_png(frame, BufWriter::new(file)).expect("failed to write PNG");
        println!("wrote {name} to {}", output_path.display());
        return;
    }

    let reference_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(REFERENCE_DIR)
        .join(format!("{name}.png"));
    let file = File::open(&reference_path)
        .unwrap_or_else(|_| panic!("missing reference PNG at {}", reference_path.display()));
    let reference: MonoFrame = read_png(file).expect("failed to read reference PNG");
    assert_eq!(
        frame,
        &reference,
        "rendered output for {name} did not match reference at {}",
        reference_path.display()
    );
}

fn generation_dir() -> Option<PathBuf> {
    let env_value = std::env::var("NOKIA_7SEG_GENERATE_PNGS").ok()?;
    let dir = if env_value.is_empty() {
        let mut path = std::env::temp_dir();
        path.push("nokia-7seg-pngs");
        path
    } else {
        PathBuf::from(env_value)
    };
    std::fs::create_dir_all(&dir).expect("failed to create PNG output directory");
    Some(dir)
}
