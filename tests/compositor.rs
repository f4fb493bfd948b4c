#![cfg(feature = "host")]

use embedded_graphics::{
    Drawable,
    geometry::Point,
    primitives::{Line, PointsIter, Primitive, PrimitiveStyle},
};
use nokia_7seg::glyph::{COLON_AREAS, DOT_AREA, cell_origin, draw_colon, draw_mask};
use nokia_7seg::{BUFFER_LEN, BinaryColor, CharacterSet, MonoFrame, Segment, SegmentMask};

/// Pixels lit by each segment, A through G.
const SEGMENT_PIXELS: [u32; 7] = [36, 28, 28, 36, 28, 28, 32];
/// Pixels lit by "8." in one cell.
const FULL_CELL_PIXELS: u32 = 220;

/// Reads the mask back out of a cell by probing the middle stroke of each segment and the dot.
fn read_mask(frame: &MonoFrame, slot: u8) -> SegmentMask {
    let origin = cell_origin(slot);
    let mut mask = SegmentMask::BLANK;
    for segment in Segment::ALL {
        let [_, middle, _] = segment.strokes();
        let probe = middle.area(origin).top_left;
        if frame.pixel(probe.x, probe.y).is_on() {
            mask |= SegmentMask(segment.bit());
        }
    }
    let dot = DOT_AREA.top_left + origin;
    if frame.pixel(dot.x, dot.y).is_on() {
        mask |= SegmentMask::DOT;
    }
    mask
}

#[test]
fn cell_origins_leave_room_for_the_colon() {
    assert_eq!(cell_origin(0), Point::new(0, 12));
    assert_eq!(cell_origin(1), Point::new(21, 12));
    assert_eq!(cell_origin(2), Point::new(44, 12));
    assert_eq!(cell_origin(3), Point::new(65, 12));
    assert_eq!(cell_origin(4), Point::new(86, 12));
}

#[test]
fn each_segment_lights_exactly_its_strokes() {
    for (segment, expected) in Segment::ALL.into_iter().zip(SEGMENT_PIXELS) {
        let mut frame = MonoFrame::new();
        draw_mask(&mut frame, 0, SegmentMask(segment.bit()));
        assert_eq!(frame.lit_count(), expected, "segment {segment:?}");

        let stroke_pixels: u32 = segment.strokes().iter().map(|stroke| stroke.length()).sum();
        assert_eq!(stroke_pixels, expected);
        for stroke in segment.strokes() {
            for point in stroke.area(cell_origin(0)).points() {
                assert!(frame.pixel(point.x, point.y).is_on(), "{segment:?} at {point:?}");
            }
        }
    }
}

#[test]
fn dot_is_a_two_by_two_square() {
    let mut frame = MonoFrame::new();
    draw_mask(&mut frame, 1, SegmentMask::DOT);
    assert_eq!(frame.lit_count(), 4);
    for (x, y) in [(38, 35), (39, 35), (38, 36), (39, 36)] {
        assert!(frame.pixel(x, y).is_on(), "({x}, {y})");
    }
}

#[test]
fn full_mask_in_every_slot() {
    let mut frame = MonoFrame::new();
    draw_mask(&mut frame, 0, SegmentMask::ALL);
    assert_eq!(frame.lit_count(), FULL_CELL_PIXELS);
    for slot in 1..4 {
        draw_mask(&mut frame, slot, SegmentMask::ALL);
    }
    assert_eq!(frame.lit_count(), 4 * FULL_CELL_PIXELS);
    // Rightmost dot column is the last column of the panel.
    assert!(frame.pixel(83, 36).is_on());
}

#[test]
fn redrawing_a_cell_replaces_it() {
    let mut frame = MonoFrame::new();
    draw_mask(&mut frame, 2, SegmentMask::ALL);
    draw_mask(&mut frame, 2, SegmentMask::SEG_G);
    assert_eq!(frame.lit_count(), 32);
    draw_mask(&mut frame, 2, SegmentMask::BLANK);
    assert_eq!(frame, MonoFrame::new());
}

#[test]
fn redrawing_a_cell_leaves_its_neighbours_alone() {
    let mut frame = MonoFrame::new();
    for slot in 0..4 {
        draw_mask(&mut frame, slot, SegmentMask::ALL);
    }
    draw_colon(&mut frame, true);
    draw_mask(&mut frame, 1, SegmentMask::BLANK);
    assert_eq!(frame.lit_count(), 3 * FULL_CELL_PIXELS + 8);
    assert_eq!(read_mask(&frame, 0), SegmentMask::ALL);
    assert_eq!(read_mask(&frame, 2), SegmentMask::ALL);
}

#[test]
fn slot_past_the_right_edge_is_clipped() {
    let mut frame = MonoFrame::new();
    draw_mask(&mut frame, 4, SegmentMask::ALL);
    draw_mask(&mut frame, u8::MAX, SegmentMask::ALL);
    assert_eq!(frame.lit_count(), 0);
}

#[test]
fn colon_draws_and_erases_two_squares() {
    let mut frame = MonoFrame::new();
    draw_colon(&mut frame, true);
    assert_eq!(frame.lit_count(), 8);
    for area in &COLON_AREAS {
        for point in area.points() {
            assert!(frame.pixel(point.x, point.y).is_on());
        }
    }
    assert!(frame.pixel(40, 19).is_on());
    assert!(frame.pixel(41, 29).is_on());
    draw_colon(&mut frame, false);
    assert_eq!(frame.lit_count(), 0);
}

#[test]
fn colon_does_not_touch_any_cell() {
    let mut frame = MonoFrame::new();
    for slot in 0..4 {
        draw_mask(&mut frame, slot, SegmentMask::ALL);
    }
    let digits = frame.clone();
    draw_colon(&mut frame, true);
    draw_colon(&mut frame, false);
    assert_eq!(frame, digits);
}

#[test]
fn every_wide_character_reads_back() {
    let characters = "0123456789abcdefghijklmnopqrstuvwxyz -*";
    let set = CharacterSet::WIDE;
    for character in characters.chars() {
        let mask = set.encode_char(character).expect("wide set covers the list");
        for slot in 0..4 {
            let mut frame = MonoFrame::new();
            draw_mask(&mut frame, slot, mask);
            assert_eq!(read_mask(&frame, slot), mask, "{character:?} in slot {slot}");
            draw_mask(&mut frame, slot, mask.with_dot());
            assert_eq!(read_mask(&frame, slot), mask.with_dot());
        }
    }
}

// ============================================================================
// Frame buffer
// ============================================================================

#[test]
fn pixels_pack_vertically_lsb_first() {
    let mut frame = MonoFrame::new();
    frame.set_pixel(Point::new(0, 0), BinaryColor::On);
    frame.set_pixel(Point::new(5, 9), BinaryColor::On);
    frame.set_pixel(Point::new(83, 47), BinaryColor::On);
    let bytes = frame.as_bytes();
    assert_eq!(bytes.len(), BUFFER_LEN);
    assert_eq!(bytes[0], 0x01);
    assert_eq!(bytes[84 + 5], 0x02);
    assert_eq!(bytes[BUFFER_LEN - 1], 0x80);
    assert_eq!(frame.lit_count(), 3);

    frame.set_pixel(Point::new(5, 9), BinaryColor::Off);
    assert_eq!(frame.as_bytes()[84 + 5], 0x00);
}

#[test]
fn drawing_off_the_panel_is_clipped() {
    let mut frame = MonoFrame::new();
    frame.fill_rect(-5, -5, 10, 10, BinaryColor::On);
    assert_eq!(frame.lit_count(), 25);

    let mut frame = MonoFrame::new();
    frame.fill_rect(80, 44, 10, 10, BinaryColor::On);
    assert_eq!(frame.lit_count(), 16);

    let mut frame = MonoFrame::new();
    frame.fill_rect(100, 0, 5, 5, BinaryColor::On);
    frame.hline(-20, 60, 200, BinaryColor::On);
    frame.set_pixel(Point::new(84, 0), BinaryColor::On);
    frame.set_pixel(Point::new(-1, 0), BinaryColor::On);
    assert_eq!(frame.lit_count(), 0);
    assert!(frame.pixel(-1, -1).is_off());
}

#[test]
fn fill_sets_every_byte() {
    let mut frame = MonoFrame::new();
    frame.fill(BinaryColor::On);
    assert!(frame.as_bytes().iter().all(|&byte| byte == 0xFF));
    assert_eq!(frame.lit_count(), 84 * 48);
    frame.fill(BinaryColor::Off);
    assert_eq!(frame, MonoFrame::default());
}

#[test]
fn frame_is_an_embedded_graphics_target() {
    let mut frame = MonoFrame::new();
    Line::new(Point::new(0, 0), Point::new(83, 0))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut frame)
        .expect("drawing into a frame cannot fail");
    assert_eq!(frame.lit_count(), 84);
    assert!(frame.as_bytes()[..84].iter().all(|&byte| byte == 0x01));

    // Shapes hanging off the panel are clipped rather than rejected.
    Line::new(Point::new(-10, 47), Point::new(100, 47))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut frame)
        .expect("drawing into a frame cannot fail");
    assert_eq!(frame.lit_count(), 2 * 84);
}
