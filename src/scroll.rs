//! Marquee frames for text wider than the display.

use crate::CELL_COUNT;
use crate::char_set::CharacterSet;
use crate::segments::SegmentMask;
use crate::Result;

/// One screenful: the masks for cells 0 through 3.
pub type Window = [SegmentMask; CELL_COUNT];

/// What is being scrolled. Text is encoded lazily, one window at a time.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Text { text: &'a str, char_set: CharacterSet },
    Masks(&'a [SegmentMask]),
}

/// Iterator over the frames of a right-to-left scroll.
///
/// The text enters from the right edge of a blank display and leaves off the left edge, one
/// cell per frame. For `n` masks there are `n + 5` frames; the first and last are blank.
/// Pacing is up to the caller: write each frame to slot 0, then wait.
///
/// The frames borrow their source, so any length can be scrolled.
#[derive(Debug, Clone)]
pub struct ScrollFrames<'a> {
    source: Source<'a>,
    len: usize,
    next: usize,
}

impl<'a> ScrollFrames<'a> {
    /// Frames for an already-encoded sequence.
    #[must_use]
    pub const fn new(masks: &'a [SegmentMask]) -> Self {
        Self {
            source: Source::Masks(masks),
            len: masks.len(),
            next: 0,
        }
    }

    /// Frames for `text` in `char_set`.
    ///
    /// Every character is checked here, so iteration never fails.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterOutOfRange`](crate::Error::CharacterOutOfRange) for the first
    /// character `char_set` cannot show.
    pub fn from_text(text: &'a str, char_set: CharacterSet) -> Result<Self> {
        let mut len = 0_usize;
        for character in text.chars() {
            char_set.encode_char(character)?;
            len = len.saturating_add(1);
        }
        Ok(Self {
            source: Source::Text { text, char_set },
            len,
            next: 0,
        })
    }

    /// Total number of frames, including ones already yielded.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.len.saturating_add(CELL_COUNT).saturating_add(1)
    }

    /// Mask `index` of the source, or a blank past either end.
    fn mask(&self, index: usize) -> SegmentMask {
        match self.source {
            Source::Masks(masks) => masks.get(index).copied(),
            Source::Text { text, char_set } => text
                .chars()
                .nth(index)
                .and_then(|character| char_set.encode_char(character).ok()),
        }
        .unwrap_or(SegmentMask::BLANK)
    }

    /// The window starting at `frame` in the blank-padded sequence.
    ///
    /// Padded position `p` holds mask `p - 4` when that is in range and a blank otherwise.
    fn window(&self, frame: usize) -> Window {
        core::array::from_fn(|cell| {
            frame
                .saturating_add(cell)
                .checked_sub(CELL_COUNT)
                .map_or(SegmentMask::BLANK, |index| self.mask(index))
        })
    }
}

impl Iterator for ScrollFrames<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.next >= self.frame_count() {
            return None;
        }
        let window = self.window(self.next);
        self.next = self.next.saturating_add(1);
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScrollFrames<'_> {}
