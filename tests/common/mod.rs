//! Transports shared by the integration tests.
#![allow(dead_code, reason = "Each test binary uses a different subset.")]

use nokia_7seg::{BUFFER_LEN, DisplayTransport};

/// Keeps a copy of every frame it is sent.
#[derive(Default)]
pub struct RecordingTransport {
    pub frames: Vec<[u8; BUFFER_LEN]>,
}

impl RecordingTransport {
    pub fn last(&self) -> &[u8; BUFFER_LEN] {
        self.frames.last().expect("at least one frame was sent")
    }
}

impl DisplayTransport for RecordingTransport {
    type Error = core::convert::Infallible;

    fn data(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        let frame: [u8; BUFFER_LEN] = buffer.try_into().expect("whole frames only");
        self.frames.push(frame);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// Accepts `remaining` frames, then fails every call.
pub struct FailingTransport {
    pub remaining: usize,
}

impl DisplayTransport for FailingTransport {
    type Error = BusError;

    fn data(&mut self, _buffer: &[u8]) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            return Err(BusError);
        }
        self.remaining -= 1;
        Ok(())
    }
}
