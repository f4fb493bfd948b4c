//! The seam between the emulator and whatever moves pixels to the glass.

/// Pushes a whole packed frame to a display.
///
/// [`Pcd8544`](crate::Pcd8544) is the hardware implementation. Tests and simulators can record
/// the frames instead.
pub trait DisplayTransport {
    /// Error reported by the underlying bus.
    type Error: core::fmt::Debug;

    /// Send `buffer` (the full [`MonoFrame`](crate::MonoFrame) bytes) to the display.
    ///
    /// # Errors
    ///
    /// Returns the bus error unchanged. Callers do not retry.
    fn data(&mut self, buffer: &[u8]) -> Result<(), Self::Error>;
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    type Error = T::Error;

    fn data(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        T::data(self, buffer)
    }
}
