use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
///
/// `E` is the display transport's error. Operations that never touch the
/// transport (encoding, formatting) leave it at [`Infallible`].
pub type Result<T, E = Infallible> = core::result::Result<T, Error<E>>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = Infallible> {
    /// The starting slot of a write was outside `0..=3`.
    #[display("Position out of range: {slot}")]
    PositionOutOfRange { slot: u8 },

    /// The character has no seven-segment representation in the active character set.
    #[display("Character out of range: {} '{character}'", u32::from(*character))]
    CharacterOutOfRange { character: char },

    /// The text does not fit the fixed-capacity mask buffer.
    #[display("Text longer than {max} characters")]
    TextTooLong { max: usize },

    /// The transport rejected a frame. Its error only has to implement `Debug`.
    #[display("Display transport failed: {_0:?}")]
    Transport(#[error(not(source))] E),
}

impl Error<Infallible> {
    /// Re-type a transport-free error so it can be returned from a drawing call.
    #[must_use]
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Self::PositionOutOfRange { slot } => Error::PositionOutOfRange { slot },
            Self::CharacterOutOfRange { character } => Error::CharacterOutOfRange { character },
            Self::TextTooLong { max } => Error::TextTooLong { max },
            Self::Transport(never) => match never {},
        }
    }
}
