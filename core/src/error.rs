use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel index past the end of an 8x8 frame.
    IndexOutOfRange { index: usize },
    /// Destination slice cannot hold a full frame.
    BufferTooSmall { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index } => {
                write!(f, "pixel index {index} out of range (max {})", crate::sprites::PIXELS - 1)
            }
            Error::BufferTooSmall { len } => {
                write!(f, "buffer holds {len} pixels, need {}", crate::sprites::PIXELS)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
