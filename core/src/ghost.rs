//! Recolorable ghost.
//!
//! The ghost is stored as a role mask instead of colors, so one table covers
//! every body color. Mask values: 0 = background, 1 = body, 2 = eye white,
//! 3 = pupil.

use log::trace;

use crate::{
    color::{Color, Palette},
    error::{Error, Result},
    sprites::{Frame, PIXELS},
};

#[rustfmt::skip]
pub static GHOST_MASK: [u8; PIXELS] = [
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 2, 3, 1, 2, 3, 1,
    1, 1, 2, 2, 1, 2, 2, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 1, 1, 0, 1, 1, 1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskRole {
    Background,
    Body,
    EyeWhite,
    Pupil,
}

impl MaskRole {
    /// Unknown mask values fall back to background.
    pub const fn from_mask(value: u8) -> Self {
        match value {
            1 => MaskRole::Body,
            2 => MaskRole::EyeWhite,
            3 => MaskRole::Pupil,
            _ => MaskRole::Background,
        }
    }

    pub const fn mask(self) -> u8 {
        match self {
            MaskRole::Background => 0,
            MaskRole::Body => 1,
            MaskRole::EyeWhite => 2,
            MaskRole::Pupil => 3,
        }
    }

    pub const fn resolve(self, palette: &Palette, body: Color) -> Color {
        match self {
            MaskRole::Background => palette.background,
            MaskRole::Body => body,
            MaskRole::EyeWhite => palette.white,
            MaskRole::Pupil => palette.black,
        }
    }
}

/// Color of ghost pixel `index` with the given body color.
///
/// # Panics
/// If `index` is not below [`PIXELS`]. Use [`try_ghost_color_at`] for a
/// fallible lookup or [`ghost_color_at_unchecked`] in hot loops that already
/// guarantee the range.
pub const fn ghost_color_at(index: usize, body: Color) -> Color {
    ghost_color_with(&Palette::DEFAULT, index, body)
}

pub const fn ghost_color_with(palette: &Palette, index: usize, body: Color) -> Color {
    MaskRole::from_mask(GHOST_MASK[index]).resolve(palette, body)
}

pub fn try_ghost_color_at(index: usize, body: Color) -> Result<Color> {
    if index >= PIXELS {
        return Err(Error::IndexOutOfRange { index });
    }
    Ok(ghost_color_at(index, body))
}

/// # Safety
/// `index` must be below [`PIXELS`].
pub unsafe fn ghost_color_at_unchecked(index: usize, body: Color) -> Color {
    let mask = unsafe { *GHOST_MASK.get_unchecked(index) };
    MaskRole::from_mask(mask).resolve(&Palette::DEFAULT, body)
}

pub fn fill_ghost_frame(dest: &mut Frame, body: Color) {
    fill_ghost_frame_with(&Palette::DEFAULT, dest, body);
}

pub fn fill_ghost_frame_with(palette: &Palette, dest: &mut Frame, body: Color) {
    trace!("Filling ghost frame, body {:#08x}", body);
    for (i, pixel) in dest.iter_mut().enumerate() {
        *pixel = ghost_color_with(palette, i, body);
    }
}

/// Fills the first [`PIXELS`] slots of `dest`; anything past them is left alone.
pub fn fill_ghost_slice(dest: &mut [Color], body: Color) -> Result<()> {
    let Some(frame) = dest.first_chunk_mut::<PIXELS>() else {
        return Err(Error::BufferTooSmall { len: dest.len() });
    };
    fill_ghost_frame(frame, body);
    Ok(())
}

/// Ghost frame built in const context, for firmware that wants a fixed
/// ghost color baked into flash.
pub const fn ghost_frame(palette: &Palette, body: Color) -> Frame {
    let mut frame = [0; PIXELS];
    let mut i = 0;
    while i < PIXELS {
        frame[i] = ghost_color_with(palette, i, body);
        i += 1;
    }
    frame
}
