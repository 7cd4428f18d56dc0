use crate::color::{Color, Palette, Swatch};

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;
pub const PIXELS: usize = WIDTH * HEIGHT;

/// One 8x8 image, row-major (`row * WIDTH + column`, row 0 at the top).
pub type Frame = [Color; PIXELS];

/// Frame in palette form, before colors are assigned.
pub type Shape = [Swatch; PIXELS];

pub const fn index(row: usize, column: usize) -> usize {
    row * WIDTH + column
}

/// Resolves every swatch of `shape` against `palette`.
pub const fn paint(shape: &Shape, palette: &Palette) -> Frame {
    let mut frame = [0; PIXELS];
    let mut i = 0;
    while i < PIXELS {
        frame[i] = palette.get(shape[i]);
        i += 1;
    }
    frame
}

pub static PACMAN_CLOSED: Frame = paint(&shapes::PACMAN_CLOSED, &Palette::DEFAULT);
pub static PACMAN_OPEN: Frame = paint(&shapes::PACMAN_OPEN, &Palette::DEFAULT);
/// Walking pose, red cap and brown hair.
pub static MARIO: Frame = paint(&shapes::MARIO, &Palette::DEFAULT);
/// Not a second Mario walk frame: a separate character with its own outline.
pub static LUIGI: Frame = paint(&shapes::LUIGI, &Palette::DEFAULT);
pub static HEART: Frame = paint(&shapes::HEART, &Palette::DEFAULT);

#[derive(Debug, Clone, Copy, PartialEq, Eq, rotate_enum::RotateEnum, strum_macros::EnumIter)]
pub enum Sprite {
    PacmanClosed,
    PacmanOpen,
    Mario,
    Luigi,
    Heart,
}

impl Sprite {
    pub fn name(self) -> &'static str {
        match self {
            Sprite::PacmanClosed => "pacman_closed",
            Sprite::PacmanOpen => "pacman_open",
            Sprite::Mario => "mario",
            Sprite::Luigi => "luigi",
            Sprite::Heart => "heart8x8",
        }
    }

    pub fn frame(self) -> &'static Frame {
        match self {
            Sprite::PacmanClosed => &PACMAN_CLOSED,
            Sprite::PacmanOpen => &PACMAN_OPEN,
            Sprite::Mario => &MARIO,
            Sprite::Luigi => &LUIGI,
            Sprite::Heart => &HEART,
        }
    }

    pub fn shape(self) -> &'static Shape {
        match self {
            Sprite::PacmanClosed => &shapes::PACMAN_CLOSED,
            Sprite::PacmanOpen => &shapes::PACMAN_OPEN,
            Sprite::Mario => &shapes::MARIO,
            Sprite::Luigi => &shapes::LUIGI,
            Sprite::Heart => &shapes::HEART,
        }
    }

    /// Same sprite, colored with a custom palette.
    pub fn paint(self, palette: &Palette) -> Frame {
        paint(self.shape(), palette)
    }
}

#[rustfmt::skip]
pub mod shapes {
    use super::Shape;
    use crate::color::Swatch;

    const BG: Swatch = Swatch::Background;
    const YL: Swatch = Swatch::Yellow;
    const RD: Swatch = Swatch::Red;
    const BL: Swatch = Swatch::Blue;
    const SK: Swatch = Swatch::Skin;
    const BR: Swatch = Swatch::Brown;

    pub const PACMAN_CLOSED: Shape = [
        BG, BG, YL, YL, YL, YL, BG, BG,
        BG, YL, YL, YL, BG, YL, YL, BG,
        YL, YL, YL, YL, YL, YL, YL, YL,
        YL, YL, YL, YL, YL, YL, YL, YL,
        YL, YL, YL, YL, YL, YL, YL, YL,
        YL, YL, YL, YL, YL, YL, YL, YL,
        BG, YL, YL, YL, YL, YL, YL, BG,
        BG, BG, YL, YL, YL, YL, BG, BG,
    ];

    pub const PACMAN_OPEN: Shape = [
        BG, BG, YL, YL, YL, YL, BG, BG,
        BG, YL, YL, YL, BG, YL, YL, BG,
        YL, YL, YL, YL, YL, YL, YL, YL,
        YL, YL, YL, YL, YL, BG, BG, BG,
        YL, YL, YL, YL, BG, BG, BG, BG,
        YL, YL, YL, YL, YL, YL, BG, BG,
        BG, YL, YL, YL, YL, YL, YL, BG,
        BG, BG, YL, YL, YL, YL, BG, BG,
    ];

    pub const MARIO: Shape = [
        BG, RD, RD, RD, RD, RD, BG, BG,
        RD, RD, RD, RD, RD, RD, RD, RD,
        BR, BR, BR, SK, RD, BL, RD, BG,
        BR, SK, BR, SK, SK, BR, SK, SK,
        SK, SK, SK, SK, BR, BR, BR, BG,
        BG, BR, RD, BR, RD, BR, BG, BG,
        SK, RD, SK, RD, SK, RD, SK, BG,
        BG, RD, RD, BG, RD, RD, BG, BG,
    ];

    pub const LUIGI: Shape = [
        BG, BG, RD, RD, RD, RD, BG, BG,
        BG, RD, RD, RD, RD, RD, RD, BG,
        RD, RD, BL, RD, RD, BL, RD, RD,
        RD, BL, BL, BL, BL, BL, BL, RD,
        RD, BL, BL, SK, SK, BL, BL, RD,
        BG, BL, BL, BL, BL, BL, BL, BG,
        BG, BG, BG, BL, BG, BG, BG, BG,
        BG, BG, BL, BG, BG, BG, BG, BG,
    ];

    pub const HEART: Shape = [
        BG, RD, RD, BG, BG, RD, RD, BG,
        RD, RD, RD, RD, RD, RD, RD, RD,
        RD, RD, RD, RD, RD, RD, RD, RD,
        RD, RD, RD, RD, RD, RD, RD, RD,
        BG, RD, RD, RD, RD, RD, RD, BG,
        BG, BG, RD, RD, RD, RD, BG, BG,
        BG, BG, BG, RD, RD, BG, BG, BG,
        BG, BG, BG, BG, BG, BG, BG, BG,
    ];
}
