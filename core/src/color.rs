use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// 24-bit color in `0xRRGGBB` form. The top byte is ignored.
pub type Color = u32;

pub const CLR_BG: Color = Palette::DEFAULT.background;
pub const CLR_WHITE: Color = Palette::DEFAULT.white;
pub const CLR_BLACK: Color = Palette::DEFAULT.black;
pub const CLR_PINK: Color = Palette::DEFAULT.pink;
pub const CLR_YELLOW: Color = Palette::DEFAULT.yellow;
pub const CLR_RED: Color = Palette::DEFAULT.red;
pub const CLR_RED_DARK: Color = Palette::DEFAULT.red_dark;
pub const CLR_BLUE: Color = Palette::DEFAULT.blue;
pub const CLR_SKIN: Color = Palette::DEFAULT.skin;
pub const CLR_BROWN: Color = Palette::DEFAULT.brown;

/// Named palette entries the sprite shapes are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum Swatch {
    Background,
    White,
    Black,
    Pink,
    Yellow,
    Red,
    RedDark,
    Blue,
    Skin,
    Brown,
}

impl Swatch {
    pub fn label(self) -> &'static str {
        match self {
            Swatch::Background => "background",
            Swatch::White => "white",
            Swatch::Black => "black",
            Swatch::Pink => "pink",
            Swatch::Yellow => "yellow",
            Swatch::Red => "red",
            Swatch::RedDark => "dark red",
            Swatch::Blue => "blue",
            Swatch::Skin => "skin",
            Swatch::Brown => "brown",
        }
    }
}

/// Color assignment for every [`Swatch`].
///
/// The builder methods are `const`, so a firmware can pick its own colors
/// and still get every frame computed at compile time:
///
/// ```
/// use colorduino_core::color::{Palette, Swatch};
/// use colorduino_core::sprites::{self, Frame};
///
/// const DIM: Palette = Palette::DEFAULT
///     .with(Swatch::Yellow, 0x404000)
///     .with(Swatch::Background, 0x000010);
/// static PACMAN: Frame = sprites::paint(&sprites::shapes::PACMAN_CLOSED, &DIM);
///
/// assert_eq!(PACMAN[0], 0x000010);
/// assert_eq!(PACMAN[2], 0x404000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub white: Color,
    pub black: Color,
    pub pink: Color,
    pub yellow: Color,
    pub red: Color,
    pub red_dark: Color,
    pub blue: Color,
    pub skin: Color,
    pub brown: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        background: 0x000000,
        white: 0xFFFFFF,
        black: 0x000000,
        pink: 0xFF69B4,
        yellow: 0xFFFF00,
        red: 0xFF0000,
        red_dark: 0x320000,
        blue: 0x0000A8,
        skin: 0xF1C27D,
        brown: 0xA85400,
    };

    pub const fn get(&self, swatch: Swatch) -> Color {
        match swatch {
            Swatch::Background => self.background,
            Swatch::White => self.white,
            Swatch::Black => self.black,
            Swatch::Pink => self.pink,
            Swatch::Yellow => self.yellow,
            Swatch::Red => self.red,
            Swatch::RedDark => self.red_dark,
            Swatch::Blue => self.blue,
            Swatch::Skin => self.skin,
            Swatch::Brown => self.brown,
        }
    }

    pub const fn with(mut self, swatch: Swatch, color: Color) -> Self {
        match swatch {
            Swatch::Background => self.background = color,
            Swatch::White => self.white = color,
            Swatch::Black => self.black = color,
            Swatch::Pink => self.pink = color,
            Swatch::Yellow => self.yellow = color,
            Swatch::Red => self.red = color,
            Swatch::RedDark => self.red_dark = color,
            Swatch::Blue => self.blue = color,
            Swatch::Skin => self.skin = color,
            Swatch::Brown => self.brown = color,
        }
        self
    }

    pub fn set(&mut self, swatch: Swatch, color: Color) {
        log::debug!("Palette {} set to {:#08x}", swatch.label(), color);
        *self = self.with(swatch, color);
    }
}

/// Splits a color into its red, green and blue bytes.
pub const fn channels(color: Color) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

pub const fn from_channels(r: u8, g: u8, b: u8) -> Color {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn to_rgb888(color: Color) -> Rgb888 {
    let (r, g, b) = channels(color);
    Rgb888::new(r, g, b)
}

pub fn from_rgb888(color: Rgb888) -> Color {
    from_channels(color.r(), color.g(), color.b())
}
