use embedded_graphics::{
    Pixel,
    pixelcolor::Rgb888,
    prelude::{DrawTarget, OriginDimensions, Size},
};

use crate::{
    color::{self, CLR_BG, Color},
    sprites::{Frame, HEIGHT, PIXELS, WIDTH, index},
};

/// Mounting orientation of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, rotate_enum::RotateEnum)]
pub enum Rotation {
    /// Row 0 at the top
    Rotate0,
    /// 90° clockwise
    Rotate90,
    /// 180° rotation (upside-down)
    Rotate180,
    /// 270° clockwise / 90° counter-clockwise
    Rotate270,
}

impl Rotation {
    pub fn repr(self) -> &'static str {
        match self {
            Rotation::Rotate0 => "0°",
            Rotation::Rotate90 => "90°",
            Rotation::Rotate180 => "180°",
            Rotation::Rotate270 => "270°",
        }
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Rotate0),
            90 => Some(Rotation::Rotate90),
            180 => Some(Rotation::Rotate180),
            270 => Some(Rotation::Rotate270),
            _ => None,
        }
    }

    fn physical(self, x: usize, y: usize) -> (usize, usize) {
        match self {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (y, HEIGHT - 1 - x),
            Rotation::Rotate180 => (WIDTH - 1 - x, HEIGHT - 1 - y),
            Rotation::Rotate270 => (WIDTH - 1 - y, x),
        }
    }
}

/// RAM copy of what the matrix should show.
///
/// Drawing goes through the rotation; [`Canvas::as_frame`] hands out the
/// physical pixel order a matrix driver shifts out.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Frame,
    pub rotation: Rotation,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::with_rotation(Rotation::Rotate0)
    }
}

impl Canvas {
    pub fn with_rotation(rotation: Rotation) -> Self {
        Self { pixels: [CLR_BG; PIXELS], rotation }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn as_frame(&self) -> &Frame {
        &self.pixels
    }

    pub fn clear_screen(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let (x, y) = self.rotation.physical(x as usize, y as usize);
        self.pixels[index(y, x)] = color;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let (x, y) = self.rotation.physical(x, y);
        Some(self.pixels[index(y, x)])
    }

    /// Copies a whole frame onto the canvas, honoring the rotation.
    pub fn blit(&mut self, src: &Frame) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.set_pixel(x as i32, y as i32, src[index(y, x)]);
            }
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color::from_rgb888(color));
        }
        Ok(())
    }
}
