use embedded_graphics::{
    image::ImageDrawable,
    pixelcolor::Rgb888,
    prelude::{Dimensions, DrawTarget, DrawTargetExt, OriginDimensions, Size},
    primitives::Rectangle,
};

use crate::{
    color,
    sprites::{Frame, HEIGHT, WIDTH},
};

/// Lets a frame be placed with `embedded_graphics::image::Image`.
#[derive(Debug, Clone, Copy)]
pub struct SpriteImage<'a> {
    frame: &'a Frame,
}

impl<'a> SpriteImage<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self { frame }
    }
}

impl OriginDimensions for SpriteImage<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl ImageDrawable for SpriteImage<'_> {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(
            &self.bounding_box(),
            self.frame.iter().map(|&c| color::to_rgb888(c)),
        )
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw(&mut target.translated(-area.top_left).clipped(area))
    }
}
