extern crate std;

use embedded_graphics::{
    Drawable,
    image::{Image, ImageDrawableExt},
    pixelcolor::Rgb888,
    prelude::{Point, Size},
    primitives::Rectangle,
};
use strum::IntoEnumIterator;

use crate::{
    color::*,
    error::Error,
    framebuffer::{Canvas, Rotation},
    ghost::*,
    image::SpriteImage,
    sprites::*,
};

const BODY_COLORS: [Color; 5] = [0x000000, 0xFFFFFF, 0xFF00FF, 0x123456, CLR_RED];

#[test]
fn tables_are_full_frames() {
    assert_eq!(GHOST_MASK.len(), WIDTH * HEIGHT);
    for sprite in Sprite::iter() {
        assert_eq!(sprite.frame().len(), 64, "{}", sprite.name());
        assert_eq!(sprite.shape().len(), 64, "{}", sprite.name());
    }
}

#[test]
fn mask_values_are_roles() {
    for (i, &m) in GHOST_MASK.iter().enumerate() {
        assert!(m <= 3, "mask[{i}] = {m}");
        assert_eq!(MaskRole::from_mask(m).mask(), m);
    }
}

#[test]
fn ghost_color_per_role() {
    for body in BODY_COLORS {
        for (i, &m) in GHOST_MASK.iter().enumerate() {
            let expected = match m {
                0 => CLR_BG,
                1 => body,
                2 => 0xFFFFFF,
                3 => 0x000000,
                _ => unreachable!(),
            };
            assert_eq!(ghost_color_at(i, body), expected, "index {i}");
        }
    }
}

#[test]
fn unknown_mask_value_is_background() {
    assert_eq!(MaskRole::from_mask(4), MaskRole::Background);
    assert_eq!(MaskRole::from_mask(0xFF), MaskRole::Background);
    assert_eq!(MaskRole::from_mask(9).resolve(&Palette::DEFAULT, 0xABCDEF), CLR_BG);
}

#[test]
fn fill_matches_color_at() {
    let mut buf = [0xDEADBEEF; PIXELS];
    fill_ghost_frame(&mut buf, 0xFF00FF);
    for (i, &c) in buf.iter().enumerate() {
        assert_eq!(c, ghost_color_at(i, 0xFF00FF));
    }
}

#[test]
fn fill_is_idempotent() {
    let mut first = [0; PIXELS];
    let mut second = [0x777777; PIXELS];
    fill_ghost_frame(&mut first, 0x00FF80);
    fill_ghost_frame(&mut second, 0x00FF80);
    fill_ghost_frame(&mut second, 0x00FF80);
    assert_eq!(first, second);
}

#[test]
fn body_color_only_touches_body_pixels() {
    let mut a = [0; PIXELS];
    let mut b = [0; PIXELS];
    fill_ghost_frame(&mut a, 0x0000FF);
    fill_ghost_frame(&mut b, 0x00FF00);
    for i in 0..PIXELS {
        if GHOST_MASK[i] == 1 {
            assert_ne!(a[i], b[i], "index {i}");
        } else {
            assert_eq!(a[i], b[i], "index {i}");
        }
    }
}

#[test]
fn ghost_top_row() {
    let mut buf = [0; PIXELS];
    fill_ghost_frame(&mut buf, 0x123456);
    assert_eq!(
        buf[..WIDTH],
        [CLR_BG, CLR_BG, 0x123456, 0x123456, 0x123456, 0x123456, CLR_BG, CLR_BG]
    );
}

#[test]
fn ghost_eyes() {
    // row 2: body, body, white, pupil, body, white, pupil, body
    assert_eq!(ghost_color_at(index(2, 2), CLR_PINK), CLR_WHITE);
    assert_eq!(ghost_color_at(index(2, 3), CLR_PINK), CLR_BLACK);
    assert_eq!(ghost_color_at(index(2, 4), CLR_PINK), CLR_PINK);
    assert_eq!(ghost_color_at(index(3, 6), CLR_PINK), CLR_WHITE);
}

#[test]
fn checked_lookup_rejects_out_of_range() {
    assert_eq!(try_ghost_color_at(63, 0x010203), Ok(0x010203));
    assert_eq!(try_ghost_color_at(64, 0x010203), Err(Error::IndexOutOfRange { index: 64 }));
    assert_eq!(
        try_ghost_color_at(usize::MAX, 0),
        Err(Error::IndexOutOfRange { index: usize::MAX })
    );
}

#[test]
#[should_panic]
fn unchecked_range_panics_on_plain_lookup() {
    let index = std::hint::black_box(PIXELS);
    ghost_color_at(index, 0);
}

#[test]
fn unchecked_lookup_matches_checked() {
    for i in 0..PIXELS {
        let fast = unsafe { ghost_color_at_unchecked(i, 0x445566) };
        assert_eq!(fast, ghost_color_at(i, 0x445566));
    }
}

#[test]
fn fill_slice() {
    let mut short = [0; PIXELS - 1];
    assert_eq!(
        fill_ghost_slice(&mut short, 0xFF0000),
        Err(Error::BufferTooSmall { len: PIXELS - 1 })
    );
    assert!(short.iter().all(|&c| c == 0));

    let mut long = [0xAAAAAA; PIXELS + 4];
    fill_ghost_slice(&mut long, 0xFF0000).unwrap();
    let mut expected = [0; PIXELS];
    fill_ghost_frame(&mut expected, 0xFF0000);
    assert_eq!(long[..PIXELS], expected);
    assert_eq!(long[PIXELS..], [0xAAAAAA; 4]);
}

#[test]
fn const_ghost_frame() {
    static BLUE_GHOST: Frame = ghost_frame(&Palette::DEFAULT, CLR_BLUE);
    let mut buf = [0; PIXELS];
    fill_ghost_frame(&mut buf, CLR_BLUE);
    assert_eq!(BLUE_GHOST, buf);
}

#[test]
fn ghost_with_custom_palette() {
    let palette = Palette::DEFAULT
        .with(Swatch::Background, 0x010101)
        .with(Swatch::White, 0xEEEEEE)
        .with(Swatch::Black, 0x202020);
    let mut buf = [0; PIXELS];
    fill_ghost_frame_with(&palette, &mut buf, 0x00FF00);
    assert_eq!(buf[0], 0x010101);
    assert_eq!(buf[2], 0x00FF00);
    assert_eq!(buf[index(2, 2)], 0xEEEEEE);
    assert_eq!(buf[index(2, 3)], 0x202020);
}

#[test]
fn pacman_literal_pixels() {
    assert_eq!(PACMAN_CLOSED[0], CLR_BG);
    assert_eq!(PACMAN_CLOSED[2], CLR_YELLOW);
    // the mouth is only cut into the open frame
    assert_eq!(PACMAN_CLOSED[index(3, 7)], CLR_YELLOW);
    assert_eq!(PACMAN_OPEN[index(3, 7)], CLR_BG);
    assert_eq!(PACMAN_OPEN[index(4, 4)], CLR_BG);
}

#[test]
fn default_palette_values() {
    assert_eq!(CLR_BG, 0x000000);
    assert_eq!(CLR_WHITE, 0xFFFFFF);
    assert_eq!(CLR_BLACK, 0x000000);
    assert_eq!(CLR_PINK, 0xFF69B4);
    assert_eq!(CLR_YELLOW, 0xFFFF00);
    assert_eq!(CLR_RED, 0xFF0000);
    assert_eq!(CLR_RED_DARK, 0x320000);
    assert_eq!(CLR_BLUE, 0x0000A8);
    assert_eq!(CLR_SKIN, 0xF1C27D);
    assert_eq!(CLR_BROWN, 0xA85400);
    assert_eq!(Palette::default(), Palette::DEFAULT);
}

#[test]
fn palette_get_set_round_trip() {
    let mut palette = Palette::DEFAULT;
    for (i, swatch) in Swatch::iter().enumerate() {
        palette.set(swatch, i as Color);
    }
    for (i, swatch) in Swatch::iter().enumerate() {
        assert_eq!(palette.get(swatch), i as Color, "{}", swatch.label());
    }
}

#[test]
fn frames_follow_their_shapes() {
    for sprite in Sprite::iter() {
        assert_eq!(sprite.frame(), &sprite.paint(&Palette::DEFAULT), "{}", sprite.name());
    }
}

#[test]
fn repainting_changes_only_that_swatch() {
    let palette = Palette::DEFAULT.with(Swatch::Red, 0x00FFFF);
    let heart = Sprite::Heart.paint(&palette);
    for i in 0..PIXELS {
        if HEART[i] == CLR_RED {
            assert_eq!(heart[i], 0x00FFFF);
        } else {
            assert_eq!(heart[i], HEART[i]);
        }
    }
}

#[test]
fn mario_and_luigi_differ() {
    assert_ne!(MARIO, LUIGI);
    assert_eq!(MARIO[index(2, 0)], CLR_BROWN);
    assert_eq!(LUIGI[index(2, 2)], CLR_BLUE);
    assert!(HEART[index(7, 0)..].iter().all(|&c| c == CLR_BG));
}

#[test]
fn sprite_cycle_wraps() {
    assert_eq!(Sprite::PacmanClosed.next(), Sprite::PacmanOpen);
    assert_eq!(Sprite::Heart.next(), Sprite::PacmanClosed);
    assert_eq!(Sprite::PacmanClosed.prev(), Sprite::Heart);
    assert_eq!(Sprite::iter().count(), 5);
}

#[test]
fn channel_helpers() {
    assert_eq!(channels(0xF1C27D), (0xF1, 0xC2, 0x7D));
    assert_eq!(from_channels(0xA8, 0x54, 0x00), CLR_BROWN);
    assert_eq!(to_rgb888(CLR_PINK), Rgb888::new(0xFF, 0x69, 0xB4));
    assert_eq!(from_rgb888(Rgb888::new(0x00, 0x00, 0xA8)), CLR_BLUE);
}

#[test]
fn canvas_blit_unrotated() {
    let mut canvas = Canvas::default();
    assert!(canvas.as_frame().iter().all(|&c| c == CLR_BG));
    canvas.blit(&PACMAN_OPEN);
    assert_eq!(canvas.as_frame(), &PACMAN_OPEN);
    canvas.clear_screen(CLR_WHITE);
    assert!(canvas.as_frame().iter().all(|&c| c == CLR_WHITE));
}

#[test]
fn canvas_rotation() {
    let mut canvas = Canvas::with_rotation(Rotation::Rotate90);
    canvas.set_pixel(1, 0, CLR_RED);
    assert_eq!(canvas.pixel(1, 0), Some(CLR_RED));
    assert_eq!(canvas.as_frame()[index(6, 0)], CLR_RED);

    canvas.set_rotation(Rotation::Rotate180);
    canvas.clear_screen(CLR_BG);
    canvas.set_pixel(0, 0, CLR_BLUE);
    assert_eq!(canvas.as_frame()[PIXELS - 1], CLR_BLUE);

    canvas.set_rotation(Rotation::Rotate270);
    canvas.clear_screen(CLR_BG);
    canvas.set_pixel(1, 0, CLR_SKIN);
    assert_eq!(canvas.as_frame()[index(1, 7)], CLR_SKIN);
}

#[test]
fn canvas_rotation_preserves_image() {
    for rotation in [Rotation::Rotate0, Rotation::Rotate90, Rotation::Rotate180, Rotation::Rotate270] {
        let mut canvas = Canvas::with_rotation(rotation);
        canvas.blit(&MARIO);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(canvas.pixel(x, y), Some(MARIO[index(y, x)]), "{}", rotation.repr());
            }
        }
    }
}

#[test]
fn canvas_ignores_out_of_range() {
    let mut canvas = Canvas::default();
    canvas.set_pixel(-1, 0, CLR_RED);
    canvas.set_pixel(8, 3, CLR_RED);
    canvas.set_pixel(3, 8, CLR_RED);
    assert!(canvas.as_frame().iter().all(|&c| c == CLR_BG));
    assert_eq!(canvas.pixel(8, 0), None);
}

#[test]
fn rotation_degrees() {
    assert_eq!(Rotation::from_degrees(90), Some(Rotation::Rotate90));
    assert_eq!(Rotation::from_degrees(45), None);
    assert_eq!(Rotation::Rotate270.next(), Rotation::Rotate0);
}

#[test]
fn draw_sprite_image() {
    let mut canvas = Canvas::default();
    let sprite = SpriteImage::new(&HEART);
    Image::new(&sprite, Point::zero()).draw(&mut canvas).unwrap();
    assert_eq!(canvas.as_frame(), &HEART);

    // shifted right by 4, the rest falls off the edge
    let mut canvas = Canvas::default();
    Image::new(&sprite, Point::new(4, 0)).draw(&mut canvas).unwrap();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let expected = if x < 4 { CLR_BG } else { HEART[index(y, x - 4)] };
            assert_eq!(canvas.pixel(x, y), Some(expected));
        }
    }
}

#[test]
fn draw_sub_image() {
    let mut canvas = Canvas::default();
    let sprite = SpriteImage::new(&PACMAN_OPEN);
    let row = sprite.sub_image(&Rectangle::new(Point::new(0, 4), Size::new(8, 1)));
    Image::new(&row, Point::zero()).draw(&mut canvas).unwrap();
    assert_eq!(canvas.as_frame()[..WIDTH], PACMAN_OPEN[index(4, 0)..index(5, 0)]);
    assert!(canvas.as_frame()[WIDTH..].iter().all(|&c| c == CLR_BG));
}

#[test]
fn error_messages() {
    assert_eq!(
        std::format!("{}", Error::IndexOutOfRange { index: 70 }),
        "pixel index 70 out of range (max 63)"
    );
    assert_eq!(
        std::format!("{}", Error::BufferTooSmall { len: 10 }),
        "buffer holds 10 pixels, need 64"
    );
}
