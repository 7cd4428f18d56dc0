use argh::FromArgs;
use colorduino_core::{
    color::{CLR_BG, CLR_PINK, CLR_RED, Color},
    framebuffer::{Canvas, Rotation},
    ghost,
    sprites::{Frame, PIXELS, Sprite},
};
use log::info;

use crate::minifb_display::MinifbDisplay;

mod minifb_display;

/// Ghost body colors cycled with `C`.
const GHOST_COLORS: [Color; 4] = [CLR_RED, CLR_PINK, 0x00FFFF, 0xFFB852];

#[derive(FromArgs)]
/// Preview the sprite tables on a simulated 8x8 matrix.
///
/// Left/Right: previous/next sprite, G: toggle ghost, C: next ghost color,
/// R: rotate, Escape: quit.
struct Args {
    /// initial ghost body color, e.g. ff00ff
    #[argh(option, from_str_fn(parse_color))]
    ghost_color: Option<Color>,

    /// pixels per LED
    #[argh(option, default = "32")]
    scale: usize,

    /// matrix rotation in degrees (0, 90, 180, 270)
    #[argh(option, default = "0")]
    rotation: u16,
}

fn parse_color(value: &str) -> Result<Color, String> {
    let digits = value.trim_start_matches("0x").trim_start_matches('#');
    let color = Color::from_str_radix(digits, 16).map_err(|e| format!("{value}: {e}"))?;
    if color > 0xFFFFFF {
        return Err(format!("{value}: more than 24 bits"));
    }
    Ok(color)
}

struct Preview {
    sprite: Sprite,
    ghost: bool,
    ghost_color: Color,
    ghost_frame: Frame,
}

impl Preview {
    fn new(ghost_color: Option<Color>) -> Self {
        let mut preview = Self {
            sprite: Sprite::PacmanClosed,
            ghost: ghost_color.is_some(),
            ghost_color: ghost_color.unwrap_or(GHOST_COLORS[0]),
            ghost_frame: [0; PIXELS],
        };
        ghost::fill_ghost_frame(&mut preview.ghost_frame, preview.ghost_color);
        preview
    }

    fn next_ghost_color(&mut self) {
        let current = GHOST_COLORS.iter().position(|&c| c == self.ghost_color);
        self.ghost_color = match current {
            Some(i) => GHOST_COLORS[(i + 1) % GHOST_COLORS.len()],
            None => GHOST_COLORS[0],
        };
        ghost::fill_ghost_frame(&mut self.ghost_frame, self.ghost_color);
        info!("Ghost body color {:#08x}", self.ghost_color);
    }

    fn frame(&self) -> &Frame {
        if self.ghost { &self.ghost_frame } else { self.sprite.frame() }
    }

    fn label(&self) -> &'static str {
        if self.ghost { "ghost" } else { self.sprite.name() }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let rotation = Rotation::from_degrees(args.rotation).unwrap_or_else(|| {
        log::warn!("Unsupported rotation {}, using 0°", args.rotation);
        Rotation::Rotate0
    });

    let mut canvas = Canvas::with_rotation(rotation);
    let mut display = MinifbDisplay::new(args.scale);
    let mut preview = Preview::new(args.ghost_color);
    let mut dirty = true;

    info!("Colorduino preview started");

    while display.is_open() {
        display.update();

        if display.is_pressed(minifb::Key::Right) {
            preview.ghost = false;
            preview.sprite = preview.sprite.next();
            dirty = true;
        } else if display.is_pressed(minifb::Key::Left) {
            preview.ghost = false;
            preview.sprite = preview.sprite.prev();
            dirty = true;
        } else if display.is_pressed(minifb::Key::G) {
            preview.ghost = !preview.ghost;
            dirty = true;
        } else if display.is_pressed(minifb::Key::C) {
            preview.ghost = true;
            preview.next_ghost_color();
            dirty = true;
        } else if display.is_pressed(minifb::Key::R) {
            canvas.set_rotation(canvas.rotation().next());
            info!("Rotation {}", canvas.rotation().repr());
            dirty = true;
        }

        if dirty {
            info!("Showing {}", preview.label());
            canvas.clear_screen(CLR_BG);
            canvas.blit(preview.frame());
            display.show(&canvas);
            dirty = false;
        }
    }
}
