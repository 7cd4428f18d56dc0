use colorduino_core::{
    color::Color,
    framebuffer::Canvas,
    sprites::{HEIGHT, WIDTH, index},
};
use log::info;

// Unlit gap between neighbouring LEDs
const GAP_COLOR: u32 = 0x101010;

/// Simulated 8x8 matrix: every LED becomes a `cell`x`cell` block.
pub struct MinifbDisplay {
    display_buffer: Vec<u32>,
    window: minifb::Window,
    cell: usize,
}

impl MinifbDisplay {
    pub fn new(cell: usize) -> Self {
        let cell = cell.max(4);
        let (width, height) = (WIDTH * cell, HEIGHT * cell);
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: false,
            scale: minifb::Scale::X1,
            ..minifb::WindowOptions::default()
        };
        let mut window = minifb::Window::new("Colorduino Preview", width, height, options)
            .unwrap_or_else(|e| {
                panic!("Unable to open window: {}", e);
            });
        window.set_target_fps(30);
        info!("Opened {}x{} preview, {} px per LED", width, height, cell);

        Self {
            display_buffer: vec![GAP_COLOR; width * height],
            window,
            cell,
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn is_pressed(&self, key: minifb::Key) -> bool {
        self.window.is_key_pressed(key, minifb::KeyRepeat::No)
    }

    fn paint_led(&mut self, x: usize, y: usize, color: Color) {
        let stride = WIDTH * self.cell;
        let gap = (self.cell / 8).max(1);
        for py in gap..self.cell - gap {
            let row = (y * self.cell + py) * stride;
            for px in gap..self.cell - gap {
                self.display_buffer[row + x * self.cell + px] = color & 0xFFFFFF;
            }
        }
    }

    /// Shows the canvas in the order the matrix driver would receive it.
    pub fn show(&mut self, canvas: &Canvas) {
        let frame = canvas.as_frame();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.paint_led(x, y, frame[index(y, x)]);
            }
        }
        self.window
            .update_with_buffer(&self.display_buffer, WIDTH * self.cell, HEIGHT * self.cell)
            .unwrap();
    }

    pub fn update(&mut self) {
        self.window.update();
    }
}
