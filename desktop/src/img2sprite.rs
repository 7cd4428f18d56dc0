use std::fmt::Write;

use argh::FromArgs;
use colorduino_core::{
    color::{self, Color},
    ghost::MaskRole,
    sprites::{HEIGHT, WIDTH},
};
use image::RgbaImage;

#[derive(FromArgs)]
/// Convert an 8x8 image into a Rust frame table
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output .rs path, stdout if omitted
    #[argh(option, short = 'o')]
    output_path: Option<String>,

    /// table name
    #[argh(option, short = 'n', default = "String::from(\"SPRITE\")")]
    name: String,

    /// emit a ghost-style role mask instead of colors
    #[argh(switch, short = 'm')]
    mask: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path).expect("Failed to open input image");
    if image.width() as usize != WIDTH || image.height() as usize != HEIGHT {
        panic!(
            "Input image is {}x{}, expected {}x{}",
            image.width(),
            image.height(),
            WIDTH,
            HEIGHT
        );
    }
    let image = image.into_rgba8();

    let source = if args.mask {
        encode_mask(&image, &args.name)
    } else {
        encode_frame(&image, &args.name)
    };

    match args.output_path {
        Some(path) => {
            std::fs::write(&path, source).expect("Failed to write output file");
            log::info!("Wrote {} to {}", args.name, path);
        }
        None => print!("{source}"),
    }
}

fn pixels(image: &RgbaImage) -> impl Iterator<Item = [u8; 4]> + '_ {
    (0..HEIGHT).flat_map(move |y| (0..WIDTH).map(move |x| image.get_pixel(x as u32, y as u32).0))
}

fn encode_frame(image: &RgbaImage, name: &str) -> String {
    let colors: Vec<Color> = pixels(image)
        .map(|[r, g, b, a]| if a < 128 { color::CLR_BG } else { color::from_channels(r, g, b) })
        .collect();

    let mut out = format!("pub static {name}: Frame = [\n");
    for row in colors.chunks(WIDTH) {
        out.push_str("   ");
        for c in row {
            write!(out, " {:#08x},", c).unwrap();
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

/// Transparent pixels are background, light ones eye white, dark ones
/// pupils and everything else body.
fn classify([r, g, b, a]: [u8; 4]) -> MaskRole {
    if a < 128 {
        MaskRole::Background
    } else if r >= 0xC0 && g >= 0xC0 && b >= 0xC0 {
        MaskRole::EyeWhite
    } else if r <= 0x40 && g <= 0x40 && b <= 0x40 {
        MaskRole::Pupil
    } else {
        MaskRole::Body
    }
}

fn encode_mask(image: &RgbaImage, name: &str) -> String {
    let roles: Vec<u8> = pixels(image).map(|p| classify(p).mask()).collect();

    let mut out = format!("pub static {name}: [u8; {}] = [\n", WIDTH * HEIGHT);
    for row in roles.chunks(WIDTH) {
        out.push_str("   ");
        for m in row {
            write!(out, " {m},").unwrap();
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}
