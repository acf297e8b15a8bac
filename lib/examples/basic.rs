/// Basic example: Convert a simple test image to braille text
///
/// This creates a test image with some basic shapes and prints it as braille
use braille_rendr::{RenderConfig, render_image};
use image::{DynamicImage, GrayImage, Luma};

fn main() {
    println!("Braille Renderer - Basic Example");
    println!("================================\n");

    // Create a simple 128x128 test image
    let width = 128;
    let height = 128;
    let mut img = GrayImage::new(width, height);

    // Fill with a dark background
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, Luma([30]));
        }
    }

    // Draw a bright circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // Bright disc
                img.put_pixel(x, y, Luma([230]));
            } else if (dist - radius).abs() < 3.0 {
                // Soft rim
                img.put_pixel(x, y, Luma([120]));
            }
        }
    }

    // Draw a diagonal line
    for i in 0..width.min(height) {
        img.put_pixel(i, i, Luma([255]));
        if i > 0 {
            img.put_pixel(i - 1, i, Luma([255]));
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = RenderConfig::default();
    let input = DynamicImage::ImageLuma8(img);

    // Fit into a 40x20 character viewport
    match render_image(&input, &config, 40, 20) {
        Ok(text) => {
            println!("Rendered output:\n");
            print!("{text}");
            println!("\nBraille conversion complete!");
        }
        Err(err) => eprintln!("conversion failed: {err}"),
    }
}
