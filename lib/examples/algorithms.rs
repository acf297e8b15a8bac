/// Algorithm comparison: render the same gradient with every dithering
/// strategy, labelled by name
use braille_rendr::{BrightnessGrid, DitherAlgorithm, RenderConfig, render_grid};

fn main() {
    println!("Braille Renderer - Algorithm Comparison");
    println!("=======================================\n");

    // A horizontal gradient with a vertical falloff, 48x32 sub-pixels
    // (24x8 characters), enough to show each algorithm's texture.
    let grid = BrightnessGrid::from_fn(48, 32, |x, y| {
        let horizontal = x as f32 / 47.0;
        let vertical = 1.0 - y as f32 / 62.0;
        horizontal * vertical
    });

    let mut config = RenderConfig::default();

    for (name, algorithm) in DitherAlgorithm::all() {
        config.algorithm = algorithm;
        match render_grid(&grid, &config) {
            Ok(text) => {
                println!("{name}:");
                print!("{text}");
                println!();
            }
            Err(err) => eprintln!("{name} failed: {err}"),
        }
    }
}
