//! Renders the palette of a picker, with the indicator drawn on top, after a
//! short scripted interaction.

use colorpick::{Channel, ColorPicker, PickerConfig, Point, PointerTarget, Rgba, Vector};
use image::{Rgb, RgbImage};

fn render(picker: &ColorPicker) -> Option<RgbImage> {
    let raster = picker.raster()?;
    let config = picker.config();

    let width = config.palette_size.width.round() as u32;
    let height = config.palette_size.height.round() as u32;
    let dim = raster.dimension();

    // Nearest sampling, the raster is much smaller than the palette.
    let mut img = RgbImage::from_fn(width, height, |x, y| {
        let cx = x as usize * dim / width as usize;
        // Raster rows start at the bottom.
        let cy = dim - 1 - (y as usize * dim / height as usize);
        let [r, g, b, _] = Rgba::from_rgb(raster.sample(cx, cy), 1.0).to_rgba8();
        Rgb([r, g, b])
    });

    let half = config.pointer_size / 2.0;
    let position = picker.indicator_position();
    let center = (
        (position.x + half).round() as i32,
        (position.y + half).round() as i32,
    );
    let [r, g, b, _] = picker.color().to_rgba8();
    let radius = half.round() as i32;
    imageproc::drawing::draw_filled_circle_mut(&mut img, center, radius, Rgb([r, g, b]));
    imageproc::drawing::draw_hollow_circle_mut(&mut img, center, radius, Rgb([255, 255, 255]));

    Some(img)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PickerConfig::default().with_initial_color(Rgba::new(0.9, 0.3, 0.1, 1.0));
    let size = config.palette_size;

    let mut picker = ColorPicker::new(config)?;
    let _subscription = picker.subscribe(|color| {
        let [r, g, b, a] = color.to_rgba8();
        log::info!("picked #{r:02x}{g:02x}{b:02x}{a:02x}");
    });

    picker.resolve_layout(size);
    picker.initialize();

    picker.commit_slider(Channel::Blue, 0.6);
    picker.pointer_down(PointerTarget::GradientArea, Point::new(200.0, 60.0));
    picker.pointer_move(Vector::new(-40.0, 25.0));
    picker.pointer_up();
    picker.commit_slider(Channel::Alpha, 0.75);

    let img = render(&picker).ok_or("picker has no raster")?;
    img.save("palette.png")?;
    log::info!("wrote palette.png");

    picker.dispose();

    Ok(())
}
