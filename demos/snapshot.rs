//! Renders one frame of a freshly generated scene to `snapshot.png` using a
//! tiny software rasterizer as the low-level backend.
//!
//! Run with: `cargo run --example snapshot`

use image::{Rgba, RgbaImage};
use plexus::{DefaultSceneRenderer, LowLevelRenderer, ParticleGenerator, Scene, SceneConfig, SceneRenderer};

struct Raster {
    image: RgbaImage,
}

impl Raster {
    fn new(width: u32, height: u32, background: u32) -> Self {
        let mut image = RgbaImage::new(width, height);
        let pixel = argb_to_rgba(background);
        for p in image.pixels_mut() {
            *p = pixel;
        }
        Self { image }
    }

    fn blend(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }
        let src = argb_to_rgba(color);
        let alpha = src.0[3] as u32;
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let blended = (src.0[c] as u32 * alpha + dst.0[c] as u32 * (255 - alpha)) / 255;
            dst.0[c] = blended as u8;
        }
        dst.0[3] = 255;
    }
}

fn argb_to_rgba(argb: u32) -> Rgba<u8> {
    Rgba([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}

impl LowLevelRenderer for Raster {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _thickness: f32, color: u32) {
        let length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        let steps = (length.ceil() as i32).max(1);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let x = (x1 + (x2 - x1) * t).round() as i32;
            let y = (y1 + (y2 - y1) * t).round() as i32;
            self.blend(x, y, color);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        let r = radius.ceil() as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if (dx * dx + dy * dy) as f32 <= radius * radius {
                    self.blend(cx.round() as i32 + dx, cy.round() as i32 + dy, color);
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (960u32, 540u32);

    let config = SceneConfig {
        density: 150,
        line_distance: 110.0,
        particle_radius_min: 1.5,
        particle_radius_max: 4.0,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new();
    config.apply_to(&mut scene)?;
    scene.set_width(width);
    scene.set_height(height);

    let mut generator = ParticleGenerator::with_seed(2026);
    for i in 0..scene.density() {
        generator.apply_fresh_particle_on_screen(&mut scene, i)?;
    }

    let mut renderer = DefaultSceneRenderer::new(Raster::new(width, height, 0xFF10_1A24));
    renderer.draw_scene(&scene);
    renderer.into_inner().image.save("snapshot.png")?;

    println!("Wrote snapshot.png");
    Ok(())
}
