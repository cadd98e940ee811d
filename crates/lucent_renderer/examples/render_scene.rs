//! Render a small reference scene once per lighting mode and save BMPs.
//!
//! Run with `RUST_LOG=debug` to see per-frame timings.

use anyhow::Context;
use lucent_renderer::{
    Camera, Color, ExecStrategy, Lambert, Light, LightingMode, Renderer, Scene, SolidColor, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scene = build_scene();

    let mut renderer = Renderer::new(640, 480)
        .with_strategy(ExecStrategy::ParallelFor)
        .with_lighting_mode(LightingMode::ObservedArea);

    for _ in 0..4 {
        let mode = renderer.lighting_mode();
        let start = std::time::Instant::now();
        renderer.render_frame(&scene);
        println!("{mode:?}: rendered in {:?}", start.elapsed());

        let filename = format!("render_{mode:?}.bmp").to_lowercase();
        renderer
            .save_buffer(filename.as_ref())
            .with_context(|| format!("saving {filename}"))?;
        println!("saved {filename}");

        renderer.cycle_lighting_mode();
    }

    Ok(())
}

fn build_scene() -> Scene {
    let camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);
    let mut scene = Scene::new(camera);

    let grey = scene.add_material(Box::new(Lambert::new(1.0, Color::splat(0.6))));
    let red = scene.add_material(Box::new(Lambert::new(1.0, Color::new(0.75, 0.15, 0.1))));
    let blue = scene.add_material(Box::new(Lambert::new(1.0, Color::new(0.1, 0.25, 0.8))));
    let chalk = scene.add_material(Box::new(SolidColor::new(Color::splat(0.9))));

    // Floor and back wall
    scene.add_plane(Vec3::ZERO, Vec3::Y, grey);
    scene.add_plane(Vec3::new(0.0, 0.0, 12.0), Vec3::NEG_Z, grey);

    // A row of spheres
    scene.add_sphere(Vec3::new(-2.5, 1.0, 0.0), 1.0, red);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, chalk);
    scene.add_sphere(Vec3::new(2.5, 1.0, 0.0), 1.0, blue);

    // Key light, fill light, and a cool directional rim
    scene.add_light(Light::point(Vec3::new(0.0, 6.0, -4.0), Color::ONE, 45.0));
    scene.add_light(Light::point(
        Vec3::new(-5.0, 3.0, -2.0),
        Color::new(1.0, 0.9, 0.8),
        20.0,
    ));
    scene.add_light(Light::directional(
        Vec3::new(0.3, -1.0, 0.2),
        Color::new(0.7, 0.8, 1.0),
        0.4,
    ));

    scene.log_summary();
    scene
}
