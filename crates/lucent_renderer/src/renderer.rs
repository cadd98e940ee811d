//! Frame rendering: per-frame setup, fork-join dispatch, and the
//! per-pixel direct-lighting pipeline.

use std::path::Path;
use std::time::Instant;

use log::debug;
use lucent_core::{Light, Material, SceneQuery};
use lucent_math::{Color, Interval, Mat3, Ray, Vec3};

use crate::executor::ExecStrategy;
use crate::framebuffer::{ExportError, Framebuffer};
use crate::shading::{max_to_one, pack_rgb, AccumulateFn, LightingMode};

/// Offset of the shadow-ray origin along the light direction, and the
/// minimum of its valid interval. Avoids immediate self-intersection.
const SHADOW_BIAS: f32 = 0.01;

/// Immutable per-frame snapshot shared by all pixel workers.
///
/// Built once before any pixel work starts; workers only ever read it,
/// which is what makes the dispatch free of synchronization.
struct FrameContext<'a> {
    width: u32,
    height: u32,
    aspect_ratio: f32,
    fov_tan: f32,
    camera_origin: Vec3,
    camera_to_world: Mat3,
    accumulate: AccumulateFn,
    shadows_enabled: bool,
    lights: &'a [Light],
    materials: &'a [Box<dyn Material>],
}

/// Direct-lighting renderer writing into an owned framebuffer.
pub struct Renderer {
    width: u32,
    height: u32,
    framebuffer: Framebuffer,
    lighting_mode: LightingMode,
    shadows_enabled: bool,
    strategy: ExecStrategy,
}

impl Renderer {
    /// Create a renderer with a black framebuffer of the given size.
    ///
    /// Starts in [`LightingMode::Combined`] with shadows enabled and the
    /// default (work-stealing) execution strategy.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "framebuffer must be non-empty");
        Self {
            width,
            height,
            framebuffer: Framebuffer::new(width, height),
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            strategy: ExecStrategy::default(),
        }
    }

    /// Select the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select the initial lighting mode.
    pub fn with_lighting_mode(mut self, mode: LightingMode) -> Self {
        self.lighting_mode = mode;
        self
    }

    /// Render one complete frame into the framebuffer.
    ///
    /// Blocks until every pixel has been written; the framebuffer is
    /// safe to read as soon as this returns.
    pub fn render_frame(&mut self, scene: &dyn SceneQuery) {
        let camera = scene.camera();
        let ctx = FrameContext {
            width: self.width,
            height: self.height,
            aspect_ratio: self.width as f32 / self.height as f32,
            fov_tan: camera.fov_tan(),
            camera_origin: camera.origin,
            camera_to_world: camera.camera_to_world(),
            accumulate: self.lighting_mode.accumulate(),
            shadows_enabled: self.shadows_enabled,
            lights: scene.lights(),
            materials: scene.materials(),
        };
        debug_assert_eq!(
            self.framebuffer.pixels().len(),
            (self.width * self.height) as usize
        );

        let start = Instant::now();
        let strategy = self.strategy;
        strategy.for_each_pixel(self.framebuffer.pixels_mut(), |index, slot| {
            render_pixel(&ctx, scene, index, slot);
        });

        debug!(
            "frame {}x{} ({:?}, {:?}) rendered in {:?}",
            self.width,
            self.height,
            self.lighting_mode,
            strategy,
            start.elapsed()
        );
    }

    /// Advance the lighting mode. Must not be called while a frame is
    /// in flight; `&mut self` makes that a compile-time guarantee.
    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.cycle();
    }

    pub fn lighting_mode(&self) -> LightingMode {
        self.lighting_mode
    }

    /// Flip hard-shadow testing on or off. Between frames only.
    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
    }

    pub fn shadows_enabled(&self) -> bool {
        self.shadows_enabled
    }

    /// The most recently rendered frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Export the current framebuffer to an image file.
    pub fn save_buffer(&self, path: &Path) -> Result<(), ExportError> {
        self.framebuffer.save(path)
    }
}

/// Render exactly one pixel: build the primary ray, resolve the closest
/// hit, accumulate direct lighting, and store the packed color.
fn render_pixel(ctx: &FrameContext, scene: &dyn SceneQuery, index: usize, slot: &mut u32) {
    let px = index as u32 % ctx.width;
    let py = index as u32 / ctx.width;

    // Pixel center to camera space. Screen row 0 is the top while
    // camera +Y points up, hence the flip on y.
    let rx = px as f32 + 0.5;
    let ry = py as f32 + 0.5;
    let cx = (2.0 * rx / ctx.width as f32 - 1.0) * ctx.aspect_ratio * ctx.fov_tan;
    let cy = (1.0 - 2.0 * ry / ctx.height as f32) * ctx.fov_tan;

    let ray_direction = (ctx.camera_to_world * Vec3::new(cx, cy, 1.0)).normalize_or_zero();
    let view_ray = Ray::primary(ctx.camera_origin, ray_direction);

    let mut color = Color::ZERO;

    if let Some(hit) = scene.closest_hit(&view_ray) {
        let material = &ctx.materials[hit.material.index()];
        let view_dir = -ray_direction;

        for light in ctx.lights {
            let to_light = light.direction_to(hit.point);
            let distance = to_light.length();
            let Some(light_dir) = to_light.try_normalize() else {
                // Degenerate: light coincides with the hit point.
                continue;
            };

            // Surface faces away from this light.
            let cos_theta = hit.normal.dot(light_dir);
            if cos_theta < 0.0 {
                continue;
            }

            if ctx.shadows_enabled {
                // Biased along the light direction; bounded by the light
                // distance so occluders beyond the light do not count.
                let shadow_ray = Ray::new(
                    hit.point + SHADOW_BIAS * light_dir,
                    light_dir,
                    Interval::new(SHADOW_BIAS, distance),
                );
                if scene.any_hit(&shadow_ray) {
                    continue;
                }
            }

            let radiance = light.radiance_at(hit.point);
            let brdf = material.shade(&hit, light_dir, view_dir);
            color += (ctx.accumulate)(radiance, brdf, cos_theta);
        }
    }

    *slot = pack_rgb(max_to_one(color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::{Camera, Scene, SolidColor};

    const BLACK: u32 = 0xFF00_0000;
    const WHITE: u32 = 0xFFFF_FFFF;

    /// Camera at the origin looking down +Z at a wall at z = `depth`
    /// whose normal faces the camera.
    fn wall_scene(depth: f32) -> Scene {
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, 90.0));
        let white = scene.add_material(Box::new(SolidColor::new(Color::ONE)));
        scene.add_plane(Vec3::new(0.0, 0.0, depth), Vec3::NEG_Z, white);
        scene
    }

    #[test]
    fn test_index_decomposition_is_a_bijection() {
        let (width, height) = (7u32, 5u32);
        for index in 0..width * height {
            let px = index % width;
            let py = index / width;
            assert!(px < width && py < height);
            assert_eq!(px + py * width, index);
        }
    }

    #[test]
    fn test_miss_is_exactly_black() {
        let scene = Scene::new(Camera::new(Vec3::ZERO, 90.0));
        let mut renderer = Renderer::new(8, 4);
        renderer.render_frame(&scene);

        assert!(renderer.framebuffer().pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_observed_area_head_on_is_white() {
        // Point light straight along the wall normal from the hit point.
        let mut scene = wall_scene(5.0);
        scene.add_light(Light::point(Vec3::new(0.0, 0.0, 3.0), Color::ONE, 4.0));

        let mut renderer =
            Renderer::new(1, 1).with_lighting_mode(LightingMode::ObservedArea);
        renderer.render_frame(&scene);

        // cos(0) = 1 -> (1,1,1) -> every channel 255.
        assert_eq!(renderer.framebuffer().pixel_at(0, 0), WHITE);
    }

    #[test]
    fn test_radiance_mode_shows_light_radiance_only() {
        // distance 2 and intensity 4 make E = color * 4 / 4 = color.
        let mut scene = wall_scene(5.0);
        scene.add_light(Light::point(
            Vec3::new(0.0, 0.0, 3.0),
            Color::new(1.0, 0.5, 0.25),
            4.0,
        ));

        let mut renderer = Renderer::new(1, 1).with_lighting_mode(LightingMode::Radiance);
        renderer.render_frame(&scene);

        // floor(255 * (1, 0.5, 0.25)) = (255, 127, 63)
        assert_eq!(renderer.framebuffer().pixel_at(0, 0), 0xFFFF_7F3F);
    }

    #[test]
    fn test_backfacing_light_contributes_nothing_in_any_mode() {
        for mode in [
            LightingMode::ObservedArea,
            LightingMode::Radiance,
            LightingMode::Brdf,
            LightingMode::Combined,
        ] {
            // Light behind the wall: direction-to-light opposes the normal.
            let mut scene = wall_scene(5.0);
            scene.add_light(Light::point(Vec3::new(0.0, 0.0, 7.0), Color::ONE, 100.0));

            let mut renderer = Renderer::new(1, 1).with_lighting_mode(mode);
            renderer.render_frame(&scene);

            assert_eq!(
                renderer.framebuffer().pixel_at(0, 0),
                BLACK,
                "mode {mode:?} let a backfacing light through"
            );
        }
    }

    #[test]
    fn test_occluder_blocks_light_unless_shadows_disabled() {
        let mut scene = wall_scene(10.0);
        // Light off to the side so the occluder stays off the primary ray.
        scene.add_light(Light::point(Vec3::new(0.0, 4.0, 6.0), Color::ONE, 32.0));
        // Occluder strictly between the hit point (0,0,10) and the light.
        let grey = scene.add_material(Box::new(SolidColor::new(Color::splat(0.5))));
        scene.add_sphere(Vec3::new(0.0, 2.0, 8.0), 0.3, grey);

        let mut renderer = Renderer::new(1, 1).with_lighting_mode(LightingMode::Combined);
        renderer.render_frame(&scene);
        assert_eq!(renderer.framebuffer().pixel_at(0, 0), BLACK);

        renderer.toggle_shadows();
        assert!(!renderer.shadows_enabled());
        renderer.render_frame(&scene);
        assert_ne!(renderer.framebuffer().pixel_at(0, 0), BLACK);
    }

    #[test]
    fn test_combined_sums_only_unoccluded_lights() {
        let mut scene = wall_scene(10.0);

        // Unoccluded light straight down the normal: d = 4, E = 8/16 = 0.5.
        scene.add_light(Light::point(Vec3::new(0.0, 0.0, 6.0), Color::ONE, 8.0));

        // Second light off to the side, blocked by a small sphere that
        // neither the primary ray nor the first shadow ray can touch.
        scene.add_light(Light::point(Vec3::new(0.0, 2.0, 8.0), Color::ONE, 50.0));
        let grey = scene.add_material(Box::new(SolidColor::new(Color::splat(0.5))));
        scene.add_sphere(Vec3::new(0.0, 1.0, 9.0), 0.3, grey);

        let mut renderer = Renderer::new(1, 1).with_lighting_mode(LightingMode::Combined);
        renderer.render_frame(&scene);

        // Only the first light survives: E * brdf * cos = 0.5 * 1 * 1.
        // floor(255 * 0.5) = 127 per channel.
        assert_eq!(renderer.framebuffer().pixel_at(0, 0), 0xFF7F_7F7F);
    }

    #[test]
    fn test_strategies_render_identical_frames() {
        let mut scene = wall_scene(8.0);
        let grey = scene.add_material(Box::new(SolidColor::new(Color::splat(0.5))));
        scene.add_sphere(Vec3::new(0.5, 0.0, 4.0), 1.0, grey);
        scene.add_light(Light::point(Vec3::new(2.0, 3.0, 1.0), Color::ONE, 30.0));
        scene.add_light(Light::directional(
            Vec3::new(-0.3, -1.0, 0.5),
            Color::new(0.9, 0.9, 1.0),
            0.8,
        ));

        let render_with = |strategy: ExecStrategy| {
            let mut renderer = Renderer::new(32, 18).with_strategy(strategy);
            renderer.render_frame(&scene);
            renderer.framebuffer().pixels().to_vec()
        };

        let sequential = render_with(ExecStrategy::Sequential);
        assert_eq!(render_with(ExecStrategy::Chunked), sequential);
        assert_eq!(render_with(ExecStrategy::ParallelFor), sequential);

        // Same strategy twice is byte-identical too.
        assert_eq!(render_with(ExecStrategy::ParallelFor), sequential);
    }

    #[test]
    fn test_cycle_lighting_mode_wraps() {
        let mut renderer = Renderer::new(2, 2);
        assert_eq!(renderer.lighting_mode(), LightingMode::Combined);

        renderer.cycle_lighting_mode();
        assert_eq!(renderer.lighting_mode(), LightingMode::ObservedArea);

        renderer.cycle_lighting_mode();
        renderer.cycle_lighting_mode();
        renderer.cycle_lighting_mode();
        assert_eq!(renderer.lighting_mode(), LightingMode::Combined);
    }

    #[test]
    fn test_lambert_combined_pixel_value() {
        // Full model with a Lambert wall: E * (kd * albedo / pi) * cos.
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, 90.0));
        let wall = scene.add_material(Box::new(lucent_core::Lambert::new(1.0, Color::ONE)));
        scene.add_plane(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, wall);
        scene.add_light(Light::point(Vec3::new(0.0, 0.0, 3.0), Color::ONE, 4.0));

        let mut renderer = Renderer::new(1, 1).with_lighting_mode(LightingMode::Combined);
        renderer.render_frame(&scene);

        // E = 1, cos = 1, brdf = 1/pi -> floor(255 / pi) = 81.
        assert_eq!(renderer.framebuffer().pixel_at(0, 0), 0xFF51_5151);
    }
}
