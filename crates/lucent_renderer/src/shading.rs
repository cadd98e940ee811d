//! Lighting modes, per-mode accumulation, and color output conversion.

use lucent_math::Color;

/// Which part of the local illumination model the renderer visualizes.
///
/// Cycles in a fixed order; must not change while a frame is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Geometry term only: white * dot(normal, light_dir).
    ObservedArea,
    /// Incident radiance only, ignoring material and geometry.
    Radiance,
    /// Material BRDF response only.
    Brdf,
    /// Full model: radiance * BRDF * cos(theta).
    #[default]
    Combined,
}

impl LightingMode {
    /// Advance to the next mode: ObservedArea -> Radiance -> BRDF ->
    /// Combined -> ObservedArea.
    pub fn cycle(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }

    /// The accumulation function for this mode.
    ///
    /// Selected once per frame so the per-light loop stays branch-free.
    pub(crate) fn accumulate(self) -> AccumulateFn {
        match self {
            LightingMode::ObservedArea => accumulate_observed_area,
            LightingMode::Radiance => accumulate_radiance,
            LightingMode::Brdf => accumulate_brdf,
            LightingMode::Combined => accumulate_combined,
        }
    }
}

/// One light's contribution given radiance, BRDF response, and cos(theta).
pub(crate) type AccumulateFn = fn(Color, Color, f32) -> Color;

fn accumulate_observed_area(_radiance: Color, _brdf: Color, cos_theta: f32) -> Color {
    Color::ONE * cos_theta
}

fn accumulate_radiance(radiance: Color, _brdf: Color, _cos_theta: f32) -> Color {
    radiance
}

fn accumulate_brdf(_radiance: Color, brdf: Color, _cos_theta: f32) -> Color {
    brdf
}

fn accumulate_combined(radiance: Color, brdf: Color, cos_theta: f32) -> Color {
    radiance * brdf * cos_theta
}

/// Tone-map an accumulated color into the unit cube.
///
/// If any channel exceeds 1, all channels are divided by the maximum so
/// channel ratios are preserved; colors already inside pass through.
pub fn max_to_one(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Pack a unit-range color into 0xFFRRGGBB via floor(channel * 255).
pub fn pack_rgb(color: Color) -> u32 {
    let r = (color.x * 255.0) as u32;
    let g = (color.y * 255.0) as u32;
    let b = (color.z * 255.0) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}
