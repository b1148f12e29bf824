//! Color resolution for particles and connection lines.
//!
//! Pure integer/float math over packed ARGB values. Line alpha fades
//! linearly with distance; both line and particle colors are additionally
//! scaled by the scene-wide alpha.

/// Resolves a line alpha based on distance compared to the max distance.
/// Alpha approaches 0 at `max_distance` and 255 at distance 0, then is
/// scaled by the scene alpha.
///
/// Callers must only invoke this with `distance < max_distance`; the
/// line-drawing decision upstream is exactly that comparison.
fn resolve_line_alpha(scene_alpha: u8, max_distance: f32, distance: f32) -> u32 {
    let alpha_percent = 1.0 - distance / max_distance;
    let alpha = (255.0 * alpha_percent) as u32;
    alpha * scene_alpha as u32 / 255
}

/// Combines the distance-faded line alpha into the top byte of the line
/// color. The line color's own alpha channel is discarded; only distance
/// and scene alpha decide the result.
pub fn resolve_line_color_with_alpha(
    scene_alpha: u8,
    line_color: u32,
    max_distance: f32,
    distance: f32,
) -> u32 {
    let alpha = resolve_line_alpha(scene_alpha, max_distance, distance);
    (line_color & 0x00FF_FFFF) | (alpha << 24)
}

/// Scales the particle color's own alpha channel by the scene alpha.
pub fn resolve_particle_color_with_scene_alpha(particle_color: u32, scene_alpha: u8) -> u32 {
    let alpha = (particle_color >> 24) * scene_alpha as u32 / 255;
    (particle_color & 0x00FF_FFFF) | (alpha << 24)
}
