//! Small geometric helpers shared by the simulation and renderers.

/// Distance between two points.
#[inline]
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ((ax - bx) * (ax - bx) + (ay - by) * (ay - by)).sqrt()
}

/// Angle in degrees of the vector pointing from point B to point A,
/// normalized into [0, 360).
pub(crate) fn angle_deg(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let angle_rad = (ay - by).atan2(ax - bx);
    let mut angle = angle_rad.to_degrees();
    if angle_rad < 0.0 {
        angle += 360.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_between_same_point_is_zero() {
        assert_eq!(distance(128.5, -640.25, 128.5, -640.25), 0.0);
    }

    #[test]
    fn test_distance_fixture() {
        assert!((distance(32.0, 64.0, 128.0, 256.0) - 214.66252).abs() < 0.0001);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(
            distance(1.0, 2.0, -3.0, -4.0),
            distance(-3.0, -4.0, 1.0, 2.0)
        );
    }

    #[test]
    fn test_angle_deg_cardinal_directions() {
        // Vector from origin to (1, 0) points right
        assert!((angle_deg(1.0, 0.0, 0.0, 0.0) - 0.0).abs() < 0.001);
        // Down (y grows downward on screen, but the math is plain atan2)
        assert!((angle_deg(0.0, 1.0, 0.0, 0.0) - 90.0).abs() < 0.001);
        assert!((angle_deg(-1.0, 0.0, 0.0, 0.0) - 180.0).abs() < 0.001);
        assert!((angle_deg(0.0, -1.0, 0.0, 0.0) - 270.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_deg_is_normalized() {
        for i in 0..360 {
            let rad = (i as f32).to_radians();
            let angle = angle_deg(rad.cos(), rad.sin(), 0.0, 0.0);
            assert!((0.0..360.0).contains(&angle));
        }
    }
}
