use glam::{Mat4, Vec3};

/// Vertical field of view of the projection, in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const Z_FAR: f32 = 100.0;

/// Fixed world-space offset applied as the view transform.
///
/// The camera is not modeled separately; the world is moved opposite the
/// desired camera position.
pub const VIEW_OFFSET: Vec3 = Vec3::new(0.0, 1.0, -5.0);

/// The three transforms mapping object space to clip space.
#[derive(Debug, Copy, Clone)]
pub struct Matrices {
    pub model: Mat4,
    pub view: Mat4,
    pub proj: Mat4,
}

impl Matrices {
    /// Computes model/view/projection for the given rotation and aspect ratio.
    ///
    /// - `model` rotates about +Y by `rotation_degrees`.
    /// - `view` translates by [`VIEW_OFFSET`].
    /// - `proj` is a right-handed perspective with 0..1 clip depth, which is
    ///   what wgpu expects.
    ///
    /// `aspect` must come from the live surface as a float division;
    /// integer width/height division truncates as soon as the window is not
    /// square.
    pub fn compute(rotation_degrees: f32, aspect: f32) -> Self {
        Self {
            model: Mat4::from_rotation_y(rotation_degrees.to_radians()),
            view: Mat4::from_translation(VIEW_OFFSET),
            proj: Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn model_is_identity_at_zero_rotation() {
        let m = Matrices::compute(0.0, 1.0);
        assert!(m.model.abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn model_rotates_x_axis_toward_negative_z_at_90_degrees() {
        let m = Matrices::compute(90.0, 1.0);
        let p = m.model.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn view_translates_origin_by_fixed_offset() {
        let m = Matrices::compute(0.0, 1.0);
        let p = m.view.transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(VIEW_OFFSET, EPS));
    }

    #[test]
    fn projection_focal_term_is_cotangent_of_half_fov() {
        let m = Matrices::compute(0.0, 1.0);
        let expected = 1.0 / (22.5f32.to_radians()).tan();
        assert!((m.proj.col(0).x - expected).abs() < EPS);
        // At aspect 1.0 the vertical term matches the horizontal one.
        assert!((m.proj.col(1).y - expected).abs() < EPS);
    }

    #[test]
    fn projection_focal_term_scales_with_aspect() {
        let square = Matrices::compute(0.0, 1.0);
        let wide = Matrices::compute(0.0, 2.0);
        assert!((wide.proj.col(0).x - square.proj.col(0).x / 2.0).abs() < EPS);
    }
}
