use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::options::CameraOptions;

/// Pitch limit in degrees. Looking straight up or down would make `front`
/// parallel to the world up vector and collapse the basis.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view (fully zoomed in), in degrees.
pub const MIN_FOVY: f32 = 1.0;
/// Widest field of view (fully zoomed out), in degrees.
pub const MAX_FOVY: f32 = 45.0;

/// Squared length below which `front x world_up` counts as degenerate.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Direction of a keyboard-driven camera step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

impl CameraMovement {
    /// Every direction, in a fixed order.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];
}

/// First-person free-look camera.
///
/// Orientation is stored as yaw/pitch in degrees; the `front`, `right` and
/// `up` vectors are derived from those angles whenever they change and always
/// form a right-handed orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    move_speed: f32,
    mouse_sensitivity: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl Camera {
    /// Create a camera at `position` with default orientation and speeds
    /// (looking down -Z, +Y up).
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_options(position, &CameraOptions::default())
    }

    /// Create a camera at `position` using the given options.
    ///
    /// Pitch and field of view are clamped into range, so an out-of-range
    /// option is snapped to the nearest boundary.
    #[must_use]
    pub fn with_options(position: Vec3, options: &CameraOptions) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::from_array(options.world_up).normalize_or(Vec3::Y),
            yaw: options.yaw,
            pitch: options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed: options.move_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            fovy: options.fovy.clamp(MIN_FOVY, MAX_FOVY),
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.update_vectors();
        camera
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing up relative to the camera.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Fixed world-space up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within `[-89, 89]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Multiplier applied to pointer deltas.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Vertical field of view in degrees, always within `[1, 45]`.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// Step the camera along its current basis.
    ///
    /// `elapsed_secs` is used as-is: a long stall produces a proportionally
    /// long step.
    pub fn move_in(&mut self, direction: CameraMovement, elapsed_secs: f32) {
        let distance = self.move_speed * elapsed_secs;
        match direction {
            CameraMovement::Forward => self.position += self.front * distance,
            CameraMovement::Backward => self.position -= self.front * distance,
            CameraMovement::Left => self.position -= self.right * distance,
            CameraMovement::Right => self.position += self.right * distance,
        }
    }

    /// Turn the camera by the pointer motion from `previous` to `current`
    /// (screen coordinates, Y growing downward).
    pub fn reorient(&mut self, previous: Vec2, current: Vec2) {
        let x_offset = (current.x - previous.x) * self.mouse_sensitivity;
        // screen Y is inverted: moving the pointer up looks up
        let y_offset = (previous.y - current.y) * self.mouse_sensitivity;

        self.yaw += x_offset;
        self.pitch = (self.pitch + y_offset).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.update_vectors();
    }

    /// Narrow (positive delta) or widen (negative delta) the field of view.
    pub fn zoom(&mut self, scroll_delta: f32) {
        self.fovy = (self.fovy - scroll_delta).clamp(MIN_FOVY, MAX_FOVY);
    }

    /// World-to-camera transform.
    ///
    /// Rows of the rotation part are `right`, `up` and `-front`, followed by
    /// a translation by `-position`. Equivalent to a right-handed look-at
    /// from `position` toward `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let back = -self.front;
        let rotation = Mat4::from_cols(
            Vec4::new(self.right.x, self.up.x, back.x, 0.0),
            Vec4::new(self.right.y, self.up.y, back.y, 0.0),
            Vec4::new(self.right.z, self.up.z, back.z, 0.0),
            Vec4::W,
        );
        rotation * Mat4::from_translation(-self.position)
    }

    /// Perspective projection for the current zoom level.
    ///
    /// Uses the OpenGL clip-space convention (depth in `[-1, 1]`).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined projection * view matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        // cross products shrink as front nears world_up; renormalize so
        // movement speed does not depend on pitch
        let right = self.front.cross(self.world_up);
        self.right = if right.length_squared() > PARALLEL_EPSILON {
            right.normalize()
        } else {
            // front is (anti)parallel to world_up: keep the previous right,
            // projected off the new front
            self.right
                .reject_from_normalized(self.front)
                .try_normalize()
                .unwrap_or_else(|| self.front.any_orthonormal_vector())
        };
        self.up = self.right.cross(self.front).normalize();
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform block holding the matrices a shader program needs from the
/// camera.
pub struct CameraUniform {
    /// World-to-camera matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: MAX_FOVY,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix(aspect).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.fovy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        for v in [camera.front(), camera.right(), camera.up()] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v}");
        }
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn default_front_points_down_negative_z() {
        let camera = Camera::new(Vec3::ZERO);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.fovy(), 45.0);
        assert_eq!(camera.move_speed(), 5.0);
        assert_eq!(camera.mouse_sensitivity(), 0.1);
    }

    #[test]
    fn reorient_keeps_pitch_clamped_and_basis_orthonormal() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let moves = [
            (Vec2::new(0.0, 0.0), Vec2::new(120.0, -3000.0)),
            (Vec2::new(10.0, 10.0), Vec2::new(-700.0, 40.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(33.0, 5000.0)),
            (Vec2::new(500.0, 500.0), Vec2::new(510.0, 480.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(3600.0, 0.0)),
        ];
        for (previous, current) in moves {
            camera.reorient(previous, current);
            assert!(camera.pitch() <= PITCH_LIMIT);
            assert!(camera.pitch() >= -PITCH_LIMIT);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pointer_sweep_past_both_poles_stays_in_range() {
        let mut camera = Camera::new(Vec3::ZERO);
        let mut previous = Vec2::ZERO;
        for step in 0..400_i16 {
            let dx = f32::from(step % 37 - 18) * 25.0;
            // climb past the upper pole, then dive past the lower one
            let dy = if step < 200 { -40.0 } else { 40.0 };
            let current = previous + Vec2::new(dx, dy);
            camera.reorient(previous, current);
            previous = current;

            assert!(camera.pitch() <= PITCH_LIMIT);
            assert!(camera.pitch() >= -PITCH_LIMIT);
            assert_orthonormal(&camera);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn world_up_parallel_to_front_keeps_basis_finite() {
        let sideways = CameraOptions {
            world_up: [1.0, 0.0, 0.0],
            yaw: 0.0,
            ..CameraOptions::default()
        };
        let mut camera = Camera::with_options(Vec3::ZERO, &sideways);
        assert!(camera.front().abs_diff_eq(Vec3::X, EPS));
        assert_orthonormal(&camera);

        camera.reorient(Vec2::ZERO, Vec2::new(900.0, 0.0));
        assert_orthonormal(&camera);
        camera.reorient(Vec2::ZERO, Vec2::new(-900.0, 0.0));
        assert_orthonormal(&camera);
        assert!(camera.view_matrix().is_finite());

        let forward_up = CameraOptions {
            world_up: [0.0, 0.0, 1.0],
            ..CameraOptions::default()
        };
        let mut camera = Camera::with_options(Vec3::ZERO, &forward_up);
        assert_orthonormal(&camera);
        for step in 0..90_u8 {
            let x = f32::from(step) * 10.0;
            camera.reorient(Vec2::new(x, 0.0), Vec2::new(x + 10.0, 5.0));
            assert_orthonormal(&camera);
        }
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn large_pointer_delta_clamps_pitch_to_boundary() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.reorient(Vec2::new(0.0, 1000.0), Vec2::new(0.0, 0.0));
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.reorient(Vec2::new(0.0, 0.0), Vec2::new(0.0, 5000.0));
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn stationary_pointer_changes_nothing_then_horizontal_motion_yaws() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        let before = camera.clone();

        camera.reorient(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
        assert_eq!(camera, before);

        camera.reorient(Vec2::new(400.0, 300.0), Vec2::new(450.0, 300.0));
        let expected_yaw = before.yaw() + 50.0 * before.mouse_sensitivity();
        assert!((camera.yaw() - expected_yaw).abs() < EPS);
        assert_eq!(camera.pitch(), before.pitch());

        let yaw = expected_yaw.to_radians();
        let expected_front = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        assert!(camera.front().abs_diff_eq(expected_front, EPS));
        assert!(!camera.front().abs_diff_eq(before.front(), EPS));
    }

    #[test]
    fn zoom_clamps_field_of_view() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.zoom(50.0);
        assert_eq!(camera.fovy(), MIN_FOVY);
        camera.zoom(-50.0);
        assert_eq!(camera.fovy(), MAX_FOVY);

        for delta in [3.0, -0.5, 12.0, 40.0, -7.25, -100.0, 0.25] {
            camera.zoom(delta);
            assert!((MIN_FOVY..=MAX_FOVY).contains(&camera.fovy()));
        }
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        let start = Vec3::new(-2.0, 0.5, 7.0);
        let mut camera = Camera::new(start);
        camera.reorient(Vec2::ZERO, Vec2::new(137.0, -64.0));

        camera.move_in(CameraMovement::Forward, 0.25);
        assert!(!camera.position().abs_diff_eq(start, EPS));
        camera.move_in(CameraMovement::Backward, 0.25);
        assert!(camera.position().abs_diff_eq(start, EPS));

        camera.move_in(CameraMovement::Right, 1.5);
        camera.move_in(CameraMovement::Left, 1.5);
        assert!(camera.position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn movement_scales_with_speed_and_elapsed_time() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.move_in(CameraMovement::Forward, 2.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), EPS));
        camera.move_in(CameraMovement::Right, 0.5);
        assert!(camera.position().abs_diff_eq(Vec3::new(2.5, 0.0, -10.0), EPS));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut camera = Camera::new(Vec3::new(3.0, -1.0, 8.0));
        camera.reorient(Vec2::ZERO, Vec2::new(-220.0, 90.0));
        let eye = camera.view_matrix() * camera.position().extend(1.0);
        assert!(eye.abs_diff_eq(Vec4::W, 1e-4));
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 10.0));
        camera.reorient(Vec2::ZERO, Vec2::new(250.0, 130.0));
        let look_at = Mat4::look_at_rh(
            camera.position(),
            camera.position() + camera.front(),
            camera.world_up(),
        );
        assert!(camera.view_matrix().abs_diff_eq(look_at, 1e-5));
    }

    #[test]
    fn view_space_axes_follow_basis() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.reorient(Vec2::ZERO, Vec2::new(300.0, -150.0));
        let view = camera.view_matrix();
        assert!(view
            .transform_vector3(camera.front())
            .abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(view.transform_vector3(camera.right()).abs_diff_eq(Vec3::X, EPS));
        assert!(view.transform_vector3(camera.up()).abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn out_of_range_options_are_clamped() {
        let options = CameraOptions {
            pitch: 120.0,
            fovy: 90.0,
            ..CameraOptions::default()
        };
        let camera = Camera::with_options(Vec3::ZERO, &options);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_eq!(camera.fovy(), MAX_FOVY);
        assert_orthonormal(&camera);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.zoom(15.0);
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, 4.0 / 3.0);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fovy, 30.0);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 144);
    }
}
