use glam::{Mat4, Vec3};

use crate::viewport::Viewport;

/// Right-handed perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, viewport: Viewport, near: f32, far: f32, depth: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect: viewport.aspect(),
            near,
            far,
            position: Vec3::new(0.0, 0.0, depth),
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Track a new viewport size; the projection is rebuilt immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }
}
