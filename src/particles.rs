//! Hero particle field state: a fixed cloud of points and the rotation that
//! eases toward the pointer every frame.

use glam::{Mat4, Vec2};

use crate::camera::PerspectiveCamera;
use crate::config::HeroConfig;
use crate::viewport::{Pointer, Viewport};

/// Flat `x, y, z` position buffer, seeded once and never regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCloud {
    positions: Vec<f32>,
}

impl ParticleCloud {
    /// Scatter `count` points uniformly in a cube of side `spread` centered on
    /// the origin. `random` must yield values in `[0, 1)`.
    pub fn seeded(count: usize, spread: f32, mut random: impl FnMut() -> f64) -> Self {
        let half = spread / 2.0;
        // Narrowing to f32 can round up onto the open bound.
        let upper = if half > 0.0 {
            f32::from_bits(half.to_bits() - 1)
        } else {
            half
        };
        let positions = (0..count * 3)
            .map(|_| (((random() - 0.5) * f64::from(spread)) as f32).min(upper))
            .collect();
        Self { positions }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Number of particles (not floats).
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Rotation of the whole cloud, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// One frame: constant drift on both axes, then exponential smoothing
    /// toward `target` (pointer x drives the y axis and vice versa).
    pub fn advance(&mut self, target: Vec2, drift: f32, damping: f32) {
        self.y += drift;
        self.x += drift;

        self.y += damping * (target.x - self.y);
        self.x += damping * (target.y - self.x);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.x) * Mat4::from_rotation_y(self.y)
    }
}

/// Matrices for one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameUniforms {
    pub model_view: Mat4,
    pub projection: Mat4,
}

/// Everything the hero animation mutates, independent of any GPU handle.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: HeroConfig,
    cloud: ParticleCloud,
    camera: PerspectiveCamera,
    viewport: Viewport,
    rotation: Rotation,
    /// Pointer offset from center, normalized when the pointer moved.
    target: Vec2,
}

impl ParticleField {
    pub fn new(config: HeroConfig, viewport: Viewport, random: impl FnMut() -> f64) -> Self {
        let cloud = ParticleCloud::seeded(config.particle_count, config.spread, random);
        let camera = PerspectiveCamera::new(
            config.fov_degrees,
            viewport,
            config.near,
            config.far,
            config.camera_depth,
        );
        Self {
            config,
            cloud,
            camera,
            viewport,
            rotation: Rotation::default(),
            target: Vec2::ZERO,
        }
    }

    pub fn cloud(&self) -> &ParticleCloud {
        &self.cloud
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Normalize `pointer` against the viewport it was reported in. Last
    /// write wins; a later resize does not move the target.
    pub fn set_pointer(&mut self, pointer: Pointer, viewport: Viewport) {
        self.target = pointer.offset_from_center(viewport);
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(viewport);
    }

    /// Advance one frame and return the matrices to draw it with.
    pub fn frame(&mut self) -> FrameUniforms {
        self.rotation
            .advance(self.target, self.config.drift, self.config.damping);
        FrameUniforms {
            model_view: self.camera.view() * self.rotation.matrix(),
            projection: self.camera.projection(),
        }
    }
}
