use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Latest pointer position in viewport (client) pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset from the viewport center, each axis in `[-0.5, 0.5]`.
    pub fn offset_from_center(&self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.x / viewport.width - 0.5,
            self.y / viewport.height - 0.5,
        )
    }

    /// CSS `left` / `top` values for an absolutely positioned indicator.
    pub fn css(&self) -> (String, String) {
        (format!("{}px", self.x), format!("{}px", self.y))
    }
}
