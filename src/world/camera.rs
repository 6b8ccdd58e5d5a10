use glam::Vec2;

use super::helpers::{forward, wrap_degrees};

/// View-point on the grid.
///
/// * `pos` is in map units (one unit per cell).
/// * `rotation` is in **degrees**: 0 = east (+X), growing toward +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub rotation: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::new(1.5, 1.5), 0.0)
    }
}

impl Camera {
    pub fn new(pos: Vec2, rotation: f32) -> Self {
        Self { pos, rotation }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        forward(self.rotation)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Position after moving `distance` along the facing direction.
    #[inline]
    pub fn ahead(self, distance: f32) -> Vec2 {
        self.pos + self.forward() * distance
    }

    /// Rotate by `delta_deg`, keeping rotation in `[0, 360)`.
    pub fn turn(&mut self, delta_deg: f32) {
        self.rotation = wrap_degrees(self.rotation + delta_deg);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
