use crate::engine::types::{RayHit, Viewport};

/// Distances below this are clamped so a camera pressed against a wall
/// still yields a finite height.
const MIN_DISTANCE: f32 = 1.0e-4;

/// Which face orientation a column shows.  Vertical-edge hits are drawn
/// lit, horizontal-edge hits darker, so neighbouring faces stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Lit,
    Dark,
}

impl Shade {
    #[inline(always)]
    pub fn of(hit_vertical: bool) -> Self {
        if hit_vertical { Shade::Lit } else { Shade::Dark }
    }
}

/// Vertical slice of the texture to sample, as fractions of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexWindow {
    pub v0: f32,
    pub v_span: f32,
}

impl TexWindow {
    pub const FULL: TexWindow = TexWindow {
        v0: 0.0,
        v_span: 1.0,
    };
}

/// On-screen extent and shading of one wall column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnProjection {
    /// Wall height in pixels, at most the viewport height.
    pub height: f32,
    /// Top edge; the column is centred on the horizon.
    pub top: f32,
    pub tex_window: TexWindow,
    /// Distance attenuation in `(0, 1]`.
    pub brightness: f32,
    pub shade: Shade,
}

/// Turns a ray's perpendicular distance into a wall column.
///
/// Holds only constants derived from viewport and FoV; rebuilt by the
/// engine whenever either changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnProjector {
    viewport: Viewport,
    /// Wall height in viewport heights at distance 1.
    height_ratio: f32,
    brightness_scaler: f32,
}

impl ColumnProjector {
    pub fn new(viewport: Viewport, fov_deg: f32, brightness_scaler: f32) -> Self {
        let height_ratio = (viewport.h_f / viewport.w_f) / (fov_deg / 90.0);
        log::debug!(
            "projector: {}x{} fov {fov_deg} -> height ratio {height_ratio:.4}",
            viewport.w,
            viewport.h
        );
        Self {
            viewport,
            height_ratio,
            brightness_scaler,
        }
    }

    #[inline]
    pub fn height_ratio(&self) -> f32 {
        self.height_ratio
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Unclamped wall height for a perpendicular distance.
    #[inline(always)]
    pub fn wall_height(&self, perp_distance: f32) -> f32 {
        (self.viewport.h_f * self.height_ratio) / perp_distance.max(MIN_DISTANCE)
    }

    #[inline(always)]
    pub fn brightness(&self, perp_distance: f32) -> f32 {
        (self.brightness_scaler / perp_distance.max(MIN_DISTANCE)).min(1.0)
    }

    pub fn project(&self, ray: &RayHit) -> ColumnProjection {
        let vh = self.viewport.h_f;
        let mut height = self.wall_height(ray.perp_distance);
        let mut tex_window = TexWindow::FULL;

        // Closer than the full-screen distance: keep the column at viewport
        // height and sample only the middle of the texture, so the wall
        // zooms in instead of spilling off-screen.
        if height > vh {
            let visible = vh / height;
            tex_window = TexWindow {
                v0: (1.0 - visible) * 0.5,
                v_span: visible,
            };
            height = vh;
        }

        ColumnProjection {
            height,
            top: self.viewport.half_h - height * 0.5,
            tex_window,
            brightness: self.brightness(ray.perp_distance),
            shade: Shade::of(ray.hit_vertical),
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
