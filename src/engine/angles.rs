//! Per-column cast angles.
//!
//! Stepping the ray angle uniformly (`fov / rays`) spaces the columns
//! evenly in *angle*, which bows straight walls at wide FoVs.  Instead each
//! column is placed at an even step across a flat projection plane
//! `draw_distance` ahead of the camera and its angle is recovered with
//! `atan2`, so the plane is sliced into equal-width strips.

/// Cast angles (radians, relative to the view centre) for `ray_count + 1`
/// columns, left to right.  Rebuilt only when ray count or FoV changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleTable {
    angles: Vec<f32>,
    ray_count: usize,
}

impl AngleTable {
    /// * `viewport_w` – viewport width in pixels (≥ 2)
    /// * `column_w`   – pixels per ray
    /// * `fov_deg`    – horizontal field of view
    pub fn new(viewport_w: u32, column_w: u32, fov_deg: f32, draw_distance: f32) -> Self {
        let mut table = Self::default();
        table.rebuild(viewport_w, column_w, fov_deg, draw_distance);
        table
    }

    /// Recompute in place, reusing the allocation where possible.
    pub fn rebuild(&mut self, viewport_w: u32, column_w: u32, fov_deg: f32, draw_distance: f32) {
        let column_w = column_w.max(1);
        let ray_count = (viewport_w / column_w) as usize;
        let x_max = viewport_w.saturating_sub(1).max(1) as f32;
        let half_width = draw_distance * (fov_deg * 0.5).to_radians().tan();

        self.ray_count = ray_count;
        self.angles.clear();
        self.angles.resize(ray_count + 1, 0.0);

        for i in 0..=ray_count / 2 {
            let x_screen = (i as u32 * column_w) as f32;
            let x_plane = ((x_screen * 2.0 - x_max) / x_max) * half_width;
            let angle = x_plane.atan2(draw_distance);
            self.angles[i] = angle;
            self.angles[ray_count - i] = -angle;
        }

        // mirror symmetry pins the centre column to straight ahead
        if ray_count % 2 == 0 {
            self.angles[ray_count / 2] = 0.0;
        }
    }

    /// Number of rays; the table holds one more entry than this.
    #[inline]
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    #[inline]
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
