use glam::Vec2;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub w: u32,
    pub h: u32,
    pub w_f: f32,   // pre-derived for speed
    pub h_f: f32,   // pre-derived for speed
    pub half_h: f32, // horizon row
}

impl Viewport {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            w_f: w as f32,
            h_f: h as f32,
            half_h: h as f32 * 0.5,
        }
    }
}

/// Outcome of casting one column's ray.  Rebuilt every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayHit {
    /// Ray origin (the camera position).
    pub start: Vec2,
    /// Wall hit point, or the draw-distance point on a miss.
    pub end: Vec2,
    /// Distance along the view axis; drives wall height.
    pub perp_distance: f32,
    /// True if the last grid line crossed was vertical (x = const).
    pub hit_vertical: bool,
    /// False when the ray ran out of draw distance.
    pub hit: bool,
    /// Angle from the view centre (radians), fixed per column.
    pub cast_angle: f32,
    /// Position along the wall face in `[0, 1)`.
    pub tex_offset: f32,
}
