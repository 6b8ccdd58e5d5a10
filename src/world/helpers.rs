use glam::Vec2;

/// Unit vector for a heading in degrees (0° = +X / east, angles grow
/// toward +Y, which is "down" on the map).
#[inline(always)]
pub fn forward(angle_deg: f32) -> Vec2 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Vec2::new(c, s)
}

/// Rotate `point` around `origin` by `angle_deg`.
#[inline]
pub fn rotate_around_point(origin: Vec2, point: Vec2, angle_deg: f32) -> Vec2 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let d = point - origin;
    origin + Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
}

/// Fractional part mapped into `[0, 1)`, also for negative inputs.
#[inline(always)]
pub fn fract01(v: f32) -> f32 {
    let f = v - v.floor();
    // `-1e-9 - (-1.0)` rounds up to exactly 1.0 in f32
    if f >= 1.0 { 0.0 } else { f }
}

/// Wrap degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle_deg: f32) -> f32 {
    let a = angle_deg.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
