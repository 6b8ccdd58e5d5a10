//! Grid DDA ray caster.
//!
//! Walks a ray across successive grid-line crossings (never sampling at
//! fixed intervals, so no cell is skipped) until it steps into a solid
//! cell or runs past the draw distance.

use glam::Vec2;

use crate::{
    engine::types::RayHit,
    world::{Grid, helpers},
};

/// Axis components below this are treated as exactly parallel to the axis.
const AXIS_EPSILON: f32 = 1.0e-6;

/// Stand-in for the infinite step length of an axis-parallel ray.
/// Large enough to never win a comparison, small enough to stay finite
/// after a few additions.
const DEGENERATE_STEP: f32 = 1.0e30;

/// Per-axis DDA state.
#[derive(Clone, Copy, Debug)]
struct AxisWalk {
    /// Ray length per one-unit move along this axis.
    step: f32,
    /// Ray length to the next grid line on this axis.
    length: f32,
    /// ±1, or 0 for a degenerate axis.
    dir: i32,
}

impl AxisWalk {
    #[inline(always)]
    fn new(pos: f32, cell: i32, f: f32) -> Self {
        if f.abs() < AXIS_EPSILON {
            return Self {
                step: DEGENERATE_STEP,
                length: DEGENERATE_STEP,
                dir: 0,
            };
        }
        // for a unit vector sqrt(1 + (fo/f)^2) == 1/|f|
        let step = f.abs().recip();
        if f < 0.0 {
            Self {
                step,
                length: (pos - cell as f32) * step,
                dir: -1,
            }
        } else {
            Self {
                step,
                length: (cell as f32 + 1.0 - pos) * step,
                dir: 1,
            }
        }
    }
}

/// Casts rays into a borrowed, read-only grid.
///
/// One caster serves every column of a frame; it holds no per-ray state and
/// never allocates.
#[derive(Clone, Copy, Debug)]
pub struct RayCaster<'a> {
    grid: &'a Grid,
    draw_distance: f32,
    /// Hard cap on DDA iterations, derived from `draw_distance`.
    max_steps: u32,
}

impl<'a> RayCaster<'a> {
    pub fn new(grid: &'a Grid, draw_distance: f32) -> Self {
        // every step adds ≥ 1 to one accumulator, so each axis can step at
        // most ⌈draw_distance⌉ + 1 times before it passes the cut-off
        let max_steps = 2 * (draw_distance.max(0.0).ceil() as u32 + 1) + 1;
        Self {
            grid,
            draw_distance,
            max_steps,
        }
    }

    #[inline]
    pub fn draw_distance(&self) -> f32 {
        self.draw_distance
    }

    /// Cast one ray.
    ///
    /// * `origin`      – camera position; must lie inside the bordered
    ///   interior of the grid.
    /// * `heading_deg` – absolute ray heading in degrees
    ///   (camera rotation + `cast_angle`).
    /// * `cast_angle`  – the ray's offset from the view centre in radians;
    ///   only used to remove fisheye from the returned distance.
    pub fn cast(&self, origin: Vec2, heading_deg: f32, cast_angle: f32) -> RayHit {
        debug_assert!(origin.is_finite(), "ray origin {origin} is not finite");

        let f = helpers::forward(heading_deg);

        let mut col = origin.x.floor() as i32;
        let mut row = origin.y.floor() as i32;

        let mut x = AxisWalk::new(origin.x, col, f.x);
        let mut y = AxisWalk::new(origin.y, row, f.y);

        let mut hit = false;
        let mut hit_vertical = false;
        let mut travelled = self.draw_distance;

        for _ in 0..self.max_steps {
            // step along the shorter accumulator
            let vertical = x.length < y.length;
            let length = if vertical { x.length } else { y.length };
            if length > self.draw_distance {
                break;
            }
            if vertical {
                col += x.dir;
                x.length += x.step;
            } else {
                row += y.dir;
                y.length += y.step;
            }
            hit_vertical = vertical;

            if self.grid.is_solid(col, row) {
                // accumulator value *before* this step's increment
                travelled = length;
                hit = true;
                break;
            }
        }

        // `travelled` is the true ray length; only the projection distance
        // gets the fisheye correction, and it uses the column's offset from
        // the view centre rather than the absolute heading
        let end = origin + f * travelled;
        let perp_distance = travelled * cast_angle.cos();

        let tex_offset = if hit_vertical {
            helpers::fract01(end.y)
        } else {
            helpers::fract01(end.x)
        };

        RayHit {
            start: origin,
            end,
            perp_distance,
            hit_vertical,
            hit,
            cast_angle,
            tex_offset,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> Grid {
        Grid::bordered(10)
    }

    #[test]
    fn east_from_reference_start_hits_column_nine() {
        let g = Grid::reference();
        let hit = RayCaster::new(&g, 20.0).cast(Vec2::new(1.5, 1.5), 0.0, 0.0);
        assert!(hit.hit);
        assert!(hit.hit_vertical);
        assert!((hit.perp_distance - 7.5).abs() < 1e-5);
        assert!((hit.end - Vec2::new(9.0, 1.5)).length() < 1e-5);
        assert!((hit.tex_offset - 0.5).abs() < 1e-5);
    }

    #[test]
    fn cardinal_headings_measure_euclidean_distance() {
        let g = open_room();
        let caster = RayCaster::new(&g, 20.0);
        let p = Vec2::new(3.25, 6.5);
        // east, south, west, north walls at x=9, y=9, x=1, y=1
        let cases = [(0.0, 5.75, true), (90.0, 2.5, false), (180.0, 2.25, true), (270.0, 5.5, false)];
        for (heading, expected, vertical) in cases {
            let hit = caster.cast(p, heading, 0.0);
            assert!(hit.hit, "heading {heading}");
            assert_eq!(hit.hit_vertical, vertical, "heading {heading}");
            assert!(
                (hit.perp_distance - expected).abs() < 1e-4,
                "heading {heading}: {} != {expected}",
                hit.perp_distance
            );
        }
    }

    #[test]
    fn near_axis_heading_stays_finite() {
        let g = open_room();
        let caster = RayCaster::new(&g, 20.0);
        // f32 cos(90°) is ~-4e-8, far below AXIS_EPSILON
        for heading in [90.0, 270.0, 90.000_01, 180.0, 360.0, -180.0] {
            let hit = caster.cast(Vec2::new(5.0, 5.0), heading, 0.0);
            assert!(hit.perp_distance.is_finite());
            assert!(hit.end.is_finite());
            assert!(hit.hit);
        }
    }

    #[test]
    fn mirrored_offsets_give_equal_distances() {
        let g = open_room();
        let caster = RayCaster::new(&g, 20.0);
        let p = Vec2::new(1.5, 5.0); // y = 5 is the room's mirror line
        for a in [0.1f32, 0.3, 0.45] {
            let l = caster.cast(p, (-a).to_degrees(), -a);
            let r = caster.cast(p, a.to_degrees(), a);
            assert!((l.perp_distance - r.perp_distance).abs() < 1e-4);
            // flat wall facing the camera: corrected distance is the same
            assert!((l.perp_distance - 7.5).abs() < 1e-3);
        }
    }

    #[test]
    fn correction_uses_relative_not_absolute_angle() {
        let g = open_room();
        let caster = RayCaster::new(&g, 20.0);
        // camera turned to 90° (south); column straight ahead has cast angle 0
        let hit = caster.cast(Vec2::new(5.0, 1.5), 90.0, 0.0);
        assert!((hit.perp_distance - 7.5).abs() < 1e-4);
    }

    #[test]
    fn obstruction_is_hit_before_border() {
        let mut g = open_room();
        g.set(6, 4, true);
        let caster = RayCaster::new(&g, 20.0);
        let p = Vec2::new(2.5, 4.5);

        let blocked = caster.cast(p, 0.0, 0.0);
        assert!(blocked.hit_vertical);
        assert!((blocked.perp_distance - 3.5).abs() < 1e-5);

        // one row down there is nothing in the way
        let clear = caster.cast(Vec2::new(2.5, 5.5), 0.0, 0.0);
        assert!(blocked.perp_distance < clear.perp_distance);

        // from below, the near face is horizontal
        let from_below = caster.cast(Vec2::new(6.5, 7.5), 270.0, 0.0);
        assert!(!from_below.hit_vertical);
        assert!((from_below.perp_distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn draw_distance_cuts_off_as_a_miss() {
        let g = Grid::bordered(40);
        let caster = RayCaster::new(&g, 5.0);
        let hit = caster.cast(Vec2::new(2.5, 20.5), 0.0, 0.0);
        assert!(!hit.hit);
        assert!((hit.perp_distance - 5.0).abs() < 1e-5);
        assert!((hit.end - Vec2::new(7.5, 20.5)).length() < 1e-5);
    }

    #[test]
    fn wall_beyond_cut_off_is_not_reported() {
        let g = Grid::bordered(10);
        // wall at 7.5 units, cut-off at 7.0
        let hit = RayCaster::new(&g, 7.0).cast(Vec2::new(1.5, 5.5), 0.0, 0.0);
        assert!(!hit.hit);
    }

    #[test]
    fn diagonal_hits_corner_region() {
        let g = open_room();
        let hit = RayCaster::new(&g, 20.0).cast(Vec2::new(5.5, 5.5), 45.0, 0.0);
        assert!(hit.hit);
        // (5.5,5.5) → (9,9) along the diagonal
        assert!((hit.perp_distance - 3.5 * std::f32::consts::SQRT_2).abs() < 1e-3);
        assert!(hit.tex_offset >= 0.0 && hit.tex_offset < 1.0);
    }
}
