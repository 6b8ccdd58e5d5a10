//! Top-down debug view: the grid as tiles, this frame's rays as lines and
//! the camera as a marker with a heading tick.

use glam::Vec2;

use crate::{
    engine::types::{RayHit, Viewport},
    renderer::{Color, DrawCall, Rect},
    world::{Grid, helpers},
};

/// Gap left between neighbouring tiles, in pixels.
const TILE_GAP: f32 = 2.0;
/// Rays this close to the centre column are highlighted.
const CENTRE_SPREAD: usize = 3;
/// Camera marker half-size, in tiles.
const MARKER_RADIUS: f32 = 0.2;
/// Heading tick length, in pixels.
const HEADING_LEN: f32 = 25.0;

/// Pixels per grid cell: the whole grid fits the viewport height.
#[inline]
pub fn tile_size(grid: &Grid, viewport: Viewport) -> f32 {
    (viewport.h / grid.size().max(1) as u32) as f32
}

/// Append the automap for one frame to `out`.
pub fn compose(
    grid: &Grid,
    rays: &[RayHit],
    pos: Vec2,
    rotation_deg: f32,
    viewport: Viewport,
    out: &mut Vec<DrawCall>,
) {
    let tile = tile_size(grid, viewport);
    let px = |p: Vec2| ((p.x * tile) as i32, (p.y * tile) as i32);

    for (col, row, solid) in grid.cells() {
        out.push(DrawCall::Flat {
            dst: Rect::new(
                col as f32 * tile,
                row as f32 * tile,
                tile - TILE_GAP,
                tile - TILE_GAP,
            ),
            color: if solid { Color::RED } else { Color::BLUE },
        });
    }

    let centre = rays.len().saturating_sub(1) / 2;
    for (i, ray) in rays.iter().enumerate() {
        let (x0, y0) = px(ray.start);
        let (x1, y1) = px(ray.end);
        let color = if i.abs_diff(centre) <= CENTRE_SPREAD {
            Color::YELLOW
        } else {
            Color::PURPLE
        };
        out.push(DrawCall::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    let r = MARKER_RADIUS * tile;
    let centre_px = pos * tile;
    out.push(DrawCall::Flat {
        dst: Rect::new(centre_px.x - r, centre_px.y - r, 2.0 * r, 2.0 * r),
        color: Color::GREEN,
    });

    let tip = helpers::rotate_around_point(
        centre_px,
        centre_px + Vec2::new(HEADING_LEN, 0.0),
        rotation_deg,
    );
    let (x0, y0) = px(pos);
    out.push(DrawCall::Line {
        x0,
        y0,
        x1: tip.x as i32,
        y1: tip.y as i32,
        color: Color::GREEN,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(end: Vec2) -> RayHit {
        RayHit {
            start: Vec2::new(1.5, 1.5),
            end,
            hit: true,
            ..RayHit::default()
        }
    }

    #[test]
    fn tiles_rays_and_marker() {
        let grid = Grid::reference();
        let rays: Vec<RayHit> = (0..=20).map(|i| ray(Vec2::new(9.0, 1.0 + i as f32 * 0.1))).collect();
        let mut out = Vec::new();
        compose(&grid, &rays, Vec2::new(1.5, 1.5), 0.0, Viewport::new(640, 480), &mut out);

        assert_eq!(out.len(), 100 + rays.len() + 2);
        assert_eq!(tile_size(&grid, Viewport::new(640, 480)), 48.0);

        // (0,0) is border, (1,1) is open
        match (&out[0], &out[11]) {
            (DrawCall::Flat { dst, color: Color::RED }, DrawCall::Flat { color: Color::BLUE, .. }) => {
                assert_eq!(dst.w, 46.0);
            }
            other => panic!("unexpected {other:?}"),
        }

        let line_colors: Vec<Color> = out[100..100 + rays.len()]
            .iter()
            .map(|c| match c {
                DrawCall::Line { color, .. } => *color,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(line_colors.iter().filter(|&&c| c == Color::YELLOW).count(), 7);
        assert_eq!(line_colors[10], Color::YELLOW);
        assert_eq!(line_colors[0], Color::PURPLE);

        match out.last() {
            Some(DrawCall::Line { x0, y0, x1, y1, color }) => {
                assert_eq!(*color, Color::GREEN);
                assert_eq!((*x0, *y0), (72, 72));
                assert_eq!((*x1, *y1), (97, 72));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
