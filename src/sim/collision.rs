//! Circle-vs-grid collision for the camera's body.
//!
//! A body whose radius is below half a cell can only overlap the cell it
//! stands in and its eight neighbours, so those are all that get tested.
//! Diagonal neighbours matter at convex corners, where both edge-adjacent
//! cells are open but the corner cell is solid.

use glam::Vec2;

use crate::world::Grid;

/// Neighbours as (dcol, drow): edges first, then corners.
const NEIGHBOURS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// `true` if a circle of `radius` touches the unit cell at (`col`, `row`).
#[inline]
pub fn circle_touches_cell(centre: Vec2, radius: f32, col: i32, row: i32) -> bool {
    let min = Vec2::new(col as f32, row as f32);
    let closest = centre.clamp(min, min + Vec2::ONE);
    centre.distance_squared(closest) <= radius * radius
}

/// Can a body of `radius` (< 0.5) stand at `pos`?
pub fn can_move(grid: &Grid, pos: Vec2, radius: f32) -> bool {
    if !pos.is_finite() {
        return false;
    }
    let col = pos.x.floor() as i32;
    let row = pos.y.floor() as i32;
    if grid.is_solid_or_outside(col, row) {
        return false;
    }

    NEIGHBOURS.iter().all(|&(dc, dr)| {
        let (c, r) = (col + dc, row + dr);
        !(grid.is_solid_or_outside(c, r) && circle_touches_cell(pos, radius, c, r))
    })
}
