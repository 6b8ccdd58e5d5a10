use glam::Vec2;

use crate::{sim::collision::can_move, world::{Camera, Grid}};

/// Map units per second.
pub const MOVE_SPEED: f32 = 2.0;
/// Degrees per second.
pub const ROTATE_SPEED: f32 = 90.0;
/// Body radius in map units.
pub const COLLIDER_RADIUS: f32 = 0.2;

/// One frame of player intent, built from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1  (back / forward)
    pub turn: f32,    // –1 … +1  (left / right)
}

/// The camera's body: pose plus movement tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub camera: Camera,
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl Player {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            move_speed: MOVE_SPEED,
            rotate_speed: ROTATE_SPEED,
            radius: COLLIDER_RADIUS,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.camera.pos
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.camera.rotation
    }

    /// Advance by `dt` seconds.  Turning always applies; a step that would
    /// put the body into a wall is dropped whole.  Returns whether the
    /// position changed.
    pub fn apply(&mut self, cmd: InputCmd, dt: f32, grid: &Grid) -> bool {
        let turn = cmd.turn.clamp(-1.0, 1.0);
        if turn != 0.0 {
            self.camera.turn(turn * self.rotate_speed * dt);
        }

        let forward = cmd.forward.clamp(-1.0, 1.0);
        if forward == 0.0 {
            return false;
        }
        let next = self.camera.ahead(forward * self.move_speed * dt);
        if can_move(grid, next, self.radius) {
            self.camera.pos = next;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_forward_along_heading() {
        let g = Grid::reference();
        let mut p = Player::default();
        let moved = p.apply(InputCmd { forward: 1.0, turn: 0.0 }, 0.5, &g);
        assert!(moved);
        assert!((p.pos() - Vec2::new(2.5, 1.5)).length() < 1e-5);
    }

    #[test]
    fn turning_wraps_into_range() {
        let g = Grid::reference();
        let mut p = Player::default();
        p.apply(InputCmd { forward: 0.0, turn: -1.0 }, 1.0, &g);
        assert!((p.rotation() - 270.0).abs() < 1e-4);
        p.apply(InputCmd { forward: 0.0, turn: 1.0 }, 2.0, &g);
        assert!((p.rotation() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn blocked_step_leaves_position_unchanged() {
        let g = Grid::reference();
        let mut p = Player::default();
        // facing west; a 0.4 step would leave the body 0.1 from the x = 1 face
        p.camera.rotation = 180.0;
        let before = p.pos();
        assert!(!p.apply(InputCmd { forward: 1.0, turn: 0.0 }, 0.2, &g));
        assert_eq!(p.pos(), before);
    }

    #[test]
    fn diagonal_walk_stops_short_of_pillar_corner() {
        let g = Grid::reference();
        let mut p = Player::new(Camera::new(Vec2::new(4.5, 1.5), 45.0));
        let cmd = InputCmd { forward: 1.0, turn: 0.0 };
        for _ in 0..120 {
            p.apply(cmd, 1.0 / 60.0, &g);
        }
        // (5, 2) is solid; its corner is the nearest wall point
        assert!(p.pos().distance(Vec2::new(5.0, 2.0)) > p.radius);
        assert!(p.pos().x > 4.6);
    }

    #[test]
    fn backing_up_moves_against_heading() {
        let g = Grid::reference();
        let mut p = Player::new(Camera::new(Vec2::new(4.5, 3.5), 0.0));
        assert!(p.apply(InputCmd { forward: -1.0, turn: 0.0 }, 0.25, &g));
        assert!((p.pos().x - 4.0).abs() < 1e-5);
    }
}
