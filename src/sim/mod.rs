pub mod collision;
pub mod player;

pub use collision::can_move;
pub use player::{InputCmd, Player};
