pub mod camera;
pub mod grid;
pub mod helpers;
pub mod texture;

pub use camera::Camera;

pub use grid::{Grid, MapError};

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
