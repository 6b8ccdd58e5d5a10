pub mod angles;
pub mod automap;
pub mod caster;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod projection;
pub mod types;

pub use angles::AngleTable;
pub use caster::RayCaster;
pub use engine::Engine;
pub use projection::{ColumnProjection, ColumnProjector, Shade, TexWindow};
pub use types::{RayHit, Viewport};
