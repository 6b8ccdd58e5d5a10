//! Wolfenstein-style grid raycaster.
//!
//! * [`world`]    – the occupancy grid, camera pose and texture bank.
//! * [`engine`]   – angle table, DDA ray caster, column projector and the
//!   [`Engine`](engine::Engine) that turns a camera pose into draw calls.
//! * [`renderer`] – [`DrawCall`](renderer::DrawCall)s and the CPU backend.
//! * [`sim`]      – player movement and collision against the grid.
//! * [`config`]   – serde-backed settings.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{ConfigError, DrawMode, RenderQuality, Settings, ShadingMode};
pub use engine::Engine;
