//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! It produces a list of [`DrawCall`]s (one per screen column for the 3-D
//! view) and hands them to a type that implements [`Renderer`].
//!
//! * You can plug multiple back-ends without changing the caster.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use serde::{Deserialize, Serialize};

use crate::world::texture::{TextureBank, TextureId};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// 8-bit RGB colour used for tints and flat fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const DARK_GRAY: Color = Color::rgb(80, 80, 80);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `k` (clamped to `[0, 1]`).
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        let k = k.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * k) as u8,
            g: (self.g as f32 * k) as u8,
            b: (self.b as f32 * k) as u8,
        }
    }

    #[inline(always)]
    pub fn to_rgba(self) -> Rgba {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Channel-wise `texel * self / 255`.
    #[inline(always)]
    pub fn modulate(self, texel: Rgba) -> Rgba {
        let r = ((texel >> 16) & 0xFF) * self.r as u32 / 255;
        let g = ((texel >> 8) & 0xFF) * self.g as u32 / 255;
        let b = (texel & 0xFF) * self.b as u32 / 255;
        r << 16 | g << 8 | b
    }
}

/// Axis-aligned rectangle in pixels (screen) or texels (texture).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// One primitive for a backend to rasterise.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// Stretch `src` (texels of `tex_id`) over `dst`, multiplied by `tint`.
    Textured {
        tex_id: TextureId,
        src: Rect,
        dst: Rect,
        tint: Color,
    },
    /// Solid rectangle.
    Flat { dst: Rect, color: Color },
    /// One-pixel line, used by the automap.
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager;
/// GPU back-ends can ignore the slice because they never allocate it.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one draw call into the internal buffer.
    fn draw(&mut self, call: &DrawCall, bank: &TextureBank);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        calls: &[DrawCall],
        bank: &TextureBank,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in calls {
            self.draw(c, bank);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;
