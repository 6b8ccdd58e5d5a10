//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Draw calls are applied in order; walls never overlap so no Z-buffer
//!   is needed.
//! * `begin_frame` paints the backdrop: ceiling over the top half, floor
//!   over the bottom half.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{Color, DrawCall, Rect, Renderer, Rgba},
    world::texture::{Texture, TextureBank},
};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
    ceiling: Rgba,
    floor: Rgba,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        let split = (h / 2) * w;
        self.scratch[..split].fill(self.ceiling);
        self.scratch[split..].fill(self.floor);
    }

    fn draw(&mut self, call: &DrawCall, bank: &TextureBank) {
        match *call {
            DrawCall::Textured {
                tex_id,
                src,
                dst,
                tint,
            } => self.draw_textured(bank.texture_or_missing(tex_id), src, dst, tint),
            DrawCall::Flat { dst, color } => self.fill_rect(dst, color.to_rgba()),
            DrawCall::Line {
                x0,
                y0,
                x1,
                y1,
                color,
            } => self.draw_line(x0, y0, x1, y1, color.to_rgba()),
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl Software {
    /// Colours painted by `begin_frame` above / below the horizon.
    pub fn set_backdrop(&mut self, ceiling: Color, floor: Color) {
        self.ceiling = ceiling.to_rgba();
        self.floor = floor.to_rgba();
    }

    /// Integer pixel span whose centres fall inside `[start, start + len)`,
    /// clipped to `0..limit`.
    #[inline(always)]
    fn covered(start: f32, len: f32, limit: usize) -> (usize, usize) {
        let lo = (start - 0.5).ceil().max(0.0) as usize;
        let hi = ((start + len - 0.5).ceil().max(0.0) as usize).min(limit);
        (lo.min(hi), hi)
    }

    fn fill_rect(&mut self, dst: Rect, col: Rgba) {
        if dst.w <= 0.0 || dst.h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::covered(dst.x, dst.w, self.width);
        let (y0, y1) = Self::covered(dst.y, dst.h, self.height);
        for y in y0..y1 {
            self.scratch[y * self.width + x0..y * self.width + x1].fill(col);
        }
    }

    /// Nearest-neighbour stretch of `src` over `dst`.
    fn draw_textured(&mut self, tex: &Texture, src: Rect, dst: Rect, tint: Color) {
        if dst.w <= 0.0 || dst.h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::covered(dst.x, dst.w, self.width);
        let (y0, y1) = Self::covered(dst.y, dst.h, self.height);

        /* texels per screen pixel */
        let du = src.w / dst.w;
        let dv = src.h / dst.h;

        for x in x0..x1 {
            let u = (src.x + (x as f32 + 0.5 - dst.x) * du).floor() as i32;
            let mut v = src.y + (y0 as f32 + 0.5 - dst.y) * dv;
            for y in y0..y1 {
                self.scratch[y * self.width + x] = tint.modulate(tex.texel(u, v.floor() as i32));
                v += dv;
            }
        }
    }

    /// Integer Bresenham line, clipped per pixel.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgba) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if (0..self.width as i32).contains(&x0) && (0..self.height as i32).contains(&y0) {
                self.scratch[y0 as usize * self.width + x0 as usize] = col;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
