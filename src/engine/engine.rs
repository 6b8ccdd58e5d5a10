use glam::Vec2;

use crate::{
    config::{ConfigError, RenderQuality, Settings, ShadingMode},
    engine::{
        angles::AngleTable,
        automap,
        caster::RayCaster,
        projection::{ColumnProjector, Shade},
        types::{RayHit, Viewport},
    },
    renderer::{Color, DrawCall, Rect},
    world::{
        Grid,
        texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId},
    },
};

/// Texture the walls are drawn with, plus the size needed to build
/// source rectangles without borrowing the bank every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WallSkin {
    id: TextureId,
    w: usize,
    h: usize,
}

/// Renderer context: owns the grid, the per-column angle table and the
/// per-frame ray and draw-call buffers.
///
/// Every setter that changes ray count or FoV rebuilds the angle table
/// before it returns, so a frame can never see a table sized for an older
/// resolution.
pub struct Engine {
    settings: Settings,
    viewport: Viewport,
    grid: Grid,
    column_w: u32,
    table: AngleTable,
    projector: ColumnProjector,
    wall: WallSkin,
    rays: Vec<RayHit>,
    calls: Vec<DrawCall>,
}

impl Engine {
    pub fn new(settings: Settings, grid: Grid) -> Result<Self, ConfigError> {
        settings.validate()?;
        let viewport = Viewport::new(settings.viewport_width, settings.viewport_height);
        let column_w = settings.quality.column_pixel_width();
        let fallback = Texture::default();

        let mut engine = Self {
            viewport,
            grid,
            column_w,
            table: AngleTable::default(),
            projector: ColumnProjector::new(viewport, settings.fov_deg, settings.brightness_scaler),
            wall: WallSkin {
                id: NO_TEXTURE,
                w: fallback.w,
                h: fallback.h,
            },
            rays: Vec::new(),
            calls: Vec::new(),
            settings,
        };
        engine.rebuild_table();
        Ok(engine)
    }

    /*──────────────────────────── setters ───────────────────────────*/

    /// Pixels per ray.  Clamped to `1..=viewport width`.
    pub fn set_resolution(&mut self, column_pixel_width: u32) {
        let column_w = column_pixel_width.clamp(1, self.viewport.w);
        if column_w != self.column_w {
            self.column_w = column_w;
            self.rebuild_table();
        }
    }

    pub fn set_quality(&mut self, quality: RenderQuality) {
        self.settings.quality = quality;
        self.set_resolution(quality.column_pixel_width());
    }

    /// Horizontal FoV in degrees, clamped to `[1, 179]`.
    pub fn set_field_of_view(&mut self, fov_deg: f32) {
        let fov_deg = fov_deg.clamp(1.0, 179.0);
        self.settings.fov_deg = fov_deg;
        self.projector =
            ColumnProjector::new(self.viewport, fov_deg, self.settings.brightness_scaler);
        self.rebuild_table();
    }

    /// Replace the traversal grid.  The caller guarantees a solid border.
    pub fn set_map(&mut self, grid: Grid) {
        if let Err(e) = grid.check_border() {
            log::warn!("installing map without a solid border: {e}");
        }
        log::info!("map replaced: {0}x{0}", grid.size());
        self.grid = grid;
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.settings.shading = shading;
    }

    /// Wall texture used in textured mode.  The id must come from the bank
    /// frames will be drawn with.
    pub fn set_wall_texture(
        &mut self,
        bank: &TextureBank,
        id: TextureId,
    ) -> Result<(), TextureError> {
        let tex = bank.texture(id)?;
        if tex.w == 0 || tex.h == 0 {
            return Err(TextureError::BadSize {
                name: tex.name.clone(),
                w: tex.w,
                h: tex.h,
                len: tex.pixels.len(),
            });
        }
        self.wall = WallSkin {
            id,
            w: tex.w,
            h: tex.h,
        };
        Ok(())
    }

    fn rebuild_table(&mut self) {
        self.table.rebuild(
            self.viewport.w,
            self.column_w,
            self.settings.fov_deg,
            self.settings.draw_distance,
        );
        // sized to the new ray count, not to the widest possible viewport
        self.rays = Vec::with_capacity(self.table.len());
        self.calls = Vec::with_capacity(self.table.len());
        log::info!(
            "angle table rebuilt: {} rays, {} px columns, fov {}",
            self.table.ray_count(),
            self.column_w,
            self.settings.fov_deg
        );
    }

    /*──────────────────────────── queries ───────────────────────────*/

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ray_count(&self) -> usize {
        self.table.ray_count()
    }

    pub fn column_pixel_width(&self) -> u32 {
        self.column_w
    }

    pub fn angle_table(&self) -> &AngleTable {
        &self.table
    }

    pub fn projector(&self) -> &ColumnProjector {
        &self.projector
    }

    /// Rays from the most recent cast.
    pub fn rays(&self) -> &[RayHit] {
        &self.rays
    }

    /*──────────────────────────── per frame ─────────────────────────*/

    /// Cast one ray per column from `pos` with the camera turned to
    /// `rotation_deg`.  Overwrites the previous frame's rays.
    pub fn cast_rays(&mut self, pos: Vec2, rotation_deg: f32) -> &[RayHit] {
        debug_assert_eq!(self.table.len(), self.table.ray_count() + 1);

        let caster = RayCaster::new(&self.grid, self.settings.draw_distance);
        self.rays.clear();
        self.rays.extend(
            self.table
                .angles()
                .iter()
                .map(|&a| caster.cast(pos, rotation_deg + a.to_degrees(), a)),
        );
        &self.rays
    }

    /// First-person view: one draw call per column, left to right.
    pub fn render_frame(&mut self, pos: Vec2, rotation_deg: f32) -> &[DrawCall] {
        self.cast_rays(pos, rotation_deg);

        let projector = self.projector;
        let shading = self.settings.shading;
        let wall = self.wall;
        let column_w = self.column_w as f32;
        let tex_w = wall.w as f32;
        let tex_h = wall.h as f32;
        // fraction of the texture width one column covers
        let width_percent = column_w / self.viewport.w_f;

        self.calls.clear();
        for (i, ray) in self.rays.iter().enumerate() {
            let col = projector.project(ray);
            let dst = Rect::new(i as f32 * column_w, col.top, column_w, col.height);

            let call = match shading {
                ShadingMode::Textured => {
                    let base = match col.shade {
                        Shade::Lit => Color::WHITE,
                        Shade::Dark => Color::DARK_GRAY,
                    };
                    DrawCall::Textured {
                        tex_id: wall.id,
                        src: Rect::new(
                            ray.tex_offset * tex_w,
                            col.tex_window.v0 * tex_h,
                            width_percent * tex_w,
                            col.tex_window.v_span * tex_h,
                        ),
                        dst,
                        tint: base.scaled(col.brightness),
                    }
                }
                ShadingMode::Flat => {
                    let base = match col.shade {
                        Shade::Lit => Color::RED,
                        Shade::Dark => Color::RED.scaled(0.5),
                    };
                    DrawCall::Flat {
                        dst,
                        color: base.scaled(col.brightness),
                    }
                }
            };
            self.calls.push(call);
        }
        &self.calls
    }

    /// Top-down view of the grid with this frame's rays.
    pub fn render_map(&mut self, pos: Vec2, rotation_deg: f32) -> &[DrawCall] {
        self.cast_rays(pos, rotation_deg);
        self.calls.clear();
        automap::compose(
            &self.grid,
            &self.rays,
            pos,
            rotation_deg,
            self.viewport,
            &mut self.calls,
        );
        &self.calls
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
