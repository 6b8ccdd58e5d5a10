//! Interactive viewer on the CPU backend.
//!
//! ```bash
//! cargo run --release -- [--map level.txt] [--config settings.json] [--quality low]
//! ```
//!
//! W/S or ↑/↓ move, A/D or ←/→ turn, TAB cycles the draw mode, R cycles
//! render quality, T toggles textured/flat walls, Esc quits.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

use gridcaster::{
    DrawMode, Engine, RenderQuality, Settings,
    renderer::{RendererExt, Software},
    sim::{InputCmd, Player},
    world::{Grid, Texture, TextureBank},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// JSON settings file; missing keys fall back to defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Text map (`#` wall, `.` floor); the built-in map if omitted
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// very-low, low, medium, high or ultra
    #[arg(long)]
    quality: Option<RenderQuality>,

    /// Horizontal field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Window scale factor (1, 2 or 4)
    #[arg(long, default_value_t = 1)]
    scale: u8,
}

fn window_scale(factor: u8) -> Scale {
    match factor {
        0 | 1 => Scale::X1,
        2 | 3 => Scale::X2,
        _ => Scale::X4,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    // ─────────── settings & map ───────
    let mut settings = match &opts.config {
        Some(path) => Settings::from_json_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(q) = opts.quality {
        settings.quality = q;
    }
    if let Some(fov) = opts.fov {
        settings.fov_deg = fov;
    }

    let grid = match &opts.map {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?
            .parse::<Grid>()
            .with_context(|| format!("parsing map {}", path.display()))?,
        None => Grid::reference(),
    };

    let (w, h) = (
        settings.viewport_width as usize,
        settings.viewport_height as usize,
    );
    let mut engine = Engine::new(settings, grid).context("invalid settings")?;

    let mut bank = TextureBank::default_with_checker();
    let wall_id = bank.insert("BRICKS", Texture::bricks("BRICKS", 64, 0x8C3A2B, 0x9A9A90))?;
    engine.set_wall_texture(&bank, wall_id)?;

    let mut renderer = Software::default();
    renderer.set_backdrop(engine.settings().ceiling_color, engine.settings().floor_color);

    let mut player = Player::default();
    let mut draw_mode = DrawMode::default();

    let mut win = Window::new(
        "gridcaster",
        w,
        h,
        WindowOptions {
            scale: window_scale(opts.scale),
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last
    let mut last_frame = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start
        let dt = t0.duration_since(last_frame).as_secs_f32().min(0.1);
        last_frame = t0;

        /* ---------------- toggles ----------------------------------------- */
        if win.is_key_pressed(Key::Tab, KeyRepeat::No) {
            draw_mode = draw_mode.next();
            log::info!("draw mode: {draw_mode:?}");
        }
        if win.is_key_pressed(Key::R, KeyRepeat::No) {
            let quality = engine.settings().quality.next();
            engine.set_quality(quality);
            log::info!("render quality: {}", quality.as_str());
        }
        if win.is_key_pressed(Key::T, KeyRepeat::No) {
            let shading = engine.settings().shading.toggle();
            engine.set_shading(shading);
            log::info!("shading: {shading:?}");
        }

        /* ---------------- movement ---------------------------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn += 1.0;
        }
        player.apply(cmd, dt, engine.grid());

        /* ---------------- draw -------------------------------------------- */
        let calls = if draw_mode.is_map() {
            engine.render_map(player.pos(), player.rotation())
        } else {
            engine.render_frame(player.pos(), player.rotation())
        };

        let mut submitted = Ok(());
        renderer.draw_frame(w, h, calls, &bank, |fb, fw, fh| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            submitted = win.update_with_buffer(fb, fw, fh);
        });
        submitted.context("presenting frame")?;

        // ─────────── report every ~3 s ────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            if draw_mode.is_debug() {
                log::info!(
                    "pose ({:.2}, {:.2}) @ {:.1}°  mode {draw_mode:?}  {} rays",
                    player.pos().x,
                    player.pos().y,
                    player.rotation(),
                    engine.ray_count()
                );
            }
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
