//! End-to-end: settings → engine → software backend → pixels.

use glam::Vec2;

use gridcaster::{
    DrawMode, Engine, RenderQuality, Settings, ShadingMode,
    renderer::{Color, DrawCall, Rgba, RendererExt, Software},
    sim::{InputCmd, Player},
    world::{Grid, Texture, TextureBank},
};

const W: usize = 640;
const H: usize = 480;

fn setup() -> (Engine, TextureBank, Software) {
    let settings = Settings::default();
    let mut sw = Software::default();
    sw.set_backdrop(settings.ceiling_color, settings.floor_color);

    let mut engine = Engine::new(settings, Grid::reference()).unwrap();
    let mut bank = TextureBank::default_with_checker();
    let wall = Texture::checker("WALL", 64, 1, 0xFFFFFF, 0xFFFFFF);
    let id = bank.insert("WALL", wall).unwrap();
    engine.set_wall_texture(&bank, id).unwrap();
    (engine, bank, sw)
}

fn present(sw: &mut Software, calls: &[DrawCall], bank: &TextureBank) -> Vec<Rgba> {
    let mut out = Vec::new();
    sw.draw_frame(W, H, calls, bank, |fb, w, h| {
        assert_eq!((w, h), (W, H));
        out = fb.to_vec();
    });
    out
}

#[test]
fn first_person_frame_has_wall_between_ceiling_and_floor() {
    let (mut engine, bank, mut sw) = setup();
    let calls = engine.render_frame(Vec2::new(1.5, 1.5), 0.0).to_vec();
    let fb = present(&mut sw, &calls, &bank);

    let ceiling = Color::LIGHT_GRAY.to_rgba();
    let floor = Color::DARK_GRAY.to_rgba();
    let centre = W / 2;

    assert_eq!(fb[centre], ceiling);
    assert_eq!(fb[(H - 1) * W + centre], floor);

    // wall 7.5 units ahead, lit face, white texture
    let wall = fb[(H / 2) * W + centre];
    let expected = Color::WHITE.scaled(4.0 / 7.5).to_rgba();
    assert_ne!(wall, ceiling);
    assert_ne!(wall, floor);
    assert!(((wall & 0xFF) as i32 - (expected & 0xFF) as i32).abs() <= 1);
}

#[test]
fn every_column_is_covered() {
    let (mut engine, bank, mut sw) = setup();
    // a floor colour no wall tint can produce
    let floor = Color::rgb(1, 2, 3);
    sw.set_backdrop(Color::BLACK, floor);
    for quality in RenderQuality::ALL {
        engine.set_quality(quality);
        let calls = engine.render_frame(Vec2::new(4.5, 5.5), 33.0).to_vec();
        assert_eq!(calls.len(), engine.ray_count() + 1);

        let fb = present(&mut sw, &calls, &bank);
        let horizon = &fb[(H / 2) * W..(H / 2 + 1) * W];
        // the reference map is closed, so a wall crosses the horizon everywhere
        assert!(
            horizon.iter().all(|&p| p != floor.to_rgba()),
            "{quality:?} left a gap"
        );
    }
}

#[test]
fn flat_shading_is_red_family() {
    let (mut engine, bank, mut sw) = setup();
    engine.set_shading(ShadingMode::Flat);
    let calls = engine.render_frame(Vec2::new(1.5, 1.5), 0.0).to_vec();
    let fb = present(&mut sw, &calls, &bank);
    let p = fb[(H / 2) * W + W / 2];
    let (r, g) = ((p >> 16) & 0xFF, (p >> 8) & 0xFF);
    assert!(r > g);
}

#[test]
fn automap_shows_border_and_rays() {
    let (mut engine, bank, mut sw) = setup();
    let calls = engine.render_map(Vec2::new(1.5, 1.5), 0.0).to_vec();
    let fb = present(&mut sw, &calls, &bank);

    // centre of tile (0, 0): border wall
    assert_eq!(fb[24 * W + 24], Color::RED.to_rgba());
    // centre ray runs east along y = 1.5 tiles = 72 px
    assert_eq!(fb[72 * W + 200], Color::YELLOW.to_rgba());
}

#[test]
fn walking_into_a_wall_stops_short() {
    let (engine, _, _) = setup();
    let mut player = Player::default();
    let forward = InputCmd {
        forward: 1.0,
        turn: 0.0,
    };
    for _ in 0..600 {
        player.apply(forward, 1.0 / 60.0, engine.grid());
    }
    // east wall face at x = 9
    assert!(player.pos().x < 9.0 - player.radius);
    assert!(player.pos().x > 8.5);
}

#[test]
fn json_settings_drive_the_engine() {
    let settings = Settings::from_json_str(r#"{ "quality": "VeryLow", "fov_deg": 90.0 }"#).unwrap();
    let engine = Engine::new(settings, Grid::reference()).unwrap();
    assert_eq!(engine.ray_count(), 80);
    let last = *engine.angle_table().angles().last().unwrap();
    assert!((last - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
}

#[test]
fn draw_mode_cycle_reaches_the_map() {
    let mut mode = DrawMode::default();
    let mut seen_map = false;
    for _ in 0..4 {
        mode = mode.next();
        seen_map |= mode.is_map();
    }
    assert!(seen_map);
    assert_eq!(mode, DrawMode::Game);
}
