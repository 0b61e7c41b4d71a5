use std::rc::Rc;

use space_shooter::assets::{BuiltinAssets, GameAssets};
use space_shooter::display::{self, Canvas, FrameBuffer, Viewport};
use space_shooter::scene::{GameScene, Navigator, Scene};
use space_shooter::sprite::{Rgba, Sprite};
use space_shooter::widget::{Align, Label};

use rand::rngs::StdRng;
use rand::SeedableRng;

const RED: Rgba = Rgba::rgb(255, 0, 0);

fn buffer() -> FrameBuffer {
    FrameBuffer::new(600.0, 600.0, 60, 60)
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_fills_a_matching_terminal() {
    let view = Viewport::fit(60, 30, 600.0, 600.0);
    assert_eq!((view.px_width, view.px_height), (60, 60));
    assert_eq!((view.origin_col, view.origin_row), (0, 0));
}

#[test]
fn viewport_is_centred_in_a_wide_terminal() {
    let view = Viewport::fit(100, 30, 600.0, 600.0);
    assert_eq!((view.px_width, view.px_height), (60, 60));
    assert_eq!(view.origin_col, 20);

    assert_eq!(view.to_logical(20, 0), Some((5.0, 10.0)));
    assert_eq!(view.to_logical(19, 0), None);
    assert_eq!(view.to_logical(20, 30), None);
}

#[test]
fn tiny_terminal_still_gets_a_grid() {
    let view = Viewport::fit(0, 0, 600.0, 600.0);
    assert!(view.px_width >= 1 && view.px_height >= 2);
    let fb = view.frame_buffer();
    assert_eq!((fb.width(), fb.height()), (view.px_width, view.px_height));
}

// ── Rasterising ───────────────────────────────────────────────────────────────

#[test]
fn circle_paints_pixels_under_it() {
    let mut fb = buffer();
    fb.fill_circle(300.0, 300.0, 50.0, Rgba::WHITE);
    assert_eq!(fb.pixel(30, 30), Rgba::WHITE);
    assert_eq!(fb.pixel_at(300.0, 260.0), Rgba::WHITE);
    assert_eq!(fb.pixel(0, 0), Rgba::BLACK);
}

#[test]
fn sub_pixel_shapes_still_show() {
    let mut fb = buffer();
    fb.fill_circle(301.0, 301.0, 1.0, Rgba::WHITE);
    assert_eq!(fb.pixel(30, 30), Rgba::WHITE);

    fb.fill_rect(121.0, 121.0, 2.0, 2.0, RED);
    assert_eq!(fb.pixel(12, 12), RED);
}

#[test]
fn blit_respects_scale_and_transparency() {
    let mut fb = buffer();
    fb.blit(&Sprite::filled(2, 2, RED), 100.0, 100.0, 10.0, 255);
    assert_eq!(fb.pixel(10, 10), RED);
    assert_eq!(fb.pixel(11, 11), RED);
    assert_eq!(fb.pixel(12, 12), Rgba::BLACK);

    fb.blit(&Sprite::filled(2, 2, Rgba::TRANSPARENT), 100.0, 100.0, 10.0, 255);
    assert_eq!(fb.pixel(10, 10), RED);

    fb.blit(&Sprite::filled(2, 2, Rgba::WHITE), 100.0, 100.0, 10.0, 0);
    assert_eq!(fb.pixel(10, 10), RED);
}

#[test]
fn clear_resets_pixels_and_text() {
    let mut fb = buffer();
    fb.fill(RED);
    fb.draw_text(10.0, 10.0, "hi", Rgba::WHITE);
    fb.clear();
    assert_eq!(fb.pixel(5, 5), Rgba::BLACK);
    assert!(fb.texts().is_empty());
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[test]
fn text_lands_on_the_cell_under_it() {
    let mut fb = buffer();
    fb.draw_text(10.0, 10.0, "Live: 3", Rgba::WHITE);
    let run = &fb.texts()[0];
    assert_eq!((run.col, run.row), (1, 0));
    assert_eq!(run.text, "Live: 3");
    assert_eq!(fb.text_size("abc"), (30.0, 20.0));
}

#[test]
fn label_anchor_moves_the_text() {
    let mut fb = buffer();
    Label::new(300.0, 300.0, "abcd", Rgba::WHITE)
        .anchored(Align::MidCenter)
        .draw(&mut fb);
    Label::new(300.0, 300.0, "hidden", Rgba::WHITE)
        .hidden()
        .draw(&mut fb);

    assert_eq!(fb.texts().len(), 1);
    // 40 logical wide, 20 high → top-left at (280, 290).
    assert_eq!((fb.texts()[0].col, fb.texts()[0].row), (28, 14));
}

#[test]
fn game_scene_draws_hud_and_presents() {
    let assets = Rc::new(GameAssets::load(&BuiltinAssets).unwrap());
    let mut game = GameScene::new(assets, StdRng::seed_from_u64(11));
    game.update(&mut Navigator::default());

    let view = Viewport::fit(60, 30, 600.0, 600.0);
    let mut fb = view.frame_buffer();
    game.draw(&mut fb);
    assert!(fb.texts().iter().any(|run| run.text == "Live: 3"));
    assert!(fb.texts().iter().any(|run| run.text == "Score: 0"));
    assert!(!fb.texts().iter().any(|run| run.text == "You Lose!"));

    let mut out = Vec::new();
    display::present(&mut out, &fb, &view).unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains('▀'));
    assert!(printed.contains("Live: 3"));
}
