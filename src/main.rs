use std::io::{stdout, BufWriter, Write};
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use space_shooter::assets::GameAssets;
use space_shooter::config::GameConfig;
use space_shooter::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use space_shooter::display::{self, Viewport};
use space_shooter::error::GameError;
use space_shooter::input::KeyTracker;
use space_shooter::scene::{SceneManager, StartScene};

fn fit(cols: u16, rows: u16) -> Viewport {
    Viewport::fit(cols, rows, WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Drive the scene stack until it empties or the player quits.
///
/// Each frame: drain pending terminal events, sample input, let the active
/// scene handle it, update, draw into the frame buffer, present, then sleep
/// out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    scenes: &mut SceneManager,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut view = fit(cols, rows);
    let mut frame_buffer = view.frame_buffer();
    let mut keys = KeyTracker::new(config.hold_window);
    let frame_len = config.frame_duration();
    let mut frame: u64 = 0;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    while !scenes.is_empty() {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(event) = rx.try_recv() {
            if let Event::Resize(cols, rows) = event {
                log::debug!("Terminal resized to {}x{}", cols, rows);
                view = fit(cols, rows);
                frame_buffer = view.frame_buffer();
                out.queue(terminal::Clear(terminal::ClearType::All))?;
                continue;
            }
            keys.handle(&event, frame, &view);
        }
        if keys.quit_requested() {
            log::info!("Quit requested");
            break;
        }

        let input = keys.snapshot(frame);
        scenes.handle_events(&input);
        scenes.update();

        frame_buffer.clear();
        scenes.draw(&mut frame_buffer);
        display::present(out, &frame_buffer, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("space_shooter: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load()?;

    // Sprites load before the terminal is touched so a missing asset is
    // reported on a normal screen.
    let provider = config.asset_provider();
    let assets = Rc::new(GameAssets::load(provider.as_ref())?);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut scenes = SceneManager::new();
    scenes.push(Box::new(StartScene::new(
        assets,
        StdRng::seed_from_u64(rng.gen()),
    )));

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold
    // window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::warn!("Terminal event read failed: {}", err);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut scenes, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
