//! Sprite loading.
//!
//! The game asks for images by logical name through [`AssetProvider`] and
//! never decodes anything itself.  Two providers exist: built-in character
//! art (the default) and a directory of `<name>.png` files decoded with the
//! `image` crate.  Everything is loaded once at startup by
//! [`GameAssets::load`]; a missing image is fatal.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::constants::{ENEMY_SIZE, PLAYER_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::entities::EnemyColor;
use crate::sprite::{Rgba, Sprite};

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to load asset: {0}")]
    LoadFailed(String),

    #[error("invalid asset data: {0}")]
    InvalidData(String),
}

// ── Logical names ─────────────────────────────────────────────────────────────

pub const BACKGROUND: &str = "background-black";
pub const PLAYER_SHIP: &str = "pixel_ship_yellow";
pub const PLAYER_LASER: &str = "pixel_laser_yellow";
pub const SMOKE: &str = "smoke";

fn enemy_ship_name(color: EnemyColor) -> &'static str {
    match color {
        EnemyColor::Red => "pixel_ship_red_small",
        EnemyColor::Green => "pixel_ship_green_small",
        EnemyColor::Blue => "pixel_ship_blue_small",
    }
}

fn enemy_laser_name(color: EnemyColor) -> &'static str {
    match color {
        EnemyColor::Red => "pixel_laser_red",
        EnemyColor::Green => "pixel_laser_green",
        EnemyColor::Blue => "pixel_laser_blue",
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

pub trait AssetProvider {
    /// Decoded image for a logical asset name.
    fn load(&self, name: &str) -> Result<Sprite, AssetError>;
}

/// Loads `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.png", name))
    }
}

impl AssetProvider for DirectoryAssets {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }
        log::debug!("Loading image from: {:?}", path);
        decode_file(&path)
    }
}

fn decode_file(path: &Path) -> Result<Sprite, AssetError> {
    let img = image::open(path)
        .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("Loaded image {}x{} from {:?}", width, height, path);
    Sprite::from_rgba8(width, height, rgba.as_raw())
}

/// Character-art sprites compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

const PLAYER_ART: &[&str] = &[
    "....##....",
    "....##....",
    "...#oo#...",
    "...#oo#...",
    "..##oo##..",
    ".########.",
    "##########",
    "##.####.##",
    "#..#..#..#",
    "...#..#...",
];

const ENEMY_ART: &[&str] = &[
    "#......#",
    "##.##.##",
    "########",
    "##o##o##",
    ".######.",
    "..####..",
    "...##...",
    "...##...",
];

// Lasers are drawn at the firing ship's origin, so the bolt sits in the
// middle of a canvas the size of the ship.
const LASER_ART: &[&str] = &[
    "..........",
    "..........",
    "....##....",
    "...#oo#...",
    "...#oo#...",
    "...#oo#...",
    "...#oo#...",
    "....##....",
    "..........",
    "..........",
];

fn ship_palette(color: EnemyColor) -> [(char, Rgba); 2] {
    match color {
        EnemyColor::Red => [('#', Rgba::rgb(200, 40, 40)), ('o', Rgba::rgb(255, 200, 200))],
        EnemyColor::Green => [('#', Rgba::rgb(40, 180, 60)), ('o', Rgba::rgb(200, 255, 200))],
        EnemyColor::Blue => [('#', Rgba::rgb(50, 90, 220)), ('o', Rgba::rgb(200, 220, 255))],
    }
}

fn smoke_puff() -> Sprite {
    const SIZE: u32 = 64;
    let c = (SIZE as f32 - 1.0) / 2.0;
    Sprite::from_fn(SIZE, SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt() / c;
        if d >= 1.0 {
            Rgba::TRANSPARENT
        } else {
            Rgba::new(190, 190, 190, ((1.0 - d) * 255.0) as u8)
        }
    })
}

impl AssetProvider for BuiltinAssets {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        let yellow = [('#', Rgba::rgb(235, 200, 40)), ('o', Rgba::rgb(255, 120, 0))];
        let sprite = match name {
            BACKGROUND => Sprite::filled(1, 1, Rgba::BLACK),
            PLAYER_SHIP => Sprite::from_art(PLAYER_ART, &yellow),
            PLAYER_LASER => Sprite::from_art(LASER_ART, &yellow),
            SMOKE => smoke_puff(),
            other => {
                let found = EnemyColor::ALL.iter().find_map(|&color| {
                    if other == enemy_ship_name(color) {
                        Some(Sprite::from_art(ENEMY_ART, &ship_palette(color)))
                    } else if other == enemy_laser_name(color) {
                        Some(Sprite::from_art(LASER_ART, &ship_palette(color)))
                    } else {
                        None
                    }
                });
                found.ok_or_else(|| AssetError::NotFound(other.to_string()))?
            }
        };
        Ok(sprite)
    }
}

// ── Loaded set ────────────────────────────────────────────────────────────────

/// Every sprite the game draws, already scaled to its in-game size.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub background: Rc<Sprite>,
    pub player_ship: Rc<Sprite>,
    pub player_laser: Rc<Sprite>,
    pub smoke: Rc<Sprite>,
    enemy_ships: [Rc<Sprite>; 3],
    enemy_lasers: [Rc<Sprite>; 3],
}

impl GameAssets {
    pub fn load(provider: &dyn AssetProvider) -> Result<Self, AssetError> {
        let scaled = |name: &str, (w, h): (u32, u32)| -> Result<Rc<Sprite>, AssetError> {
            Ok(Rc::new(provider.load(name)?.scaled(w, h)))
        };
        let enemy = |name: fn(EnemyColor) -> &'static str| -> Result<[Rc<Sprite>; 3], AssetError> {
            Ok([
                scaled(name(EnemyColor::Red), ENEMY_SIZE)?,
                scaled(name(EnemyColor::Green), ENEMY_SIZE)?,
                scaled(name(EnemyColor::Blue), ENEMY_SIZE)?,
            ])
        };

        let assets = Self {
            background: scaled(BACKGROUND, (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32))?,
            player_ship: scaled(PLAYER_SHIP, PLAYER_SIZE)?,
            player_laser: scaled(PLAYER_LASER, PLAYER_SIZE)?,
            smoke: Rc::new(provider.load(SMOKE)?),
            enemy_ships: enemy(enemy_ship_name)?,
            enemy_lasers: enemy(enemy_laser_name)?,
        };
        log::info!("All sprites loaded");
        Ok(assets)
    }

    /// Ship and laser sprites for an enemy colour.
    pub fn enemy(&self, color: EnemyColor) -> (Rc<Sprite>, Rc<Sprite>) {
        let i = color as usize;
        (self.enemy_ships[i].clone(), self.enemy_lasers[i].clone())
    }
}
