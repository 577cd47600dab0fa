//! Ocean Letter Quest core crate.
//!
//! A browser arcade game: a fish avatar follows the pointer, pops rising
//! letter-bubbles, accumulates score and levels, and spells bonus words from
//! the letters it collects. The simulation core under [`game::session`] is
//! pure Rust so it runs under native `cargo test`; canvas rendering, DOM
//! overlays, input listeners and audio live in the web-facing glue of
//! [`game`] and only execute in the browser.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Game tuning constants & shared datasets
// -----------------------------------------------------------------------------

/// Frames between bubble spawns at level 1.
pub const BUBBLE_SPAWN_RATE: u64 = 60;
/// Hard floor for the spawn interval no matter how high the level climbs.
pub const MIN_BUBBLE_SPAWN_RATE: u64 = 30;
/// Base vertical rise speed of a bubble (per-bubble random extra on top).
pub const BUBBLE_SPEED: f64 = 2.0;
/// Player speed cap.
pub const PLAYER_SPEED: f64 = 12.0;
/// Letters collected per level step.
pub const LEVEL_THRESHOLD: u32 = 50;
/// Score awarded per letter of a completed bonus word.
pub const WORD_BONUS_MULTIPLIER: u64 = 100;

/// Bonus words, scanned in this order; at most one is credited per collection.
pub const COMMON_WORDS: &[&str] = &[
    "FISH", "OCEAN", "WATER", "BLUE", "SWIM", "DEEP", "WAVE", "CORAL", "SHELL",
    "PEARL", "STAR", "GOLD", "MAGIC",
];

/// Bubble fill palette (hex, alpha suffixes appended at draw time).
pub const BUBBLE_COLORS: &[&str] = &[
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff",
    "#5f27cd", "#00d2d3", "#ff9f43", "#10ac84", "#ee5a24",
];

/// Decorative background drift particles alternate between these two tints.
pub const FLOATER_COLORS: [&str; 2] = ["#87ceeb", "#b0e0e6"];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_ocean_mode()
}
