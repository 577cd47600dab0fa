//! Letter bubble entity: rises from the bottom edge, bobs sideways, fades out
//! near the top, and is consumed when the player touches it.

use std::f64::consts::TAU;

use super::player::Player;
use super::rng::SimpleRng;
use crate::{BUBBLE_COLORS, BUBBLE_SPEED};

/// Margin below the bottom edge where new bubbles appear.
const SPAWN_MARGIN: f64 = 50.0;
/// Below this y the bubble alpha tapers linearly to zero.
const FADE_BAND: f64 = 100.0;
const SPARKLE_COUNT: usize = 5;

/// Twinkling highlight point inside a bubble (visual only).
pub struct Sparkle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub phase: f64,
    pub speed: f64,
}

pub struct Bubble {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub letter: char,
    pub color: &'static str,
    pub bob_offset: f64,
    pub bob_speed: f64,
    pub base_scale: f64,
    pub scale: f64,
    pub alpha: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub pulse_phase: f64,
    pub sparkles: Vec<Sparkle>,
}

impl Bubble {
    pub fn spawn(width: f64, height: f64, rng: &mut SimpleRng) -> Self {
        let radius = 20.0 + rng.next_f64() * 20.0;
        let sparkles = (0..SPARKLE_COUNT)
            .map(|_| Sparkle {
                x: (rng.next_f64() - 0.5) * radius,
                y: (rng.next_f64() - 0.5) * radius,
                size: rng.next_f64() * 3.0 + 1.0,
                phase: rng.next_f64() * TAU,
                speed: rng.range(0.05, 0.15),
            })
            .collect();
        let base_scale = 0.8 + rng.next_f64() * 0.4;
        Self {
            x: rng.next_f64() * width,
            y: height + SPAWN_MARGIN,
            radius,
            speed: BUBBLE_SPEED + rng.next_f64() * 3.0,
            letter: (b'A' + rng.index(26) as u8) as char,
            color: BUBBLE_COLORS[rng.index(BUBBLE_COLORS.len())],
            bob_offset: rng.next_f64() * TAU,
            bob_speed: 0.02 + rng.next_f64() * 0.03,
            base_scale,
            scale: base_scale,
            alpha: 0.9,
            rotation: 0.0,
            rotation_speed: (rng.next_f64() - 0.5) * 0.05,
            pulse_phase: rng.next_f64() * TAU,
            sparkles,
        }
    }

    /// One frame of motion: rise, sinusoidal bob, rotation, pulse, fade.
    pub fn update(&mut self, game_frame: u64) {
        self.y -= self.speed;
        self.x += (self.bob_offset + game_frame as f64 * self.bob_speed).sin() * 1.5;
        self.rotation += self.rotation_speed;

        let pulse = (game_frame as f64 * 0.1 + self.pulse_phase).sin() * 0.1 + 1.0;
        self.scale = self.base_scale * pulse;

        for sparkle in &mut self.sparkles {
            sparkle.phase += sparkle.speed;
        }

        if self.y < FADE_BAND {
            self.alpha = (self.y / FADE_BAND).max(0.0);
        }
    }

    /// Off the top edge or fully faded; either way the spawner drops it.
    pub fn is_gone(&self) -> bool {
        self.y < -self.radius || self.alpha <= 0.0
    }

    /// Circle-circle test, strict: centers exactly `radius + player.radius`
    /// apart do not collide.
    pub fn check_collision(&self, player: &Player) -> bool {
        let dx = self.x - player.x;
        let dy = self.y - player.y;
        (dx * dx + dy * dy).sqrt() < self.radius + player.radius
    }
}
