//! Burst particles emitted when a bubble pops.

use std::f64::consts::TAU;

use super::rng::SimpleRng;

const DRAG: f64 = 0.98;
const LIFE_DECAY: f64 = 0.015;
const SIZE_DECAY: f64 = 0.99;
const GRAVITY: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Filled disc, sinks.
    Normal,
    /// 5-point star polygon, sinks.
    Star,
    /// Bubble-styled disc that drifts upward instead of sinking.
    Bubble,
}

pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub decay: f64,
    pub size: f64,
    pub color: &'static str,
    pub kind: ParticleKind,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub gravity: f64,
}

impl Particle {
    pub fn burst(
        x: f64,
        y: f64,
        color: &'static str,
        kind: ParticleKind,
        rng: &mut SimpleRng,
    ) -> Self {
        Self {
            x,
            y,
            vx: (rng.next_f64() - 0.5) * 12.0,
            vy: (rng.next_f64() - 0.5) * 12.0,
            life: 1.0,
            decay: LIFE_DECAY,
            size: rng.next_f64() * 8.0 + 3.0,
            color,
            kind,
            rotation: rng.next_f64() * TAU,
            rotation_speed: (rng.next_f64() - 0.5) * 0.2,
            gravity: if kind == ParticleKind::Bubble {
                -GRAVITY
            } else {
                GRAVITY
            },
        }
    }

    /// Ballistic step: gravity, drag, additive life decay, multiplicative
    /// size shrink.
    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        self.vx *= DRAG;
        self.vy *= DRAG;
        self.life -= self.decay;
        self.size *= SIZE_DECAY;
        self.rotation += self.rotation_speed;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Vertices of the 5-point star polygon, relative to the particle center.
    pub fn star_points(&self) -> [(f64, f64); 5] {
        core::array::from_fn(|i| {
            let angle = i as f64 * TAU / 5.0;
            (angle.cos() * self.size, angle.sin() * self.size)
        })
    }
}
