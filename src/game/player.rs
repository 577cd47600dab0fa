//! The fish avatar: accelerates toward the pointer with friction and a speed
//! cap, leaves a fading trail, and sheds small wake bubbles when moving fast.

use super::rng::SimpleRng;
use crate::PLAYER_SPEED;

pub const PLAYER_RADIUS: f64 = 45.0;

const ACCELERATION: f64 = 0.3;
const FRICTION: f64 = 0.85;
/// Inside this pointer distance the fish stops accelerating (prevents jitter).
const DEAD_ZONE: f64 = 5.0;
const TRAIL_CAP: usize = 20;
/// Speed above which wake bubbles are emitted.
const WAKE_SPEED: f64 = 5.0;
const WAKE_LIFE_DECAY: f64 = 0.02;
const WAKE_SIZE_DECAY: f64 = 0.98;
/// Sprite animation cadence (frames of movement per animation cell).
const ANIMATION_SPEED: f64 = 8.0;

pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
    pub size: f64,
}

/// Short-lived wake bubble shed while swimming fast.
pub struct WakeBubble {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub life: f64,
}

pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub speed: f64,
    pub max_speed: f64,
    pub radius: f64,
    pub angle: f64,
    pub target_angle: f64,
    pub facing_right: bool,
    pub animation_frame: f64,
    pub frame_x: u32,
    pub trail: Vec<TrailPoint>,
    pub wake: Vec<WakeBubble>,
    pub glow_intensity: f64,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            speed: 0.0,
            max_speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            angle: 0.0,
            target_angle: 0.0,
            facing_right: true,
            animation_frame: 0.0,
            frame_x: 0,
            trail: Vec::new(),
            wake: Vec::new(),
            glow_intensity: 0.0,
        }
    }

    /// Reset-time repositioning: recenters and clears motion and effects.
    pub fn reposition(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.speed = 0.0;
        self.trail.clear();
        self.wake.clear();
    }

    /// One frame of kinematics toward the pointer target.
    pub fn update(&mut self, target_x: f64, target_y: f64, game_frame: u64, rng: &mut SimpleRng) {
        let dx = target_x - self.x;
        let dy = target_y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        // Sine-damped angle smoothing sidesteps the wrap discontinuity a naive
        // linear lerp toward atan2 would hit at +/-pi.
        self.target_angle = dy.atan2(dx);
        let angle_diff = self.target_angle - self.angle;
        self.angle += angle_diff.sin() * 0.1;

        if distance > DEAD_ZONE {
            self.vx += (dx / distance) * ACCELERATION;
            self.vy += (dy / distance) * ACCELERATION;
        }

        self.vx *= FRICTION;
        self.vy *= FRICTION;

        self.speed = (self.vx * self.vx + self.vy * self.vy).sqrt();
        if self.speed > self.max_speed {
            self.vx = (self.vx / self.speed) * self.max_speed;
            self.vy = (self.vy / self.speed) * self.max_speed;
            self.speed = self.max_speed;
        }

        self.x += self.vx;
        self.y += self.vy;

        self.facing_right = self.vx > 0.0;

        if self.speed > 1.0 {
            self.animation_frame += self.speed * 0.3;
            self.frame_x = (self.animation_frame / ANIMATION_SPEED) as u32 % 4;
        } else {
            self.frame_x = 0;
        }

        self.trail.push(TrailPoint {
            x: self.x,
            y: self.y,
            alpha: 1.0,
            size: self.radius * 0.8,
        });
        if self.trail.len() > TRAIL_CAP {
            self.trail.remove(0);
        }
        let trail_len = self.trail.len() as f64;
        for (i, point) in self.trail.iter_mut().enumerate() {
            point.alpha = (i as f64 / trail_len) * 0.4;
            point.size *= 0.95;
        }

        if self.speed > WAKE_SPEED {
            self.wake.push(WakeBubble {
                x: self.x + (rng.next_f64() - 0.5) * 30.0,
                y: self.y + (rng.next_f64() - 0.5) * 30.0,
                vx: (rng.next_f64() - 0.5) * 2.0,
                vy: (rng.next_f64() - 0.5) * 2.0,
                size: rng.next_f64() * 8.0 + 3.0,
                life: 1.0,
            });
        }
        for bubble in &mut self.wake {
            bubble.x += bubble.vx;
            bubble.y += bubble.vy;
            bubble.life -= WAKE_LIFE_DECAY;
            bubble.size *= WAKE_SIZE_DECAY;
        }
        self.wake.retain(|bubble| bubble.life > 0.0);

        self.glow_intensity = (game_frame as f64 * 0.1).sin() * 0.3 + 0.7;
    }
}
