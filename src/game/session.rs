//! Pure simulation core: per-frame entity lifecycle, collision, scoring,
//! leveling and the word-bonus evaluator. No browser APIs here; the web glue
//! in the parent module owns a [`GameSession`] and performs the side effects
//! described by the [`GameEvent`]s each tick returns.

use super::bubble::Bubble;
use super::particle::{Particle, ParticleKind};
use super::player::Player;
use super::rng::SimpleRng;
use crate::{
    BUBBLE_SPAWN_RATE, COMMON_WORDS, FLOATER_COLORS, LEVEL_THRESHOLD, MIN_BUBBLE_SPAWN_RATE,
    WORD_BONUS_MULTIPLIER,
};

/// Particles emitted per popped bubble.
const BURST_SIZE: usize = 12;
const STAR_CHANCE: f64 = 0.3;
const FLOATER_COUNT: usize = 50;
const POINTER_TRAIL_CAP: usize = 15;

/// Which pop sample the audio sink should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopSound {
    Single,
    Plop,
}

/// Side effects requested by a tick, performed fire-and-forget by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelUp(u32),
    WordBonus { word: &'static str, points: u64 },
    PlayPop(PopSound),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u64,
    pub letters_collected: u32,
    pub level: u32,
    pub game_frame: u64,
    pub is_paused: bool,
    pub is_muted: bool,
    pub collected_word: String,
    pub bubble_spawn_rate: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            letters_collected: 0,
            level: 1,
            game_frame: 0,
            is_paused: false,
            is_muted: false,
            collected_word: String::new(),
            bubble_spawn_rate: BUBBLE_SPAWN_RATE,
        }
    }

    /// Recompute the level from letters collected. On an increase the spawn
    /// interval tightens (never below the floor) and a level-up event is
    /// emitted; repeated calls without new letters emit nothing.
    pub fn update_level(&mut self, events: &mut Vec<GameEvent>) {
        let new_level = self.letters_collected / LEVEL_THRESHOLD + 1;
        if new_level > self.level {
            self.level = new_level;
            self.bubble_spawn_rate = BUBBLE_SPAWN_RATE
                .saturating_sub(self.level as u64 * 5)
                .max(MIN_BUBBLE_SPAWN_RATE);
            events.push(GameEvent::LevelUp(self.level));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Continuously-updated pointer target supplied by the input listeners.
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
    /// Recent pointer positions, oldest first (decorative trail).
    pub trail: Vec<(f64, f64)>,
}

impl PointerState {
    fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressed: false,
            trail: Vec::new(),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.trail.push((x, y));
        if self.trail.len() > POINTER_TRAIL_CAP {
            self.trail.remove(0);
        }
    }
}

/// Slow decorative dot drifting up the background; wraps at the top edge.
pub struct Floater {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub color: &'static str,
}

/// One game: all entity lists, the score state, the pointer and the RNG.
/// Owned exclusively by the single frame loop; nothing here is shared.
pub struct GameSession {
    pub state: GameState,
    pub player: Player,
    pub bubbles: Vec<Bubble>,
    pub particles: Vec<Particle>,
    pub floaters: Vec<Floater>,
    pub pointer: PointerState,
    pub width: f64,
    pub height: f64,
    rng: SimpleRng,
}

impl GameSession {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let floaters = (0..FLOATER_COUNT)
            .map(|_| Floater {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                size: rng.next_f64() * 3.0 + 1.0,
                speed: rng.range(0.2, 0.7),
                opacity: rng.range(0.1, 0.4),
                color: if rng.chance(0.5) {
                    FLOATER_COLORS[0]
                } else {
                    FLOATER_COLORS[1]
                },
            })
            .collect();
        Self {
            state: GameState::new(),
            player: Player::new(width / 2.0, height / 2.0),
            bubbles: Vec::new(),
            particles: Vec::new(),
            floaters,
            pointer: PointerState::new(width / 2.0, height / 2.0),
            width,
            height,
            rng,
        }
    }

    /// Track canvas size so spawning and wrapping follow window resizes.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance the simulation one frame. No-op while paused (the frame
    /// counter does not advance either). Within a tick the order is fixed:
    /// background floaters, bubbles (spawn / update / collide / prune),
    /// particles, player.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_paused {
            return events;
        }
        self.state.game_frame += 1;

        self.update_floaters();
        self.handle_bubbles(&mut events);
        self.handle_particles();
        self.player.update(
            self.pointer.x,
            self.pointer.y,
            self.state.game_frame,
            &mut self.rng,
        );
        events
    }

    /// Spawn on cadence, then rebuild the bubble list from a drained
    /// snapshot: expired bubbles drop, collided bubbles are consumed, the
    /// rest survive. Rebuilding avoids the skipped-element hazard of
    /// removing from a list while iterating it.
    fn handle_bubbles(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.game_frame % self.state.bubble_spawn_rate == 0 {
            self.bubbles
                .push(Bubble::spawn(self.width, self.height, &mut self.rng));
        }

        let mut kept = Vec::with_capacity(self.bubbles.len());
        for mut bubble in std::mem::take(&mut self.bubbles) {
            bubble.update(self.state.game_frame);
            if bubble.is_gone() {
                continue;
            }
            if bubble.check_collision(&self.player) {
                self.collect(bubble, events);
            } else {
                kept.push(bubble);
            }
        }
        self.bubbles = kept;
    }

    /// Consume one collided bubble: particle burst, pop sound request,
    /// score, letter bookkeeping, word check, level check.
    fn collect(&mut self, bubble: Bubble, events: &mut Vec<GameEvent>) {
        for _ in 0..BURST_SIZE {
            let kind = if self.rng.chance(STAR_CHANCE) {
                ParticleKind::Star
            } else {
                ParticleKind::Normal
            };
            self.particles.push(Particle::burst(
                bubble.x,
                bubble.y,
                bubble.color,
                kind,
                &mut self.rng,
            ));
        }

        if !self.state.is_muted {
            let sound = if self.rng.chance(0.5) {
                PopSound::Single
            } else {
                PopSound::Plop
            };
            events.push(GameEvent::PlayPop(sound));
        }

        self.state.score += 10 * self.state.level as u64;
        self.state.letters_collected += 1;
        self.state.collected_word.push(bubble.letter);

        self.check_for_words(events);
        self.state.update_level(events);
    }

    /// Scan the bonus word list in declared order; credit the first word
    /// contained in the buffer, strip its first occurrence only, and stop.
    /// An embedded match can leave a nonsensical remainder; that looseness
    /// is carried over deliberately.
    pub fn check_for_words(&mut self, events: &mut Vec<GameEvent>) {
        let word = self.state.collected_word.to_uppercase();
        for &common in COMMON_WORDS {
            if word.contains(common) {
                let points = common.len() as u64 * WORD_BONUS_MULTIPLIER;
                self.state.score += points;
                events.push(GameEvent::WordBonus {
                    word: common,
                    points,
                });
                self.state.collected_word = word.replacen(common, "", 1);
                break;
            }
        }
    }

    fn handle_particles(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|particle| !particle.is_dead());
    }

    fn update_floaters(&mut self) {
        for floater in &mut self.floaters {
            floater.y -= floater.speed;
            if floater.y < -10.0 {
                floater.y = self.height + 10.0;
                floater.x = self.rng.next_f64() * self.width;
            }
        }
    }

    /// Restore the game state to its constructor values, empty the entity
    /// lists and recenter the player. Background floaters keep drifting.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.bubbles.clear();
        self.particles.clear();
        self.player.reposition(self.width / 2.0, self.height / 2.0);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.is_paused = !self.state.is_paused;
        self.state.is_paused
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.state.is_muted = !self.state.is_muted;
        self.state.is_muted
    }

    /// Text handed to the share action (clipboard / share sheet is JS glue).
    pub fn share_text(&self) -> String {
        format!(
            "I just scored {} points in Ocean Letter Quest! Can you beat my score?",
            self.state.score
        )
    }
}
