// Integration tests (native) for the `ocean-letter-quest` simulation core.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host. Fixed RNG seeds keep spawn
// positions and letters reproducible.

use ocean_letter_quest::game::bubble::Bubble;
use ocean_letter_quest::game::particle::{Particle, ParticleKind};
use ocean_letter_quest::game::rng::SimpleRng;
use ocean_letter_quest::game::session::{GameEvent, GameSession, GameState};
use ocean_letter_quest::PLAYER_SPEED;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn session() -> GameSession {
    GameSession::new(WIDTH, HEIGHT, 42)
}

/// Move the player (and its pointer target) far away from the play field so
/// spawned bubbles can never collide with it.
fn park_player(session: &mut GameSession) {
    session.player.x = -10_000.0;
    session.player.y = -10_000.0;
    session.pointer.x = -10_000.0;
    session.pointer.y = -10_000.0;
}

/// A bubble parked on the player's center, guaranteed to collide on the next
/// tick even after one frame of motion.
fn bubble_on_player(session: &GameSession, rng: &mut SimpleRng) -> Bubble {
    let mut bubble = Bubble::spawn(WIDTH, HEIGHT, rng);
    bubble.x = session.player.x;
    bubble.y = session.player.y;
    bubble
}

#[test]
fn tick_cadence_matches_spawn_rate() {
    let mut session = session();
    park_player(&mut session);

    for _ in 0..59 {
        session.tick();
    }
    assert_eq!(session.state.game_frame, 59);
    assert_eq!(session.bubbles.len(), 0);

    session.tick();
    assert_eq!(session.state.game_frame, 60);
    assert_eq!(session.bubbles.len(), 1);

    for _ in 0..60 {
        session.tick();
    }
    assert_eq!(session.state.game_frame, 120);
    assert_eq!(session.bubbles.len(), 2);
}

#[test]
fn paused_tick_is_a_full_suspend() {
    let mut session = session();
    park_player(&mut session);
    session.state.is_paused = true;

    for _ in 0..100 {
        assert!(session.tick().is_empty());
    }
    assert_eq!(session.state.game_frame, 0);
    assert!(session.bubbles.is_empty());
    assert!(session.particles.is_empty());
}

#[test]
fn collision_is_strict_at_radius_sum() {
    let session = session();
    let mut rng = SimpleRng::new(7);
    let mut bubble = Bubble::spawn(WIDTH, HEIGHT, &mut rng);
    bubble.radius = 20.0;
    let radius_sum = bubble.radius + session.player.radius;

    bubble.y = session.player.y;
    bubble.x = session.player.x + radius_sum;
    assert!(!bubble.check_collision(&session.player));

    bubble.x = session.player.x + radius_sum - 1e-6;
    assert!(bubble.check_collision(&session.player));
}

#[test]
fn update_level_is_idempotent_without_new_letters() {
    let mut state = GameState::new();
    state.letters_collected = 50;
    let mut events = Vec::new();

    state.update_level(&mut events);
    assert_eq!(state.level, 2);
    assert_eq!(events, vec![GameEvent::LevelUp(2)]);

    events.clear();
    state.update_level(&mut events);
    assert_eq!(state.level, 2);
    assert!(events.is_empty());
}

#[test]
fn spawn_interval_never_drops_below_floor() {
    let mut state = GameState::new();
    state.letters_collected = 50 * 30; // deep into the late game
    let mut events = Vec::new();
    state.update_level(&mut events);
    assert_eq!(state.bubble_spawn_rate, 30);
}

#[test]
fn fiftieth_letter_levels_up_and_tightens_spawn_interval() {
    let mut session = session();
    session.state.letters_collected = 49;
    let mut rng = SimpleRng::new(9);
    let bubble = bubble_on_player(&session, &mut rng);
    session.bubbles.push(bubble);

    let events = session.tick();

    assert_eq!(session.state.letters_collected, 50);
    assert_eq!(session.state.level, 2);
    assert_eq!(session.state.bubble_spawn_rate, 50); // max(30, 60 - 2*5)
    assert!(events.iter().any(|e| matches!(e, GameEvent::LevelUp(2))));
    // Score was credited at the pre-level-up multiplier.
    assert_eq!(session.state.score, 10);
    assert_eq!(session.state.collected_word.len(), 1);
    assert!(session.bubbles.is_empty());
    assert_eq!(session.particles.len(), 12);
}

#[test]
fn multiple_bubbles_colliding_in_one_frame_are_each_consumed() {
    let mut session = session();
    let mut rng = SimpleRng::new(13);
    let first = bubble_on_player(&session, &mut rng);
    let second = bubble_on_player(&session, &mut rng);
    session.bubbles.push(first);
    session.bubbles.push(second);

    session.tick();

    assert_eq!(session.state.letters_collected, 2);
    assert_eq!(session.state.score, 20);
    assert_eq!(session.particles.len(), 24);
    assert!(session.bubbles.is_empty());
}

#[test]
fn muted_collection_requests_no_sound_but_still_scores() {
    let mut session = session();
    session.state.is_muted = true;
    let mut rng = SimpleRng::new(21);
    let bubble = bubble_on_player(&session, &mut rng);
    session.bubbles.push(bubble);

    let events = session.tick();

    assert!(!events.iter().any(|e| matches!(e, GameEvent::PlayPop(_))));
    assert_eq!(session.state.score, 10);
    assert_eq!(session.state.letters_collected, 1);
}

#[test]
fn bubbles_past_the_top_or_fully_faded_are_pruned() {
    let mut session = session();
    let mut rng = SimpleRng::new(5);

    let mut escaped = Bubble::spawn(WIDTH, HEIGHT, &mut rng);
    escaped.x = 700.0;
    escaped.y = -escaped.radius - 10.0;

    let mut faded = Bubble::spawn(WIDTH, HEIGHT, &mut rng);
    faded.x = 50.0;
    faded.y = 500.0;
    faded.alpha = 0.0;

    session.bubbles.push(escaped);
    session.bubbles.push(faded);
    session.tick();

    assert!(session.bubbles.is_empty());
    // Pruned bubbles are not collected: no score, no letters.
    assert_eq!(session.state.score, 0);
    assert_eq!(session.state.letters_collected, 0);
}

#[test]
fn spawned_letters_are_ascii_uppercase() {
    let mut rng = SimpleRng::new(11);
    for _ in 0..200 {
        let bubble = Bubble::spawn(WIDTH, HEIGHT, &mut rng);
        assert!(bubble.letter.is_ascii_uppercase(), "got {:?}", bubble.letter);
    }
}

#[test]
fn particle_life_exhausts_on_schedule() {
    let mut rng = SimpleRng::new(3);
    let mut particle = Particle::burst(0.0, 0.0, "#ff6b6b", ParticleKind::Normal, &mut rng);
    particle.decay = 0.25; // exactly representable: dies on precisely the 4th tick

    for _ in 0..3 {
        particle.update();
        assert!(!particle.is_dead());
    }
    particle.update();
    assert!(particle.is_dead());
}

#[test]
fn life_one_decay_0_02_runs_out_after_fifty_ticks() {
    let mut rng = SimpleRng::new(3);
    let mut particle = Particle::burst(0.0, 0.0, "#4ecdc4", ParticleKind::Star, &mut rng);
    particle.life = 1.0;
    particle.decay = 0.02;

    for _ in 0..49 {
        particle.update();
    }
    assert!(particle.life > 0.0);
    particle.update();
    assert!(
        particle.life < 1e-9,
        "life {} not exhausted after 50 ticks",
        particle.life
    );
}

#[test]
fn dead_particles_are_pruned_in_the_same_frame() {
    let mut session = session();
    let mut rng = SimpleRng::new(5);
    let mut particle = Particle::burst(10.0, 10.0, "#ff6b6b", ParticleKind::Normal, &mut rng);
    particle.life = 0.01;
    particle.decay = 0.25;
    session.particles.push(particle);

    session.tick();
    assert!(session.particles.is_empty());
}

#[test]
fn bubble_kind_particles_drift_upward() {
    let mut rng = SimpleRng::new(17);
    let mut particle = Particle::burst(0.0, 0.0, "#54a0ff", ParticleKind::Bubble, &mut rng);
    particle.vy = 0.0;
    particle.update();
    assert!(particle.vy < 0.0);

    let mut sinker = Particle::burst(0.0, 0.0, "#54a0ff", ParticleKind::Normal, &mut rng);
    sinker.vy = 0.0;
    sinker.update();
    assert!(sinker.vy > 0.0);
}

#[test]
fn player_speed_is_clamped_and_trail_is_bounded() {
    let mut session = session();
    session.pointer.set_position(1_000_000.0, HEIGHT / 2.0);
    for _ in 0..300 {
        session.tick();
        assert!(session.player.speed <= PLAYER_SPEED + 1e-9);
        assert!(session.player.trail.len() <= 20);
    }
}

#[test]
fn reset_restores_startup_state_and_empties_entity_lists() {
    let mut session = session();
    let mut rng = SimpleRng::new(1);

    session.state.score = 1234;
    session.state.letters_collected = 77;
    session.state.level = 3;
    session.state.game_frame = 500;
    session.state.collected_word = "QX".to_string();
    session.state.bubble_spawn_rate = 45;
    session.state.is_paused = true;
    session.state.is_muted = true;
    session.bubbles.push(Bubble::spawn(WIDTH, HEIGHT, &mut rng));
    session
        .particles
        .push(Particle::burst(10.0, 10.0, "#ff6b6b", ParticleKind::Star, &mut rng));
    session.player.x = 5.0;
    session.player.vx = 3.0;

    session.reset();

    assert_eq!(session.state, GameState::new());
    assert!(session.bubbles.is_empty());
    assert!(session.particles.is_empty());
    assert_eq!(session.player.x, WIDTH / 2.0);
    assert_eq!(session.player.y, HEIGHT / 2.0);
    assert_eq!(session.player.vx, 0.0);
    assert!(session.player.trail.is_empty());
}
