//! Canvas drawing for the ocean scene. Pure rendering side effects: these
//! functions read simulation state and never mutate it. Draw failures are
//! cosmetic and swallowed with `.ok()`.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::bubble::Bubble;
use super::particle::{Particle, ParticleKind};
use super::player::Player;
use super::session::GameSession;

/// Paint one full frame: background, bubbles, particles, player, in that
/// fixed order so the fish always swims in front.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, session: &GameSession) {
    draw_background(ctx, canvas, session);
    for bubble in &session.bubbles {
        draw_bubble(ctx, bubble);
    }
    for particle in &session.particles {
        draw_particle(ctx, particle);
    }
    draw_player(ctx, &session.player);
}

/// Animated ocean gradient plus drifting floater dots and the pointer trail.
fn draw_background(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    session: &GameSession,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let time = session.state.game_frame as f64 * 0.01;

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    gradient
        .add_color_stop(0.0, &format!("hsl(200, 70%, {}%)", 75.0 + time.sin() * 5.0))
        .ok();
    gradient
        .add_color_stop(
            0.5,
            &format!("hsl(210, 80%, {}%)", 50.0 + (time * 1.2).sin() * 5.0),
        )
        .ok();
    gradient
        .add_color_stop(
            1.0,
            &format!("hsl(220, 90%, {}%)", 25.0 + (time * 0.8).sin() * 3.0),
        )
        .ok();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);

    for floater in &session.floaters {
        ctx.save();
        ctx.set_global_alpha(floater.opacity);
        ctx.set_fill_style_str(floater.color);
        ctx.begin_path();
        ctx.arc(floater.x, floater.y, floater.size, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();
        ctx.restore();
    }

    let trail_len = session.pointer.trail.len() as f64;
    for (i, &(x, y)) in session.pointer.trail.iter().enumerate().skip(1) {
        ctx.save();
        ctx.set_global_alpha((i as f64 / trail_len) * 0.2);
        ctx.set_fill_style_str("#ffffff");
        ctx.begin_path();
        ctx.arc(x, y, 3.0, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
        ctx.restore();
    }
}

fn draw_bubble(ctx: &CanvasRenderingContext2d, bubble: &Bubble) {
    ctx.save();
    ctx.set_global_alpha(bubble.alpha);
    ctx.translate(bubble.x, bubble.y).ok();
    ctx.rotate(bubble.rotation).ok();
    ctx.scale(bubble.scale, bubble.scale).ok();

    // Outer glow
    let glow_size = bubble.radius * 2.5;
    if let Ok(glow) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, glow_size) {
        glow.add_color_stop(0.0, &format!("{}60", bubble.color)).ok();
        glow.add_color_stop(0.5, &format!("{}30", bubble.color)).ok();
        glow.add_color_stop(1.0, "transparent").ok();
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, glow_size, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
    }

    // Body with an off-center gradient for depth
    if let Ok(body) = ctx.create_radial_gradient(
        -bubble.radius * 0.3,
        -bubble.radius * 0.3,
        0.0,
        0.0,
        0.0,
        bubble.radius,
    ) {
        body.add_color_stop(0.0, &format!("{}DD", bubble.color)).ok();
        body.add_color_stop(0.4, &format!("{}BB", bubble.color)).ok();
        body.add_color_stop(0.8, &format!("{}99", bubble.color)).ok();
        body.add_color_stop(1.0, &format!("{}77", bubble.color)).ok();
        ctx.set_fill_style_canvas_gradient(&body);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, bubble.radius, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();
    }

    // Specular highlight
    if let Ok(highlight) = ctx.create_radial_gradient(
        -bubble.radius * 0.4,
        -bubble.radius * 0.4,
        0.0,
        -bubble.radius * 0.2,
        -bubble.radius * 0.2,
        bubble.radius * 0.6,
    ) {
        highlight.add_color_stop(0.0, "rgba(255, 255, 255, 0.8)").ok();
        highlight.add_color_stop(1.0, "transparent").ok();
        ctx.set_fill_style_canvas_gradient(&highlight);
        ctx.begin_path();
        ctx.arc(
            -bubble.radius * 0.3,
            -bubble.radius * 0.3,
            bubble.radius * 0.4,
            0.0,
            std::f64::consts::TAU,
        )
        .ok();
        ctx.fill();
    }

    for sparkle in &bubble.sparkles {
        let sparkle_alpha = sparkle.phase.sin() * 0.5 + 0.5;
        ctx.save();
        ctx.set_global_alpha(sparkle_alpha * 0.8);
        ctx.set_fill_style_str("#ffffff");
        ctx.begin_path();
        ctx.arc(sparkle.x, sparkle.y, sparkle.size, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();
        ctx.restore();
    }

    // Letter glyph
    let letter = bubble.letter.to_string();
    ctx.set_font(&format!(
        "bold {:.0}px 'Fredoka One', cursive",
        bubble.radius * 0.9
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_stroke_style_str("#2c3e50");
    ctx.set_line_width(3.0);
    ctx.stroke_text(&letter, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(&letter, 0.0, 0.0).ok();

    ctx.restore();
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) {
    ctx.save();
    ctx.set_global_alpha(particle.life.clamp(0.0, 1.0));
    ctx.translate(particle.x, particle.y).ok();
    ctx.rotate(particle.rotation).ok();
    ctx.set_fill_style_str(particle.color);
    ctx.begin_path();
    if particle.kind == ParticleKind::Star {
        for (i, (x, y)) in particle.star_points().into_iter().enumerate() {
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
    } else {
        ctx.arc(0.0, 0.0, particle.size, 0.0, std::f64::consts::TAU)
            .ok();
    }
    ctx.fill();
    ctx.restore();
}

fn draw_player(ctx: &CanvasRenderingContext2d, player: &Player) {
    // Trail, oldest first so newer blobs paint on top
    for point in player.trail.iter().skip(1) {
        ctx.save();
        ctx.set_global_alpha(point.alpha);
        if let Ok(gradient) =
            ctx.create_radial_gradient(point.x, point.y, 0.0, point.x, point.y, point.size.max(0.1))
        {
            gradient
                .add_color_stop(0.0, &format!("rgba(135, 206, 235, {})", point.alpha))
                .ok();
            gradient.add_color_stop(1.0, "transparent").ok();
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            ctx.arc(point.x, point.y, point.size, 0.0, std::f64::consts::TAU)
                .ok();
            ctx.fill();
        }
        ctx.restore();
    }

    for bubble in &player.wake {
        ctx.save();
        ctx.set_global_alpha(bubble.life * 0.6);
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.begin_path();
        ctx.arc(bubble.x, bubble.y, bubble.size, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();
        ctx.restore();
    }

    // Pulsing glow halo
    ctx.save();
    ctx.set_global_alpha(player.glow_intensity * 0.3);
    if let Ok(glow) = ctx.create_radial_gradient(
        player.x,
        player.y,
        0.0,
        player.x,
        player.y,
        player.radius * 2.0,
    ) {
        glow.add_color_stop(0.0, "#4ecdc4").ok();
        glow.add_color_stop(1.0, "transparent").ok();
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        ctx.arc(
            player.x,
            player.y,
            player.radius * 2.0,
            0.0,
            std::f64::consts::TAU,
        )
        .ok();
        ctx.fill();
    }
    ctx.restore();

    ctx.save();
    ctx.translate(player.x, player.y).ok();
    ctx.rotate(player.angle).ok();
    if !player.facing_right {
        ctx.scale(-1.0, 1.0).ok();
    }
    draw_fish(ctx, player);
    ctx.restore();
}

/// Procedural fish sprite: body, animated tail, fins, eye, scale pattern.
fn draw_fish(ctx: &CanvasRenderingContext2d, player: &Player) {
    let r = player.radius;
    let anim_offset = (player.animation_frame * 0.3).sin() * 5.0;

    // Body with shading gradient
    if let Ok(body) = ctx.create_radial_gradient(-10.0, -10.0, 0.0, 0.0, 0.0, r) {
        body.add_color_stop(0.0, "#ff8e8e").ok();
        body.add_color_stop(0.7, "#ff6b6b").ok();
        body.add_color_stop(1.0, "#e55555").ok();
        ctx.set_fill_style_canvas_gradient(&body);
    } else {
        ctx.set_fill_style_str("#ff6b6b");
    }
    ctx.begin_path();
    ctx.ellipse(0.0, 0.0, r, r * 0.7, 0.0, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();

    // Animated tail
    ctx.set_fill_style_str("#ff5252");
    ctx.begin_path();
    ctx.move_to(-r, 0.0);
    ctx.line_to(-r * 1.5, -r * 0.5 + anim_offset);
    ctx.line_to(-r * 1.8, 0.0);
    ctx.line_to(-r * 1.5, r * 0.5 + anim_offset);
    ctx.close_path();
    ctx.fill();

    // Fins
    ctx.set_fill_style_str("#ff7979");
    ctx.begin_path();
    ctx.ellipse(
        -r * 0.3,
        -r * 0.8,
        r * 0.3,
        r * 0.2,
        std::f64::consts::PI * 0.3,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();
    ctx.begin_path();
    ctx.ellipse(
        -r * 0.3,
        r * 0.8,
        r * 0.3,
        r * 0.2,
        -std::f64::consts::PI * 0.3,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();

    // Eye with highlight
    ctx.set_fill_style_str("#ffffff");
    ctx.begin_path();
    ctx.arc(r * 0.3, -r * 0.2, r * 0.25, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();
    ctx.set_fill_style_str("#2c3e50");
    ctx.begin_path();
    ctx.arc(r * 0.4, -r * 0.2, r * 0.15, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();
    ctx.set_fill_style_str("#ffffff");
    ctx.begin_path();
    ctx.arc(r * 0.45, -r * 0.25, r * 0.05, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();

    // Scales
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
    ctx.set_line_width(1.0);
    for i in 0..3 {
        ctx.begin_path();
        ctx.arc(
            -r * 0.2 + i as f64 * 15.0,
            0.0,
            r * 0.2,
            0.0,
            std::f64::consts::TAU,
        )
        .ok();
        ctx.stroke();
    }
}

/// Dim the frozen frame and stamp the pause banner over it.
pub fn draw_pause_overlay(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_text_align("center");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(6.0);
    ctx.set_font("72px 'Fredoka One', cursive");
    ctx.stroke_text("PAUSED", width / 2.0, height / 2.0).ok();
    ctx.fill_text("PAUSED", width / 2.0, height / 2.0).ok();
    ctx.set_font("20px 'Fredoka One', cursive");
    ctx.fill_text("Press Space to resume", width / 2.0, height / 2.0 + 44.0)
        .ok();
}
