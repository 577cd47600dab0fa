//! Browser glue for Ocean Letter Quest: canvas and HUD setup, input
//! listeners, audio elements, transient notifications and the
//! `requestAnimationFrame` loop. All gameplay rules live in [`session`];
//! this module owns one [`session::GameSession`] in a thread-local and turns
//! its per-tick events into fire-and-forget DOM/audio side effects.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, window};

pub mod bubble;
pub mod particle;
pub mod player;
pub mod render;
pub mod rng;
pub mod session;

use session::{GameEvent, GameSession, PopSound};

const LEVEL_NOTIFICATION_MS: f64 = 3000.0;
const WORD_NOTIFICATION_MS: f64 = 4000.0;

/// Transient DOM notification, removed by the frame loop once expired.
struct Notification {
    el: web_sys::Element,
    expires_ms: f64,
}

/// Everything the browser side owns: the canvas pair, the simulation
/// session, best-effort audio elements and live notifications.
struct WebGame {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    session: GameSession,
    pop_single: Option<HtmlAudioElement>,
    pop_plop: Option<HtmlAudioElement>,
    notifications: Vec<Notification>,
}

thread_local! {
    static GAME: std::cell::RefCell<Option<WebGame>> = std::cell::RefCell::new(None);
}

/// Build the canvas, HUD overlays, audio elements and input listeners, then
/// start the frame loop. Safe to call once per page load.
pub fn start_ocean_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let width = win.inner_width()?.as_f64().unwrap_or(800.0);
    let height = win.inner_height()?.as_f64().unwrap_or(600.0);

    // Create / reuse the full-viewport game canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("olq-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("olq-canvas");
        // Anchored at the viewport origin so client coordinates equal canvas
        // coordinates (keeps touch handling free of DomRect).
        c.set_attribute("style", "position:fixed; left:0; top:0; z-index:1; touch-action:none;")
            .ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_text_align("center");

    // Pop sounds are cosmetic: missing files or blocked autoplay must never
    // interrupt gameplay, so failures collapse to None here and are ignored
    // at play time.
    let pop_single = HtmlAudioElement::new_with_src("./assist/sounds/bubbles-single1.wav").ok();
    let pop_plop = HtmlAudioElement::new_with_src("./assist/sounds/plop.ogg").ok();
    if let Some(el) = &pop_single {
        el.set_volume(0.4);
    }
    if let Some(el) = &pop_plop {
        el.set_volume(0.4);
    }

    ensure_hud(&doc)?;

    let seed = win.performance().map(|p| p.now()).unwrap_or(0.0).to_bits();
    let game = WebGame {
        canvas: canvas.clone(),
        ctx,
        session: GameSession::new(width, height, seed),
        pop_single,
        pop_plop,
        notifications: Vec::new(),
    };
    GAME.with(|g| g.replace(Some(game)));

    // Mouse input: pointer target follows every move, pressed flag tracks
    // the button. offset_x/offset_y are canvas-local already.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.session
                        .pointer
                        .set_position(evt.offset_x() as f64, evt.offset_y() as f64);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.session.pointer.pressed = true;
                    game.session
                        .pointer
                        .set_position(evt.offset_x() as f64, evt.offset_y() as f64);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.session.pointer.pressed = false;
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch input mirrors the mouse handlers; the canvas sits at the
    // viewport origin so client coordinates need no adjustment.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                GAME.with(|cell| {
                    if let Some(game) = cell.borrow_mut().as_mut() {
                        game.session.pointer.pressed = true;
                        game.session
                            .pointer
                            .set_position(touch.client_x() as f64, touch.client_y() as f64);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                GAME.with(|cell| {
                    if let Some(game) = cell.borrow_mut().as_mut() {
                        game.session
                            .pointer
                            .set_position(touch.client_x() as f64, touch.client_y() as f64);
                    }
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.session.pointer.pressed = false;
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard shortcuts: Space pauses, M mutes, Ctrl/Cmd+R resets.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            match evt.code().as_str() {
                "Space" => {
                    evt.prevent_default();
                    toggle_pause();
                }
                "KeyM" => {
                    toggle_mute();
                }
                "KeyR" if evt.ctrl_key() || evt.meta_key() => {
                    evt.prevent_default();
                    reset_game();
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keep the canvas and simulation bounds in step with the window.
    {
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(win) = window() else { return };
            let w = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let h = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas_resize.set_width(w as u32);
            canvas_resize.set_height(h as u32);
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.session.set_bounds(w, h);
                }
            });
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    update_readout();
    start_game_loop();
    Ok(())
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_game_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        // The readout refresh re-borrows GAME, so it must run after the
        // mutable borrow held across the tick is released.
        let ticked = GAME.with(|cell| {
            if let Some(game) = cell.borrow_mut().as_mut() {
                game_tick(game, ts)
            } else {
                false
            }
        });
        if ticked {
            update_readout();
        }
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One animation frame: advance the simulation, repaint, perform the side
/// effects its events requested, expire stale notifications. While paused the
/// frame is a full suspend and the last painted frame stays on screen.
/// Returns whether the simulation advanced (so the caller knows to refresh
/// the readout).
fn game_tick(game: &mut WebGame, now: f64) -> bool {
    if game.session.state.is_paused {
        return false;
    }

    let events = game.session.tick();
    render::draw_frame(&game.ctx, &game.canvas, &game.session);

    for event in events {
        match event {
            GameEvent::LevelUp(level) => {
                show_level_up(level, now, &mut game.notifications);
            }
            GameEvent::WordBonus { word, points } => {
                show_word_bonus(word, points, now, &mut game.notifications);
            }
            GameEvent::PlayPop(sound) => {
                play_pop(game, sound);
            }
        }
    }

    game.notifications.retain(|n| {
        if now < n.expires_ms {
            true
        } else {
            n.el.remove();
            false
        }
    });

    true
}

/// Best-effort pop sound: rewind and play, discard every failure (blocked
/// autoplay, missing file). Never blocks or interrupts the tick.
fn play_pop(game: &WebGame, sound: PopSound) {
    let el = match sound {
        PopSound::Single => game.pop_single.as_ref(),
        PopSound::Plop => game.pop_plop.as_ref(),
    };
    if let Some(el) = el {
        el.set_current_time(0.0);
        let _ = el.play();
    }
}

// --- HUD & notifications -----------------------------------------------------

/// Create the readout overlays (score / letters / level / word buffer) once.
fn ensure_hud(doc: &web_sys::Document) -> Result<(), JsValue> {
    let overlays: [(&str, &str, &str); 4] = [
        ("olq-score", "Score: 0", "top:10px; left:12px;"),
        ("olq-letters", "Letters: 0", "top:10px; left:170px;"),
        ("olq-level", "Level: 1", "top:10px; left:330px;"),
        (
            "olq-word",
            "Start collecting letters!",
            "bottom:14px; left:50%; transform:translateX(-50%); letter-spacing:3px;",
        ),
    ];
    for (id, initial, position) in overlays {
        if doc.get_element_by_id(id).is_none() {
            if let Some(body) = doc.body() {
                let div = doc.create_element("div")?;
                div.set_id(id);
                div.set_text_content(Some(initial));
                div.set_attribute(
                    "style",
                    &format!(
                        "position:fixed; {position} font-family:'Fredoka One', cursive; \
                         font-size:15px; padding:4px 10px; background:rgba(0,40,80,0.45); \
                         border:1px solid #2c5d8f; border-radius:6px; color:#e8f6ff; z-index:45;"
                    ),
                )
                .ok();
                body.append_child(&div)?;
            }
        }
    }
    Ok(())
}

/// Push the current readout values into the HUD overlays.
fn update_readout() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    GAME.with(|cell| {
        if let Some(game) = cell.borrow().as_ref() {
            let state = &game.session.state;
            if let Some(el) = doc.get_element_by_id("olq-score") {
                el.set_text_content(Some(&format!("Score: {}", state.score)));
            }
            if let Some(el) = doc.get_element_by_id("olq-letters") {
                el.set_text_content(Some(&format!("Letters: {}", state.letters_collected)));
            }
            if let Some(el) = doc.get_element_by_id("olq-level") {
                el.set_text_content(Some(&format!("Level: {}", state.level)));
            }
            if let Some(el) = doc.get_element_by_id("olq-word") {
                let text = if state.collected_word.is_empty() {
                    "Start collecting letters!"
                } else {
                    state.collected_word.as_str()
                };
                el.set_text_content(Some(text));
            }
        }
    });
}

fn show_level_up(level: u32, now: f64, notifications: &mut Vec<Notification>) {
    spawn_notification(
        &format!("Level {level}!"),
        "top:50%; background:linear-gradient(135deg, #ffd700, #ffed4e); color:#2c3e50; \
         box-shadow:0 15px 40px rgba(255, 215, 0, 0.6);",
        now + LEVEL_NOTIFICATION_MS,
        notifications,
    );
}

fn show_word_bonus(word: &str, points: u64, now: f64, notifications: &mut Vec<Notification>) {
    spawn_notification(
        &format!("{word} +{points}!"),
        "top:25%; background:linear-gradient(135deg, #2ecc71, #27ae60); color:#ffffff; \
         box-shadow:0 15px 40px rgba(46, 204, 113, 0.6);",
        now + WORD_NOTIFICATION_MS,
        notifications,
    );
}

/// Transient centered banner; the frame loop removes it once expired
/// (no setTimeout, same pattern as the other timed visual effects).
fn spawn_notification(text: &str, accent: &str, expires_ms: f64, notifications: &mut Vec<Notification>) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(div) = doc.create_element("div") else {
        return;
    };
    div.set_text_content(Some(text));
    div.set_attribute(
        "style",
        &format!(
            "position:fixed; left:50%; transform:translate(-50%, -50%); {accent} \
             padding:20px 44px; border-radius:25px; font-size:2rem; font-weight:bold; \
             font-family:'Fredoka One', cursive; border:3px solid #fff; z-index:1001; \
             pointer-events:none;"
        ),
    )
    .ok();
    if body.append_child(&div).is_ok() {
        notifications.push(Notification {
            el: div,
            expires_ms,
        });
    }
}

// --- Control surface ---------------------------------------------------------

/// Toggle pause. Returns the new paused flag. Pausing stamps an overlay on
/// the frozen frame; resuming lets the next tick repaint over it.
#[wasm_bindgen]
pub fn toggle_pause() -> bool {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            let paused = game.session.toggle_pause();
            if paused {
                render::draw_pause_overlay(&game.ctx, &game.canvas);
            }
            paused
        } else {
            false
        }
    })
}

/// Toggle the mute flag. Returns the new muted flag.
#[wasm_bindgen]
pub fn toggle_mute() -> bool {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            game.session.toggle_mute()
        } else {
            false
        }
    })
}

/// Restart the current game: state back to startup values, entity lists
/// emptied, player recentered.
#[wasm_bindgen]
pub fn reset_game() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            game.session.reset();
        }
    });
    update_readout();
}

/// Share-ready score text; the page script hands it to the share sheet or
/// the clipboard.
#[wasm_bindgen]
pub fn share_score_text() -> String {
    GAME.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|game| game.session.share_text())
            .unwrap_or_default()
    })
}
