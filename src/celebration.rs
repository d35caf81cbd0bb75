//! Completion screen: markup, full-viewport canvas and the animation-frame loop
//! that drives a [`Show`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window, window};

use crate::config::GameConfig;
use crate::dom;
use crate::error::GameError;
use crate::fireworks::{Bounds, Painter, Point, Show};
use crate::rng::GameRng;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Celebration {
    screen: Element,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    show: Show,
    rng: GameRng,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
}

thread_local! {
    static CELEBRATION: RefCell<Option<Celebration>> = const { RefCell::new(None) };
}

pub(crate) fn show(config: &GameConfig) -> Result<(), GameError> {
    if CELEBRATION.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;
    let body = doc.body().ok_or(GameError::NoBody)?;

    let screen = doc.create_element("div")?;
    screen.set_id("congratulations-screen");
    let content = doc.create_element("div")?;
    content.set_class_name("congratulations-content");
    let title = doc.create_element("h1")?;
    title.set_text_content(Some(&config.screen.title));
    let message = doc.create_element("p")?;
    message.set_text_content(Some(&config.screen.message));
    let replay = doc.create_element("button")?;
    replay.set_id("play-again");
    replay.set_text_content(Some(&config.screen.replay_label));
    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| GameError::Dom("created canvas is not a canvas".to_string()))?;
    canvas.set_id("fireworks-canvas");

    content.append_child(&title)?;
    content.append_child(&message)?;
    content.append_child(&replay)?;
    screen.append_child(&content)?;
    screen.append_child(&canvas)?;
    body.append_child(&screen)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;

    fit_to_viewport(&win, &canvas);
    let on_resize = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(win) = window() {
                fit_to_viewport(&win, &canvas);
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    // Leaked on purpose: dropping it from inside its own click handler is not allowed.
    let on_replay = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        dismiss();
    }) as Box<dyn FnMut(_)>);
    replay.add_event_listener_with_callback("click", on_replay.as_ref().unchecked_ref())?;
    on_replay.forget();

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    CELEBRATION.with(|cell| {
        cell.replace(Some(Celebration {
            screen,
            canvas,
            ctx,
            show: Show::new(config.fireworks.clone()),
            rng: GameRng::from_entropy(),
            frame: frame.clone(),
            frame_id: frame_id.clone(),
            on_resize,
        }))
    });
    start_loop(&win, frame, frame_id)
}

fn start_loop(win: &Window, frame: FrameCallback, frame_id: Rc<Cell<Option<i32>>>) -> Result<(), GameError> {
    let f = frame.clone();
    let id = frame_id.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let running = CELEBRATION.with(|cell| match cell.borrow_mut().as_mut() {
            Some(c) => {
                c.tick(ts);
                true
            }
            None => false,
        });
        if !running {
            id.set(None);
            return;
        }
        if let Some(w) = window() {
            if let Some(cb) = f.borrow().as_ref() {
                id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame.borrow().as_ref() {
        frame_id.set(Some(win.request_animation_frame(cb.as_ref().unchecked_ref())?));
    }
    Ok(())
}

/// Tear the screen down and hand control back to the board.
fn dismiss() {
    let Some(celebration) = CELEBRATION.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    celebration.teardown();
    dom::restart();
}

fn fit_to_viewport(win: &Window, canvas: &HtmlCanvasElement) {
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

impl Celebration {
    fn tick(&mut self, now: f64) {
        let bounds = Bounds {
            width: f64::from(self.canvas.width()),
            height: f64::from(self.canvas.height()),
        };
        self.show.frame(now, bounds, &mut self.rng, &mut self.ctx);
    }

    fn teardown(self) {
        if let Some(win) = window() {
            if let Some(id) = self.frame_id.take() {
                win.cancel_animation_frame(id).ok();
            }
            win.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
                .ok();
        }
        // Breaks the closure's reference to its own cell.
        self.frame.borrow_mut().take();
        self.screen.remove();
        log::debug!("celebration torn down");
    }
}

impl Painter for CanvasRenderingContext2d {
    fn fade(&mut self, overlay: &str, bounds: Bounds) {
        self.set_global_alpha(1.0);
        self.set_fill_style_str(overlay);
        self.fill_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn trail<'a, I>(&mut self, points: I, color: &str)
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut points = points.into_iter();
        let Some(first) = points.next() else { return };
        self.set_stroke_style_str(color);
        self.set_line_width(1.0);
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in points {
            self.line_to(p.x, p.y);
        }
        self.stroke();
    }

    fn dot(&mut self, at: Point, radius: f64, color: &str, alpha: f64) {
        self.set_global_alpha(alpha);
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(at.x, at.y, radius, 0.0, std::f64::consts::TAU).ok();
        self.fill();
        self.set_global_alpha(1.0);
    }
}
