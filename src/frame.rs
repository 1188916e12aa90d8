use crate::hero::HeroDriver;
use crate::ink::Ink;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub ink: Ink,
    pub hero: Rc<RefCell<Option<HeroDriver>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(ink: Ink, hero: Rc<RefCell<Option<HeroDriver>>>) -> Self {
        Self {
            ink,
            hero,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Ink before hero: dots spawned by a hero burst must be painted at rest
        // once before the next frame launches them.
        self.ink.tick(now, dt);

        let finished = match self.hero.borrow_mut().as_mut() {
            Some(h) => {
                h.tick(dt, &self.ink);
                h.is_finished()
            }
            None => false,
        };
        if finished {
            *self.hero.borrow_mut() = None;
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
