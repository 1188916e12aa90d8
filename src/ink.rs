use crate::constants::{INK_CONTAINER_ID, INK_DOT_CLASS};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use ink_core::{DotSink, EmitOptions, InkStage, Motion, Particle, ParticleId};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Renders dots as `<span class="ink-dot">` children of `#ink-container`.
pub struct DomSink {
    document: web::Document,
    container: web::Element,
    dots: FnvHashMap<ParticleId, web::HtmlElement>,
}

impl DomSink {
    pub fn attach(document: &web::Document) -> Option<Self> {
        let container = document.get_element_by_id(INK_CONTAINER_ID)?;
        Some(Self {
            document: document.clone(),
            container,
            dots: FnvHashMap::default(),
        })
    }
}

impl DotSink for DomSink {
    fn spawn(&mut self, dot: &Particle) {
        let Some(el) = self
            .document
            .create_element("span")
            .ok()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        el.set_class_name(INK_DOT_CLASS);
        let size = format!("{}px", dot.size);
        let style = el.style();
        _ = style.set_property("width", &size);
        _ = style.set_property("height", &size);
        _ = style.set_property("left", &format!("{}px", dot.origin.x));
        _ = style.set_property("top", &format!("{}px", dot.origin.y));
        _ = style.set_property("background", &dot.color);
        // glow shadow picks up currentColor
        _ = style.set_property("color", &dot.color);
        if self.container.append_child(&el).is_ok() {
            self.dots.insert(dot.id, el);
        }
    }

    fn launch(&mut self, id: ParticleId, offset: Vec2) {
        if let Some(el) = self.dots.get(&id) {
            let style = el.style();
            _ = style.set_property(
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
            _ = style.set_property("opacity", "0");
        }
    }

    fn remove(&mut self, id: ParticleId) {
        if let Some(el) = self.dots.remove(&id) {
            el.remove();
        }
    }
}

/// Shared handle every trigger uses to splash ink.
#[derive(Clone)]
pub struct Ink {
    stage: Rc<RefCell<InkStage<DomSink>>>,
    last_tick: Rc<Cell<Instant>>,
}

impl Ink {
    pub fn attach(document: &web::Document) -> Self {
        Self {
            stage: Rc::new(RefCell::new(InkStage::from_entropy(DomSink::attach(
                document,
            )))),
            last_tick: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn emit(&self, origin: Vec2, options: &EmitOptions) {
        let motion = Motion::from_reduced(dom::prefers_reduced_motion());
        let since_tick = self.last_tick.get().elapsed();
        self.stage
            .borrow_mut()
            .emit_after(since_tick, origin, options, motion);
    }

    /// Splash from the centre of `el`'s bounding box.
    pub fn emit_from(&self, el: &web::Element, options: &EmitOptions) {
        self.emit(dom::element_center(el), options);
    }

    /// `now` must be the instant `dt` was measured up to.
    pub fn tick(&self, now: Instant, dt: Duration) {
        self.last_tick.set(now);
        self.stage.borrow_mut().tick(dt);
    }
}
