#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod ink;
mod nav;
mod overlay;
mod reveal;
mod simulator;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("inkdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Module re-instantiation must not double-wire listeners.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A page without #ink-container still gets every other behaviour; splashes
    // just do nothing.
    let ink = ink::Ink::attach(&document);

    reveal::wire_headline_reveal(&document);
    events::wire_click_splash(&document, &ink);
    simulator::wire_color_simulator(&document, &ink);
    if let Some(nav) = nav::wire_nav(&document) {
        events::wire_global_keydown(&document, nav);
    }

    let hero_slot = Rc::new(RefCell::new(None::<hero::HeroDriver>));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        ink.clone(),
        hero_slot.clone(),
    )));
    frame::start_loop(frame_ctx);

    dom::window_loaded().await;
    log::info!("[init] window loaded");
    overlay::schedule_hide(&document);
    *hero_slot.borrow_mut() = hero::HeroDriver::attach(&document);

    Ok(())
}
