use crate::constants::*;
use crate::dom;
use crate::ink::Ink;
use ink_core::simulator::{
    color_input_burst, palette_burst, swatch_burst, ColorSimulator, PickerSync,
};
use ink_core::{palette_grid, EmitOptions, PALETTE_COLS, PALETTE_ROWS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type ChannelPair = (Option<web::HtmlInputElement>, Option<web::HtmlInputElement>);

/// Every control the simulator writes back to after a colour change.
struct Controls {
    fill_target: web::Element,
    color_input: Option<web::HtmlInputElement>,
    hex_input: Option<web::HtmlInputElement>,
    channels: [ChannelPair; 3],
}

impl Controls {
    fn find(document: &web::Document) -> Option<Self> {
        let fill_target = document.query_selector(FILL_TARGET_SELECTOR).ok().flatten()?;
        let channels = RGB_INPUT_IDS.map(|(slider, number)| {
            (
                dom::input_by_id(document, slider),
                dom::input_by_id(document, number),
            )
        });
        Some(Self {
            fill_target,
            color_input: dom::input_by_id(document, COLOR_INPUT_ID),
            hex_input: dom::input_by_id(document, HEX_INPUT_ID),
            channels,
        })
    }

    fn apply(&self, fill: Option<&str>, sync: &PickerSync) {
        if let Some(fill) = fill {
            dom::set_style(&self.fill_target, FILL_PROPERTY, fill);
        }
        if let Some(i) = &self.color_input {
            i.set_value(&sync.hex);
        }
        if let Some(i) = &self.hex_input {
            i.set_value(&sync.label);
        }
        let values = [sync.rgb.r, sync.rgb.g, sync.rgb.b];
        for ((slider, number), v) in self.channels.iter().zip(values) {
            let v = v.to_string();
            for input in [slider, number].into_iter().flatten() {
                input.set_value(&v);
            }
        }
    }

    fn channel_values(&self, i: usize) -> (String, String) {
        let (slider, number) = &self.channels[i];
        (
            slider.as_ref().map(|s| s.value()).unwrap_or_default(),
            number.as_ref().map(|n| n.value()).unwrap_or_default(),
        )
    }
}

#[derive(Clone)]
struct Simulator {
    state: Rc<RefCell<ColorSimulator>>,
    controls: Rc<Controls>,
    ink: Ink,
}

impl Simulator {
    fn sync(&self, sync: &PickerSync) {
        let fill = self.state.borrow().fill();
        self.controls.apply(fill.as_deref(), sync);
    }

    /// Select `hex`, push it to every control and splash from `origin_el`.
    /// Malformed colours are ignored.
    fn pick(&self, hex: &str, origin_el: &web::Element, burst: fn(&str) -> EmitOptions) {
        let picked = self.state.borrow_mut().select_hex(hex);
        match picked {
            Ok(sync) => {
                self.sync(&sync);
                self.ink.emit_from(origin_el, &burst(&sync.hex));
            }
            Err(e) => log::debug!("[simulator] ignoring colour: {}", e),
        }
    }

    fn on_hex_text(&self, raw: &str) {
        let result = self.state.borrow_mut().hex_input(raw);
        if let Ok(sync) = result {
            self.sync(&sync);
        }
    }

    fn on_rgb(&self) {
        let [r, g, b] = [0, 1, 2].map(|i| self.controls.channel_values(i));
        let result = self.state.borrow_mut().rgb_input(
            (&r.0, &r.1),
            (&g.0, &g.1),
            (&b.0, &b.1),
        );
        match result {
            Ok(sync) => self.sync(&sync),
            Err(e) => log::debug!("[simulator] ignoring rgb input: {}", e),
        }
    }
}

/// Wire swatches, the RGB/HEX panel and the generated palette grid. Nothing is
/// wired when the page has no fill target.
pub fn wire_color_simulator(document: &web::Document, ink: &Ink) {
    let Some(controls) = Controls::find(document) else {
        return;
    };
    let sim = Simulator {
        state: Rc::new(RefCell::new(ColorSimulator::new())),
        controls: Rc::new(controls),
        ink: ink.clone(),
    };

    for btn in dom::query_all(document, SWATCH_SELECTOR) {
        let sim = sim.clone();
        let target = btn.clone();
        dom::on_click(&btn, move || {
            if let Some(hex) = target.get_attribute(SWATCH_COLOR_ATTR) {
                sim.pick(&hex, &target, swatch_burst);
            }
        });
    }

    if let Some(input) = sim.controls.color_input.clone() {
        let sim = sim.clone();
        let field = input.clone();
        let el: web::Element = input.clone().unchecked_into();
        dom::on_input(&input, move || {
            sim.pick(&field.value(), &el, color_input_burst);
        });
    }

    if let Some(input) = sim.controls.hex_input.clone() {
        let sim = sim.clone();
        let field = input.clone();
        dom::on_input(&input, move || sim.on_hex_text(&field.value()));
    }

    for (slider, number) in sim.controls.channels.clone() {
        for input in [slider, number].into_iter().flatten() {
            let sim = sim.clone();
            dom::on_input(&input, move || sim.on_rgb());
        }
    }

    build_palette_grid(document, &sim);
}

fn build_palette_grid(document: &web::Document, sim: &Simulator) {
    let Some(grid) = document.get_element_by_id(PALETTE_GRID_ID) else {
        return;
    };
    for rgb in palette_grid(PALETTE_COLS, PALETTE_ROWS) {
        let Ok(sw) = document.create_element("button") else {
            continue;
        };
        let hex = rgb.to_hex();
        sw.set_class_name(PALETTE_SWATCH_CLASS);
        dom::set_style(&sw, "background", &hex);
        _ = sw.set_attribute("title", &hex);
        _ = sw.set_attribute("type", "button");
        let sim = sim.clone();
        let target = sw.clone();
        dom::on_click(&sw, move || sim.pick(&hex, &target, palette_burst));
        _ = grid.append_child(&sw);
    }
    log::debug!(
        "[simulator] palette grid {}x{} built",
        PALETTE_COLS,
        PALETTE_ROWS
    );
}
