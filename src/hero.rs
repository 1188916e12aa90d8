use crate::constants::{HERO_LOGO_SELECTOR, SHOW_CLASS};
use crate::dom;
use crate::ink::Ink;
use ink_core::hero::{HeroCue, HeroSequence};
use rand::prelude::*;
use std::time::Duration;
use web_sys as web;

/// Plays the logo reveal against the live page.
pub struct HeroDriver {
    logo: web::Element,
    sequence: HeroSequence,
    rng: StdRng,
    cues: Vec<HeroCue>,
}

impl HeroDriver {
    /// `None` when the page has no hero logo.
    pub fn attach(document: &web::Document) -> Option<Self> {
        let logo = document.query_selector(HERO_LOGO_SELECTOR).ok().flatten()?;
        Some(Self {
            logo,
            sequence: HeroSequence::new(),
            rng: StdRng::from_entropy(),
            cues: Vec::new(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.sequence.is_finished()
    }

    pub fn tick(&mut self, dt: Duration, ink: &Ink) {
        self.sequence.tick(dt, &mut self.rng, &mut self.cues);
        for cue in self.cues.drain(..) {
            match cue {
                HeroCue::Burst { jitter, options } => {
                    // Re-measured per burst: the logo can move with layout.
                    let center = dom::element_center(&self.logo);
                    ink.emit(center + jitter, &options);
                }
                HeroCue::RevealLogo => {
                    _ = self.logo.class_list().add_1(SHOW_CLASS);
                    log::info!("[hero] logo revealed");
                }
            }
        }
        if self.sequence.is_finished() {
            log::debug!("[hero] sequence finished");
        }
    }
}
