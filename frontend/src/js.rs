//! Bindings to the page's script-tag libraries: lucide (icons), GSAP
//! (animation) and SplitType (text splitting). Every import is `catch`, so a
//! missing library surfaces as a [`SiteError::Js`] instead of a trap.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::animation::{Animator, ScrollTween, Step, Targets, TimelineDefaults, TweenVars};
use crate::error::{Result, SiteError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = lucide, js_name = createIcons)]
    fn lucide_create_icons() -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> std::result::Result<(), JsValue>;

    type GsapTimeline;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &JsValue) -> std::result::Result<GsapTimeline, JsValue>;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn from_at(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &JsValue,
        position: &JsValue,
    ) -> std::result::Result<GsapTimeline, JsValue>;

    type SplitType;

    #[wasm_bindgen(constructor, catch)]
    fn new(target: &str, options: &JsValue) -> std::result::Result<SplitType, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn chars(this: &SplitType) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn lines(this: &SplitType) -> JsValue;
}

/// Turns every `<i data-lucide="…">` placeholder currently in the DOM into an
/// SVG. Safe to call repeatedly.
pub fn render_icons() -> Result<()> {
    lucide_create_icons().map_err(|e| SiteError::js("lucide.createIcons", e))
}

/// [`render_icons`] for callers that have nothing to do on failure.
pub fn refresh_icons() {
    if let Err(err) = render_icons() {
        log::debug!("Icons not rendered: {}", err);
    }
}

#[derive(Serialize)]
struct SplitOptions {
    types: &'static str,
}

fn encode<T: Serialize>(call: &'static str, value: &T) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| SiteError::Encode {
        call,
        message: e.to_string(),
    })
}

fn split(selector: &str, types: &'static str) -> Result<SplitType> {
    let options = encode("SplitType", &SplitOptions { types })?;
    SplitType::new(selector, &options).map_err(|e| SiteError::js("SplitType", e))
}

fn resolve(targets: Targets) -> Result<JsValue> {
    match targets {
        Targets::Selector(selector) => Ok(JsValue::from_str(selector)),
        Targets::Chars(selector) => Ok(split(selector, "words, chars")?.chars()),
        Targets::Lines(selector) => Ok(split(selector, "lines")?.lines()),
    }
}

pub struct Gsap;

impl Animator for Gsap {
    fn set(&self, targets: Targets, vars: &TweenVars) -> Result<()> {
        let targets = resolve(targets)?;
        let vars = encode("gsap.set", vars)?;
        gsap_set(&targets, &vars).map_err(|e| SiteError::js("gsap.set", e))
    }

    fn timeline(&self, defaults: &TimelineDefaults, steps: &[Step]) -> Result<()> {
        #[derive(Serialize)]
        struct TimelineVars<'a> {
            defaults: &'a TimelineDefaults,
        }

        let vars = encode("gsap.timeline", &TimelineVars { defaults })?;
        let mut timeline = gsap_timeline(&vars).map_err(|e| SiteError::js("gsap.timeline", e))?;
        for step in steps {
            let targets = resolve(step.targets)?;
            let vars = encode("timeline.from", &step.vars)?;
            let position = step.position.map_or(JsValue::UNDEFINED, JsValue::from_str);
            timeline = timeline
                .from_at(&targets, &vars, &position)
                .map_err(|e| SiteError::js("timeline.from", e))?;
        }
        Ok(())
    }

    fn scroll_linked(&self, tween: &ScrollTween) -> Result<()> {
        let vars = encode("gsap.to", tween)?;
        gsap_to(&JsValue::from_str(tween.target), &vars).map_err(|e| SiteError::js("gsap.to", e))
    }
}
