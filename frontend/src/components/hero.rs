use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation;
use crate::components::anchor_link::AnchorLink;
use crate::error::SiteError;
use crate::js::Gsap;

const HERO_IMAGE: &str = "/assets/hero.svg";

/// `.reveal-text` starts hidden in CSS so it doesn't flash before the
/// timeline grabs it. Without a timeline it has to be shown by hand.
fn reveal_without_animation() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".reveal-text") else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            if let Err(err) = element.style().set_property("visibility", "visible") {
                log::warn!("Could not reveal hero text: {}", SiteError::js("style.setProperty", err));
            }
        }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    use_effect_with_deps(
        move |_| {
            let hero_present = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(".hero").ok().flatten())
                .is_some();
            if hero_present {
                if let Err(err) = animation::play(&Gsap, &animation::hero_plan()) {
                    log::warn!("Hero animation skipped: {}", err);
                    reveal_without_animation();
                }
            }
            || ()
        },
        (),
    );

    html! {
        <section class="hero" id="top">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero__bg {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                    }
                    .hero__bg-img {
                        width: 100%;
                        height: 120%;
                        object-fit: cover;
                        opacity: 0.35;
                    }
                    .reveal-text {
                        visibility: hidden;
                    }
                    .hero__title {
                        font-size: clamp(2.5rem, 6vw, 5rem);
                        line-height: 1.05;
                        color: #fff;
                    }
                    .hero__title .accent {
                        color: #d4ff00;
                    }
                    .hero__subtitle {
                        max-width: 40rem;
                        margin: 1.5rem 0 2.5rem;
                        color: #a9adb5;
                        font-size: 1.2rem;
                    }
                    .hero__actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero__scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #a9adb5;
                    }
                "#}
            </style>
            <div class="hero__bg">
                <img class="hero__bg-img" src={HERO_IMAGE} alt="" />
            </div>
            <div class="container">
                <h1 class="hero__title reveal-text">
                    {"Performance marketing "}<span class="accent">{"that compounds"}</span>
                </h1>
                <p class="hero__subtitle reveal-text">
                    {"We build acquisition funnels, run the experiments and keep only what pays back. Every channel is measured against revenue, not clicks."}
                </p>
                <div class="hero__actions">
                    <AnchorLink href="#contact" class="btn btn--primary">
                        {"Get a strategy call"}
                        <span class="btn__icon"><i data-lucide="arrow-right"></i></span>
                    </AnchorLink>
                    <AnchorLink href="#services" class="btn btn--ghost">{"What we do"}</AnchorLink>
                </div>
            </div>
            <div class="hero__scroll-indicator">
                <i data-lucide="chevrons-down"></i>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn hero_image_ships_with_the_assets() {
        let on_disk = Path::new(env!("CARGO_MANIFEST_DIR")).join(HERO_IMAGE.trim_start_matches('/'));
        assert!(on_disk.is_file(), "missing {}", on_disk.display());
    }
}
