use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::{self, ConsentEvent, ConsentGate};
use crate::Route;

impl Reducible for ConsentGate {
    type Action = ConsentEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.handle(action, consent::browser_store().as_ref());
        Rc::new(next)
    }
}

#[function_component(CookiePopup)]
pub fn cookie_popup() -> Html {
    let gate = use_reducer(|| ConsentGate::load(consent::browser_store().as_ref()));

    {
        let gate = gate.clone();
        use_effect_with_deps(
            move |_| {
                log::debug!("Cookie consent starts as {:?}", gate.state());
                let reveal = gate.reveal_after_ms().map(|after_ms| {
                    let gate = gate.clone();
                    Timeout::new(after_ms, move || {
                        gate.dispatch(ConsentEvent::RevealElapsed);
                    })
                });
                move || drop(reveal)
            },
            (),
        );
    }

    let on_accept = {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Cookie consent accepted");
            gate.dispatch(ConsentEvent::Accept);
        })
    };

    html! {
        <div id="cookie-popup" class={classes!("cookie-popup", gate.is_visible().then_some("active"))}>
            <style>
                {r#"
                    .cookie-popup {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 200;
                        max-width: 22rem;
                        padding: 1.25rem 1.5rem;
                        background: #15171b;
                        border: 1px solid rgba(212, 255, 0, 0.2);
                        border-radius: 12px;
                        transform: translateY(150%);
                        opacity: 0;
                        transition: transform 0.5s ease, opacity 0.5s ease;
                    }
                    .cookie-popup.active {
                        transform: translateY(0);
                        opacity: 1;
                    }
                    .cookie-popup p {
                        margin: 0 0 1rem;
                        color: #a9adb5;
                        font-size: 0.9rem;
                    }
                    .cookie-popup__actions {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                "#}
            </style>
            <p>{"We use cookies to understand how the site is used and to improve it."}</p>
            <div class="cookie-popup__actions">
                <Link<Route> to={Route::Privacy} classes="cookie-popup__link">
                    {"Learn more"}
                </Link<Route>>
                <button id="accept-cookies" class="btn btn--primary" onclick={on_accept}>
                    {"Accept"}
                </button>
            </div>
        </div>
    }
}
