use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactSession, Effect, Field, FormEvent};
use crate::js;

pub struct ContactForm {
    session: ContactSession,
    // Replacing the handle drops the previous timer, which cancels it.
    status_timer: Option<Timeout>,
    refresh_icons: bool,
}

impl Component for ContactForm {
    type Message = FormEvent;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let session = ContactSession::with_rng(&mut rand::thread_rng());
        log::debug!("Contact form challenge: {:?}", session.captcha());
        Self {
            session,
            status_timer: None,
            refresh_icons: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        for effect in self.session.handle(msg) {
            self.apply(ctx, effect);
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.refresh_icons) {
            js::refresh_icons();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let fields = &self.session.fields;
        let submit = &self.session.submit;

        let on_input = |field: Field| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                FormEvent::Input {
                    field,
                    value: input.value(),
                }
            })
        };

        // The DOM value is rewritten right away; a controlled re-render alone
        // would miss keystrokes that leave the digits unchanged.
        let on_phone = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits = contact::sanitize_phone(&input.value());
            input.set_value(&digits);
            FormEvent::Input {
                field: Field::Phone,
                value: digits,
            }
        });

        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            FormEvent::Input {
                field: Field::Message,
                value: input.value(),
            }
        });

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FormEvent::Submit
        });

        let (status_class, status_style, status_text) = match &self.session.status {
            Some(status) => (status.class(), "display: block;", status.text.clone()),
            None => ("form-status".to_string(), "display: none;", String::new()),
        };

        html! {
            <section class="contact" id="contact">
                <style>
                    {r#"
                        .contact-form {
                            display: grid;
                            gap: 1rem;
                            max-width: 36rem;
                        }
                        .contact-form input,
                        .contact-form textarea {
                            width: 100%;
                            padding: 0.9rem 1rem;
                            background: rgba(255, 255, 255, 0.04);
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 8px;
                            color: #fff;
                        }
                        .captcha-row {
                            display: flex;
                            align-items: center;
                            gap: 1rem;
                        }
                        .captcha-row input {
                            max-width: 6rem;
                        }
                        .contact-form button[disabled] {
                            opacity: 0.6;
                            cursor: wait;
                        }
                        .form-status {
                            padding: 0.9rem 1rem;
                            border-radius: 8px;
                        }
                        .form-status.error {
                            background: rgba(255, 77, 77, 0.12);
                            color: #ff6b6b;
                        }
                        .form-status.success {
                            background: rgba(212, 255, 0, 0.12);
                            color: #d4ff00;
                        }
                    "#}
                </style>
                <div class="container">
                    <h2 class="section-title">{"Let's talk about your growth"}</h2>
                    <form id="contact-form" class="contact-form" onsubmit={on_submit}>
                        <input
                            type="text"
                            name="name"
                            placeholder="Your name"
                            value={fields.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                        <input
                            id="phone"
                            type="tel"
                            name="phone"
                            placeholder="Phone"
                            inputmode="numeric"
                            value={fields.phone.clone()}
                            oninput={on_phone}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Email"
                            value={fields.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        <textarea
                            name="message"
                            rows="4"
                            placeholder="Tell us about the project"
                            value={fields.message.clone()}
                            oninput={on_message}
                        />
                        <div class="captcha-row">
                            <label id="captcha-label" for="captcha-input">
                                { self.session.captcha().prompt() }
                            </label>
                            <input
                                id="captcha-input"
                                type="text"
                                inputmode="numeric"
                                autocomplete="off"
                                value={fields.captcha.clone()}
                                oninput={on_input(Field::Captcha)}
                            />
                        </div>
                        <button type="submit" class="btn btn--primary" disabled={submit.disabled}>
                            if submit.in_flight() {
                                <span>{ submit.label.clone() }</span>
                            } else {
                                { submit.label.clone() }
                                <span class="btn__icon"><i data-lucide="send"></i></span>
                            }
                        </button>
                        <div id="form-status" class={status_class} style={status_style}>
                            { status_text }
                        </div>
                    </form>
                </div>
            </section>
        }
    }
}

impl ContactForm {
    fn apply(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::ScheduleSubmitCompletion { after_ms } => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    link.send_message(FormEvent::SubmitCompleted);
                });
            }
            Effect::ScheduleStatusHide { id, after_ms } => {
                let link = ctx.link().clone();
                self.status_timer = Some(Timeout::new(after_ms, move || {
                    link.send_message(FormEvent::StatusExpired { id });
                }));
            }
            Effect::RefreshIcons => {
                self.refresh_icons = true;
            }
        }
    }
}
