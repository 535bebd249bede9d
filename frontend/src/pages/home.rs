use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{contact_form::ContactForm, header::Header, hero::Hero};
use crate::js;
use crate::Route;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "target",
        title: "Paid acquisition",
        text: "Search, social and programmatic campaigns tied to revenue, not vanity metrics.",
    },
    Service {
        icon: "flask-conical",
        title: "Conversion experiments",
        text: "Landing pages and funnels tested weekly, with the losers switched off fast.",
    },
    Service {
        icon: "line-chart",
        title: "Analytics",
        text: "One dashboard from first click to closed deal, so every decision has a number behind it.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top and draw the icons only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                js::refresh_icons();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .container {
                        width: min(1200px, 100% - 3rem);
                        margin: 0 auto;
                    }
                    section {
                        padding: 6rem 0;
                    }
                    .section-title {
                        font-size: clamp(1.8rem, 3.5vw, 2.8rem);
                        margin-bottom: 2.5rem;
                        color: #fff;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        padding: 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.02);
                    }
                    .service-card p,
                    .approach li {
                        color: #a9adb5;
                        line-height: 1.6;
                    }
                    .results-grid {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 3rem;
                    }
                    .result__value {
                        font-size: 3rem;
                        font-weight: 800;
                        color: #d4ff00;
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.6rem;
                        border-radius: 999px;
                        border: 1px solid transparent;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .btn--primary {
                        background: #d4ff00;
                        color: #0a0b0d;
                    }
                    .btn--ghost {
                        border-color: rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }
                    .footer {
                        padding: 2rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        color: #6b6f76;
                        font-size: 0.9rem;
                    }
                    .footer a {
                        color: #a9adb5;
                    }
                "#}
            </style>
            <Header />
            <Hero />

            <section class="services" id="services">
                <div class="container">
                    <h2 class="section-title">{"What we do"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <i data-lucide={service.icon}></i>
                                <h3>{service.title}</h3>
                                <p>{service.text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="approach" id="approach">
                <div class="container">
                    <h2 class="section-title">{"How we work"}</h2>
                    <ol>
                        <li>{"Audit: we read your numbers before we touch a campaign."}</li>
                        <li>{"Hypotheses: a ranked backlog of bets with expected payback."}</li>
                        <li>{"Sprints: two-week cycles, one report, no surprises."}</li>
                    </ol>
                </div>
            </section>

            <section class="results" id="results">
                <div class="container">
                    <h2 class="section-title">{"Results"}</h2>
                    <div class="results-grid">
                        <div class="result">
                            <div class="result__value">{"-38%"}</div>
                            <div>{"average cost per lead after 90 days"}</div>
                        </div>
                        <div class="result">
                            <div class="result__value">{"x2.4"}</div>
                            <div>{"median return on ad spend"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <ContactForm />

            <footer class="footer">
                <div class="container">
                    {"© HyperQ. "}
                    <Link<Route> to={Route::Privacy}>{"Privacy & cookies"}</Link<Route>>
                </div>
            </footer>
        </div>
    }
}
