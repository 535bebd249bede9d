use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>
                {r#"
                    .legal-content {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 6rem 2rem 4rem;
                        color: #e6e6e6;
                    }
                    .legal-content h2 {
                        color: #d4ff00;
                        font-size: 1.3rem;
                        margin: 2rem 0 1rem;
                    }
                    .legal-content p,
                    .legal-content li {
                        color: #a9adb5;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <h1>{"Privacy & Cookies"}</h1>

            <section>
                <h2>{"1. What this site stores"}</h2>
                <p>
                    {"When you accept the cookie notice we save a single flag in your browser's local storage under the key "}
                    <code>{config::CONSENT_STORAGE_KEY}</code>
                    {" so the notice is not shown again. It never expires and contains no personal data."}
                </p>
            </section>

            <section>
                <h2>{"2. Contact form"}</h2>
                <ul>
                    <li>{"The form is checked in your browser only."}</li>
                    <li>{"Nothing you type is stored on this device."}</li>
                    <li>{"The math question only keeps simple bots away."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Withdrawing consent"}</h2>
                <p>{"Clear this site's data in your browser settings and the notice will appear again on your next visit."}</p>
            </section>

            <Link<Route> to={Route::Home} classes="btn btn--ghost">
                {"Back to the homepage"}
            </Link<Route>>
        </div>
    }
}
