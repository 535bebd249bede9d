use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod consent;
mod contact;
mod error;
mod js;
mod nav;
mod scroll;

mod components {
    pub mod anchor_link;
    pub mod contact_form;
    pub mod cookie_popup;
    pub mod header;
    pub mod hero;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use components::cookie_popup::CookiePopup;
use pages::{home::Home, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="legal-content">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <CookiePopup />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
