use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::nav::{self, MenuState};
use crate::scroll::HeaderStyle;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#approach", "Approach"),
    ("#results", "Results"),
    ("#contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let header_style = HeaderStyle::from_scroll(scroll_y);

    // Keep the page behind the overlay from scrolling while the menu is open
    {
        use_effect_with_deps(
            move |menu: &MenuState| {
                if let Err(err) = nav::lock_body_scroll(*menu) {
                    log::warn!("Could not update body scroll lock: {}", err);
                }
                || ()
            },
            *menu,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            menu.set((*menu).after_link_click());
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        transition: padding 0.3s ease, background 0.3s ease, border-color 0.3s ease;
                        backdrop-filter: blur(8px);
                    }
                    .header__inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .logo {
                        font-weight: 800;
                        letter-spacing: 0.08em;
                        color: #d4ff00;
                        text-decoration: none;
                    }
                    .nav a {
                        margin-left: 2rem;
                        color: #e6e6e6;
                        text-decoration: none;
                    }
                    .burger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger span {
                        display: block;
                        width: 26px;
                        height: 2px;
                        margin: 6px 0;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                    .burger.active span:nth-child(2) { opacity: 0; }
                    .burger.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                    .mobile-menu-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(10, 11, 13, 0.98);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .mobile-menu-overlay.active {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .mobile-nav a {
                        display: block;
                        margin: 1.5rem 0;
                        font-size: 1.75rem;
                        color: #fff;
                        text-align: center;
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav { display: none; }
                        .burger { display: block; }
                    }
                "#}
            </style>
            <header class="header" style={header_style.inline_style()}>
                <div class="container header__inner">
                    <AnchorLink href="#top" class="logo">{"HYPERQ"}</AnchorLink>
                    <nav class="nav">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <AnchorLink href={*href}>{*label}</AnchorLink>
                        }) }
                    </nav>
                    <button
                        class={classes!("burger", menu.active_class())}
                        onclick={toggle_menu}
                        aria-label="Menu"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div class={classes!("mobile-menu-overlay", menu.active_class())}>
                <nav class="mobile-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} onclick={close_menu.clone()}>{*label}</AnchorLink>
                    }) }
                </nav>
            </div>
        </>
    }
}
