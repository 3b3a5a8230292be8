use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod animation;
mod config;
mod consent;
mod contact;
mod content;
mod scroll;
mod storage;
mod theme;

mod components {
    pub mod accordion;
    pub mod back_to_top;
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod footer;
    pub mod nav;
    pub mod project_modal;
    pub mod stat_counter;
    pub mod tabs;
    pub mod terminal;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod privacy;
}

use components::{
    back_to_top::BackToTop,
    cookie_banner::CookieBanner,
    footer::Footer,
    nav::Nav,
};
use pages::{
    home::Home,
    not_found::NotFound,
    privacy::PrivacyPolicy,
};
use storage::BrowserStorage;
use theme::{apply_theme, Theme};

const SITE_CSS: &str = r#"
    :root, [data-theme="dark"] {
        --bg: #121417;
        --surface: rgba(30, 32, 38, 0.85);
        --text: #f2f2f2;
        --muted: rgba(242, 242, 242, 0.7);
        --accent: #4f8cff;
        --border: rgba(79, 140, 255, 0.15);
    }
    [data-theme="light"] {
        --bg: #fafafa;
        --surface: #ffffff;
        --text: #16181d;
        --muted: #555b66;
        --accent: #2456c8;
        --border: rgba(36, 86, 200, 0.15);
    }
    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        transition: background 0.3s ease, color 0.3s ease;
    }
    a { color: var(--accent); }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 80px;
        z-index: 100;
        transition: background 0.3s ease, box-shadow 0.3s ease, height 0.3s ease;
    }
    .top-nav.scrolled {
        height: 64px;
        background: var(--surface);
        backdrop-filter: blur(10px);
        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.2);
    }
    .nav-content {
        max-width: 1100px;
        height: 100%;
        margin: 0 auto;
        padding: 0 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.3rem;
        color: var(--text);
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .nav-link {
        color: var(--muted);
        text-decoration: none;
    }
    .nav-link.active, .nav-link:hover {
        color: var(--accent);
    }
    .theme-toggle {
        background: none;
        border: 1px solid var(--border);
        border-radius: 50%;
        width: 38px;
        height: 38px;
        color: var(--text);
        cursor: pointer;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: var(--text);
    }
    .hero-cta, .contact-submit, .cookie-accept {
        display: inline-block;
        background: var(--accent);
        color: #fff;
        border: none;
        border-radius: 8px;
        padding: 0.9rem 1.8rem;
        font-size: 1rem;
        text-decoration: none;
        cursor: pointer;
    }
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.7s ease, transform 0.7s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .back-to-top {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        width: 44px;
        height: 44px;
        border-radius: 50%;
        border: none;
        background: var(--accent);
        color: #fff;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        cursor: pointer;
    }
    .back-to-top.visible {
        opacity: 1;
        pointer-events: auto;
    }
    .cookie-banner {
        position: fixed;
        left: 1rem;
        right: 1rem;
        bottom: 1rem;
        max-width: 560px;
        margin: 0 auto;
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 12px;
        padding: 1.2rem 1.5rem;
        z-index: 200;
        transform: translateY(150%);
        transition: transform 0.4s ease;
    }
    .cookie-banner.show {
        transform: none;
    }
    .cookie-actions {
        display: flex;
        justify-content: flex-end;
        gap: 0.75rem;
    }
    .cookie-decline {
        background: none;
        border: 1px solid var(--border);
        color: var(--text);
        border-radius: 8px;
        padding: 0.9rem 1.4rem;
        cursor: pointer;
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 300;
        padding: 1rem;
    }
    .modal {
        position: relative;
        background: var(--bg);
        border: 1px solid var(--border);
        border-radius: 16px;
        padding: 2.5rem;
        max-width: 640px;
        max-height: 85vh;
        overflow-y: auto;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: var(--text);
        font-size: 1.3rem;
        cursor: pointer;
    }
    .tag {
        display: inline-block;
        font-size: 0.8rem;
        border: 1px solid var(--border);
        border-radius: 999px;
        padding: 0.2rem 0.7rem;
        margin-right: 0.4rem;
    }
    .site-footer {
        border-top: 1px solid var(--border);
        padding: 2rem;
        color: var(--muted);
    }
    .footer-content {
        max-width: 1100px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .footer-links {
        display: flex;
        gap: 1.2rem;
    }
    .legal-page {
        padding-top: 8rem;
        max-width: 760px;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            background: var(--surface);
            padding: 1.5rem;
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
    }
"#;

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
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_state(|| Theme::load(&BrowserStorage));

    use_effect_with_deps(
        move |theme: &Theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let handle_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            next.save(&BrowserStorage);
            info!("Switched to {} theme", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <style>{SITE_CSS}</style>
            <Nav theme={*theme} on_toggle_theme={handle_toggle_theme} />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <BackToTop />
            <CookieBanner />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
